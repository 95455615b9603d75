// Copyright 2025 Irreducible Inc.

use std::ops::{Add, Mul, Neg, Sub};

use super::Error;

/// A value that is known while proving and unknown during key generation.
///
/// Circuit code computes witness values through [`Value`] so the same code runs in both
/// contexts. Arithmetic on an unknown value yields an unknown value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Value<V> {
	inner: Option<V>,
}

impl<V> Value<V> {
	pub const fn unknown() -> Self {
		Self { inner: None }
	}

	pub const fn known(value: V) -> Self {
		Self { inner: Some(value) }
	}

	pub const fn is_known(&self) -> bool {
		self.inner.is_some()
	}

	/// Extracts the value for assignment into a cell.
	///
	/// ## Throws
	///
	/// * [`Error::Synthesis`] if the value is unknown
	pub fn assign(self) -> Result<V, Error> {
		self.inner.ok_or(Error::Synthesis)
	}

	pub fn as_ref(&self) -> Value<&V> {
		Value {
			inner: self.inner.as_ref(),
		}
	}

	pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Value<W> {
		Value {
			inner: self.inner.map(f),
		}
	}

	pub fn and_then<W>(self, f: impl FnOnce(V) -> Value<W>) -> Value<W> {
		match self.inner {
			Some(value) => f(value),
			None => Value::unknown(),
		}
	}

	pub fn zip<W>(self, other: Value<W>) -> Value<(V, W)> {
		Value {
			inner: self.inner.zip(other.inner),
		}
	}
}

impl<V: Copy> Value<&V> {
	pub fn copied(self) -> Value<V> {
		Value {
			inner: self.inner.copied(),
		}
	}
}

impl<V> From<V> for Value<V> {
	fn from(value: V) -> Self {
		Self::known(value)
	}
}

impl<V: Neg> Neg for Value<V> {
	type Output = Value<V::Output>;

	fn neg(self) -> Self::Output {
		self.map(Neg::neg)
	}
}

impl<V, W> Add<Value<W>> for Value<V>
where
	V: Add<W>,
{
	type Output = Value<V::Output>;

	fn add(self, rhs: Value<W>) -> Self::Output {
		self.zip(rhs).map(|(a, b)| a + b)
	}
}

impl<V, W> Sub<Value<W>> for Value<V>
where
	V: Sub<W>,
{
	type Output = Value<V::Output>;

	fn sub(self, rhs: Value<W>) -> Self::Output {
		self.zip(rhs).map(|(a, b)| a - b)
	}
}

impl<V, W> Mul<Value<W>> for Value<V>
where
	V: Mul<W>,
{
	type Output = Value<V::Output>;

	fn mul(self, rhs: Value<W>) -> Self::Output {
		self.zip(rhs).map(|(a, b)| a * b)
	}
}

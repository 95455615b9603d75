// Copyright 2025 Irreducible Inc.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ark_ff::{batch_inversion_and_mul, Field};
use tracing::instrument;

use crate::Error;

/// A field element whose division may be deferred.
///
/// Witness generation frequently produces quotients. Inverting each denominator on its own is
/// the dominant cost, so values are kept as fractions until a whole table can be evaluated with
/// a single batched inversion in [`RationalField::batch_evaluate`].
#[derive(Clone, Copy, Debug, Default)]
pub enum RationalField<F> {
	#[default]
	Zero,
	Trivial(F),
	Rational { numerator: F, denominator: F },
}

impl<F: Field> RationalField<F> {
	pub const fn new(value: F) -> Self {
		Self::Trivial(value)
	}

	pub const fn from_fraction(numerator: F, denominator: F) -> Self {
		Self::Rational {
			numerator,
			denominator,
		}
	}

	pub fn numerator(&self) -> F {
		match self {
			Self::Zero => F::zero(),
			Self::Trivial(value) => *value,
			Self::Rational { numerator, .. } => *numerator,
		}
	}

	/// Returns the denominator, or `None` when it is implicitly one.
	pub fn denominator(&self) -> Option<F> {
		match self {
			Self::Rational { denominator, .. } => Some(*denominator),
			_ => None,
		}
	}

	pub fn is_zero_vartime(&self) -> bool {
		match self {
			Self::Zero => true,
			Self::Trivial(value) => value.is_zero(),
			// A zero denominator evaluates to an error, never to zero.
			Self::Rational { numerator, .. } => numerator.is_zero(),
		}
	}

	pub fn double(&self) -> Self {
		match self {
			Self::Zero => Self::Zero,
			Self::Trivial(value) => Self::Trivial(value.double()),
			Self::Rational {
				numerator,
				denominator,
			} => Self::from_fraction(numerator.double(), *denominator),
		}
	}

	pub fn square(&self) -> Self {
		match self {
			Self::Zero => Self::Zero,
			Self::Trivial(value) => Self::Trivial(value.square()),
			Self::Rational {
				numerator,
				denominator,
			} => Self::from_fraction(numerator.square(), denominator.square()),
		}
	}

	/// Swaps numerator and denominator. The inverse of zero stays zero.
	pub fn invert(&self) -> Self {
		match self {
			Self::Zero => Self::Zero,
			Self::Trivial(value) if value.is_zero() => Self::Zero,
			Self::Trivial(value) => Self::from_fraction(F::one(), *value),
			Self::Rational { numerator, .. } if numerator.is_zero() => Self::Zero,
			Self::Rational {
				numerator,
				denominator,
			} => Self::from_fraction(*denominator, *numerator),
		}
	}

	/// Evaluates a single value, inverting its denominator on the spot.
	pub fn evaluate(&self) -> Result<F, Error> {
		match self {
			Self::Zero => Ok(F::zero()),
			Self::Trivial(value) => Ok(*value),
			Self::Rational {
				numerator,
				denominator,
			} => denominator
				.inverse()
				.map(|inverse| *numerator * inverse)
				.ok_or(Error::NonInvertibleDenominator { index: 0 }),
		}
	}

	/// Evaluates every value of `values` and multiplies the results by `coeff`.
	///
	/// All denominators are inverted together with one batched inversion. `Zero` and `Trivial`
	/// entries carry no denominator and are left out of the inversion. The result is identical to
	/// evaluating each value independently.
	///
	/// ## Throws
	///
	/// * [`Error::NonInvertibleDenominator`] naming the first value with a zero denominator
	#[instrument("RationalField::batch_evaluate", skip_all, level = "debug", fields(len = values.len()))]
	pub fn batch_evaluate(values: &[Self], coeff: Option<F>) -> Result<Vec<F>, Error> {
		let coeff = coeff.unwrap_or_else(F::one);

		let mut denominators = values
			.iter()
			.enumerate()
			.filter_map(|(index, value)| match value {
				Self::Rational { denominator, .. } if denominator.is_zero() => {
					Some(Err(Error::NonInvertibleDenominator { index }))
				}
				Self::Rational { denominator, .. } => Some(Ok(*denominator)),
				_ => None,
			})
			.collect::<Result<Vec<_>, _>>()?;

		// Folds the scale factor into every inverse.
		batch_inversion_and_mul(&mut denominators, &coeff);

		let mut inverses = denominators.into_iter();
		let evaluated = values
			.iter()
			.map(|value| match value {
				Self::Zero => F::zero(),
				Self::Trivial(value) => *value * coeff,
				Self::Rational { numerator, .. } => {
					*numerator
						* inverses
							.next()
							.expect("one inverse is computed per rational value")
				}
			})
			.collect();
		Ok(evaluated)
	}

	fn as_fraction(&self) -> (F, F) {
		match self {
			Self::Zero => (F::zero(), F::one()),
			Self::Trivial(value) => (*value, F::one()),
			Self::Rational {
				numerator,
				denominator,
			} => (*numerator, *denominator),
		}
	}
}

impl<F: Field> PartialEq for RationalField<F> {
	fn eq(&self, other: &Self) -> bool {
		let (lhs_numerator, lhs_denominator) = self.as_fraction();
		let (rhs_numerator, rhs_denominator) = other.as_fraction();
		lhs_numerator * rhs_denominator == rhs_numerator * lhs_denominator
	}
}

impl<F: Field> Eq for RationalField<F> {}

impl<F: Field> From<F> for RationalField<F> {
	fn from(value: F) -> Self {
		Self::Trivial(value)
	}
}

impl<F: Field> From<&F> for RationalField<F> {
	fn from(value: &F) -> Self {
		Self::Trivial(*value)
	}
}

impl<F: Field> From<(F, F)> for RationalField<F> {
	fn from((numerator, denominator): (F, F)) -> Self {
		Self::from_fraction(numerator, denominator)
	}
}

impl<F: Field> Neg for RationalField<F> {
	type Output = Self;

	fn neg(self) -> Self {
		match self {
			Self::Zero => Self::Zero,
			Self::Trivial(value) => Self::Trivial(-value),
			Self::Rational {
				numerator,
				denominator,
			} => Self::from_fraction(-numerator, denominator),
		}
	}
}

impl<F: Field> Add for RationalField<F> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Zero, other) | (other, Self::Zero) => other,
			(Self::Trivial(lhs), Self::Trivial(rhs)) => Self::Trivial(lhs + rhs),
			(
				Self::Trivial(value),
				Self::Rational {
					numerator,
					denominator,
				},
			)
			| (
				Self::Rational {
					numerator,
					denominator,
				},
				Self::Trivial(value),
			) => Self::from_fraction(value * denominator + numerator, denominator),
			(
				Self::Rational {
					numerator: lhs_numerator,
					denominator: lhs_denominator,
				},
				Self::Rational {
					numerator: rhs_numerator,
					denominator: rhs_denominator,
				},
			) => Self::from_fraction(
				lhs_numerator * rhs_denominator + rhs_numerator * lhs_denominator,
				lhs_denominator * rhs_denominator,
			),
		}
	}
}

impl<F: Field> Add<F> for RationalField<F> {
	type Output = Self;

	fn add(self, rhs: F) -> Self {
		self + Self::Trivial(rhs)
	}
}

impl<F: Field> Sub for RationalField<F> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		self + (-rhs)
	}
}

impl<F: Field> Sub<F> for RationalField<F> {
	type Output = Self;

	fn sub(self, rhs: F) -> Self {
		self + Self::Trivial(-rhs)
	}
}

impl<F: Field> Mul for RationalField<F> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Zero, _) | (_, Self::Zero) => Self::Zero,
			(Self::Trivial(lhs), Self::Trivial(rhs)) => Self::Trivial(lhs * rhs),
			(
				Self::Trivial(value),
				Self::Rational {
					numerator,
					denominator,
				},
			)
			| (
				Self::Rational {
					numerator,
					denominator,
				},
				Self::Trivial(value),
			) => Self::from_fraction(value * numerator, denominator),
			(
				Self::Rational {
					numerator: lhs_numerator,
					denominator: lhs_denominator,
				},
				Self::Rational {
					numerator: rhs_numerator,
					denominator: rhs_denominator,
				},
			) => Self::from_fraction(
				lhs_numerator * rhs_numerator,
				lhs_denominator * rhs_denominator,
			),
		}
	}
}

impl<F: Field> Mul<F> for RationalField<F> {
	type Output = Self;

	fn mul(self, rhs: F) -> Self {
		self * Self::Trivial(rhs)
	}
}

impl<F: Field> AddAssign for RationalField<F> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<F: Field> SubAssign for RationalField<F> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<F: Field> MulAssign for RationalField<F> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

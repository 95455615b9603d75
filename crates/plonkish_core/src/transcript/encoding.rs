// Copyright 2025 Irreducible Inc.

//! Fixed-width big-endian encodings shared by the proof stream and the hash absorption.

use ark_ec::short_weierstrass::Affine;
use ark_ff::{BigInteger, PrimeField, Zero};
use bytes::{Buf, BufMut};
use plonkish_utils::ensure;

use super::Error;
use crate::CommitmentCurve;

/// Number of bytes of an encoded element of `F`, the byte length of its modulus.
pub fn field_byte_len<F: PrimeField>() -> usize {
	F::MODULUS_BIT_SIZE.div_ceil(8) as usize
}

/// Number of bytes of an encoded commitment: both affine coordinates.
pub fn point_byte_len<C: CommitmentCurve>() -> usize {
	2 * field_byte_len::<C::BaseField>()
}

pub fn encode_field<F: PrimeField>(value: &F, mut write_buf: impl BufMut) {
	let bytes = value.into_bigint().to_bytes_be();
	write_buf.put_slice(&bytes[bytes.len() - field_byte_len::<F>()..]);
}

/// Reads one field element, rejecting encodings of integers at or above the modulus.
pub fn decode_field<F: PrimeField>(mut read_buf: impl Buf) -> Result<F, Error> {
	let len = field_byte_len::<F>();
	ensure!(read_buf.remaining() >= len, Error::NotEnoughBytes);

	let mut bytes = vec![0u8; len];
	read_buf.copy_to_slice(&mut bytes);

	let value = F::from_be_bytes_mod_order(&bytes);
	let mut canonical = Vec::with_capacity(len);
	encode_field(&value, &mut canonical);
	ensure!(canonical == bytes, Error::NonCanonicalEncoding);
	Ok(value)
}

/// Writes `x || y`. The point at infinity is written as two zero coordinates.
pub fn encode_point<C: CommitmentCurve>(point: &Affine<C>, mut write_buf: impl BufMut) {
	if point.infinity {
		let zero = C::BaseField::zero();
		encode_field(&zero, &mut write_buf);
		encode_field(&zero, &mut write_buf);
	} else {
		encode_field(&point.x, &mut write_buf);
		encode_field(&point.y, &mut write_buf);
	}
}

pub fn decode_point<C: CommitmentCurve>(mut read_buf: impl Buf) -> Result<Affine<C>, Error> {
	ensure!(read_buf.remaining() >= point_byte_len::<C>(), Error::NotEnoughBytes);

	let x = decode_field::<C::BaseField>(&mut read_buf)?;
	let y = decode_field::<C::BaseField>(&mut read_buf)?;
	if x.is_zero() && y.is_zero() {
		return Ok(Affine::identity());
	}

	let point = Affine::new_unchecked(x, y);
	ensure!(point.is_on_curve(), Error::PointNotOnCurve);
	ensure!(point.is_in_correct_subgroup_assuming_on_curve(), Error::PointNotInSubgroup);
	Ok(point)
}

// Copyright 2025 Irreducible Inc.

use ark_ec::{
	short_weierstrass::{Affine, SWCurveConfig},
	CurveConfig,
};
use ark_ff::PrimeField;

/// A short Weierstrass curve whose points serve as commitments.
///
/// Commitments are encoded by their affine coordinates, so the base field must be a prime field
/// with a canonical integer representation.
pub trait CommitmentCurve: SWCurveConfig<BaseField: PrimeField> {}

impl<C> CommitmentCurve for C where C: SWCurveConfig<BaseField: PrimeField> {}

/// A commitment is an affine point on the curve.
pub type Commitment<C> = Affine<C>;

/// The scalar field the circuit is defined over.
pub type Scalar<C> = <C as CurveConfig>::ScalarField;

// Copyright 2025 Irreducible Inc.

//! The circuit model: column keys, phases, challenges and the assignment capability.

mod assignment;
mod column;
mod error;
mod value;

use ark_ff::PrimeField;
pub use assignment::Assignment;
pub use column::*;
pub use error::Error;
pub use value::Value;

use crate::ConstraintSystem;

/// A circuit: a schema declared once, and synthesis code that fills it in.
pub trait Circuit<F: PrimeField> {
	type Config: Clone;

	/// Declares columns, selectors and challenges.
	fn configure(meta: &mut ConstraintSystem) -> Self::Config;

	/// Reports the circuit's cells. Runs once per phase while proving and once during key
	/// generation.
	fn synthesize(
		&self,
		config: Self::Config,
		assignment: &mut Assignment<'_, '_, F>,
		constants: &[Column<Fixed>],
	) -> Result<(), Error>;
}

// Copyright 2025 Irreducible Inc.

//! Proving-side pipeline of a PLONK-family argument.
//!
//! Circuit code reports cell values through the [`circuit::Assignment`] capability. During
//! proving the values land in a [`prover::WitnessCollection`] per synthesis phase, are evaluated
//! in one batched inversion, blinded, committed and written to a Fiat-Shamir
//! [`transcript`]. The [`prover::Synthesizer`] drives this phase by phase and squeezes the
//! challenges the next phase depends on. Key generation runs the same circuit code against a
//! [`keygen::Assembly`].

pub mod circuit;
pub mod constraint_system;
pub mod curve;
pub mod keygen;
pub mod pcs;
pub mod permutation;
pub mod prover;
pub mod transcript;

pub use constraint_system::ConstraintSystem;
pub use curve::{Commitment, CommitmentCurve, Scalar};

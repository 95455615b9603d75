// Copyright 2025 Irreducible Inc.

//! Arithmetic primitives for the proving pipeline, built atop `ark-ff`.
//!
//! This crate provides:
//!
//! * [`RationalField`], a field value whose division is deferred so that many values can be
//!   inverted together
//! * [`RationalEvals`], a rational-valued evaluation table over a power-of-two domain
//! * [`TableArena`], which batches several tables into a single inversion pass

mod arena;
mod error;
mod rational;
mod rational_evals;

pub use arena::*;
pub use error::*;
pub use rational::*;
pub use rational_evals::*;

// Copyright 2025 Irreducible Inc.

//! Small helpers shared by the `plonkish` crates: error-returning macros, tracing setup and
//! thread pool configuration.

pub mod checked_arithmetics;
pub mod error_utils;
pub mod rayon;
pub mod tracing;

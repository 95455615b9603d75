// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("polynomial has {len} coefficients, the scheme supports at most {n}")]
	PolynomialTooLarge { len: usize, n: usize },
	#[error("expected {expected} evaluations, got {got}")]
	EvaluationsSizeMismatch { expected: usize, got: usize },
	#[error("the scalar field has no evaluation domain of size 2^{k}")]
	DomainUnavailable { k: u32 },
}

// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Transcript is not empty, {remaining} bytes")]
	TranscriptNotEmpty { remaining: usize },
	#[error("Not enough bytes in the buffer")]
	NotEnoughBytes,
	#[error("field element encoding is not canonical")]
	NonCanonicalEncoding,
	#[error("decoded point is not on the curve")]
	PointNotOnCurve,
	#[error("decoded point is not in the prime-order subgroup")]
	PointNotInSubgroup,
}

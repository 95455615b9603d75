// Copyright 2025 Irreducible Inc.

//! Fiat-Shamir transcripts.
//!
//! A transcript keeps a running hash of everything the prover has said. Prover messages are
//! absorbed with the `write_*_to_transcript` methods; [`Transcript::squeeze_challenge`] turns the
//! current state into a verifier challenge. The writer additionally appends every message it
//! absorbs to the proof stream, and the reader replays that stream, so a reader that performs
//! the same sequence of reads and squeezes derives the same challenges.

mod encoding;
mod error;
mod hash;

use auto_impl::auto_impl;
pub use encoding::{
	decode_field, decode_point, encode_field, encode_point, field_byte_len, point_byte_len,
};
pub use error::Error;
pub use hash::{HashTranscriptReader, HashTranscriptWriter, Sha256Reader, Sha256Writer};

use crate::{Commitment, CommitmentCurve, Scalar};

/// The hash state shared by both sides of the protocol.
#[auto_impl(&mut)]
pub trait Transcript<C: CommitmentCurve> {
	/// Derives a challenge from everything absorbed so far.
	fn squeeze_challenge(&mut self) -> Scalar<C>;

	fn write_commitment_to_transcript(&mut self, commitment: &Commitment<C>) -> Result<(), Error>;

	fn write_scalar_to_transcript(&mut self, scalar: &Scalar<C>) -> Result<(), Error>;
}

/// Prover side: absorbs a message and appends it to the proof.
#[auto_impl(&mut)]
pub trait TranscriptWrite<C: CommitmentCurve>: Transcript<C> {
	fn write_commitment_to_proof(&mut self, commitment: &Commitment<C>) -> Result<(), Error>;

	fn write_scalar_to_proof(&mut self, scalar: &Scalar<C>) -> Result<(), Error>;
}

/// Verifier side: reads a message from the proof and absorbs it.
#[auto_impl(&mut)]
pub trait TranscriptRead<C: CommitmentCurve>: Transcript<C> {
	fn read_commitment_from_proof(&mut self) -> Result<Commitment<C>, Error>;

	fn read_scalar_from_proof(&mut self) -> Result<Scalar<C>, Error>;
}

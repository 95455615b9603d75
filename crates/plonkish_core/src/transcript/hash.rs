// Copyright 2025 Irreducible Inc.

use std::marker::PhantomData;

use ark_ff::PrimeField;
use bytes::{Buf, Bytes, BytesMut};
use digest::Digest;
use tracing::warn;

use super::{
	encoding::{decode_field, decode_point, encode_field, encode_point},
	Error, Transcript, TranscriptRead, TranscriptWrite,
};
use crate::{Commitment, CommitmentCurve, Scalar};

/// Zero padding absorbed before every message tag.
const MESSAGE_PREFIX: [u8; 31] = [0; 31];

const CHALLENGE_TAG: u8 = 0x00;
const COMMITMENT_TAG: u8 = 0x01;
const SCALAR_TAG: u8 = 0x02;

pub type Sha256Writer<C> = HashTranscriptWriter<sha2::Sha256, C>;
pub type Sha256Reader<C> = HashTranscriptReader<sha2::Sha256, C>;

/// Hash ratchet. Squeezing replaces the state with a fresh hasher seeded by the digest.
#[derive(Debug, Clone)]
struct HashState<H> {
	hasher: H,
}

impl<H: Digest + Clone> HashState<H> {
	fn new() -> Self {
		Self { hasher: H::new() }
	}

	fn absorb_commitment<C: CommitmentCurve>(&mut self, commitment: &Commitment<C>) {
		let mut message = Vec::with_capacity(MESSAGE_PREFIX.len() + 1 + super::point_byte_len::<C>());
		message.extend_from_slice(&MESSAGE_PREFIX);
		message.push(COMMITMENT_TAG);
		encode_point(commitment, &mut message);
		self.hasher.update(&message);
	}

	fn absorb_scalar<F: PrimeField>(&mut self, scalar: &F) {
		let mut message = Vec::with_capacity(MESSAGE_PREFIX.len() + 1 + super::field_byte_len::<F>());
		message.extend_from_slice(&MESSAGE_PREFIX);
		message.push(SCALAR_TAG);
		encode_field(scalar, &mut message);
		self.hasher.update(&message);
	}

	fn squeeze<F: PrimeField>(&mut self) -> F {
		self.hasher.update([CHALLENGE_TAG]);
		let digest = self.hasher.clone().finalize();

		self.hasher = H::new();
		self.hasher.update(&digest);

		F::from_le_bytes_mod_order(&digest)
	}
}

/// Prover transcript over the hash function `H`, writing the proof into an in-memory buffer.
#[derive(Debug)]
pub struct HashTranscriptWriter<H, C> {
	state: HashState<H>,
	buffer: BytesMut,
	_marker: PhantomData<C>,
}

impl<H: Digest + Clone, C: CommitmentCurve> Default for HashTranscriptWriter<H, C> {
	fn default() -> Self {
		Self {
			state: HashState::new(),
			buffer: BytesMut::new(),
			_marker: PhantomData,
		}
	}
}

impl<H: Digest + Clone, C: CommitmentCurve> HashTranscriptWriter<H, C> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of proof bytes written so far.
	pub fn proof_len(&self) -> usize {
		self.buffer.len()
	}

	pub fn finalize(self) -> Vec<u8> {
		self.buffer.to_vec()
	}

	pub fn into_reader(self) -> HashTranscriptReader<H, C> {
		HashTranscriptReader::new(self.finalize())
	}
}

impl<H: Digest + Clone, C: CommitmentCurve> Transcript<C> for HashTranscriptWriter<H, C> {
	fn squeeze_challenge(&mut self) -> Scalar<C> {
		self.state.squeeze()
	}

	fn write_commitment_to_transcript(&mut self, commitment: &Commitment<C>) -> Result<(), Error> {
		self.state.absorb_commitment(commitment);
		Ok(())
	}

	fn write_scalar_to_transcript(&mut self, scalar: &Scalar<C>) -> Result<(), Error> {
		self.state.absorb_scalar(scalar);
		Ok(())
	}
}

impl<H: Digest + Clone, C: CommitmentCurve> TranscriptWrite<C> for HashTranscriptWriter<H, C> {
	fn write_commitment_to_proof(&mut self, commitment: &Commitment<C>) -> Result<(), Error> {
		self.write_commitment_to_transcript(commitment)?;
		encode_point(commitment, &mut self.buffer);
		Ok(())
	}

	fn write_scalar_to_proof(&mut self, scalar: &Scalar<C>) -> Result<(), Error> {
		self.write_scalar_to_transcript(scalar)?;
		encode_field(scalar, &mut self.buffer);
		Ok(())
	}
}

/// Verifier transcript over the hash function `H`.
///
/// Call [`Self::finalize`] after the last read to check that the proof was consumed entirely.
#[derive(Debug)]
pub struct HashTranscriptReader<H, C> {
	state: HashState<H>,
	buffer: Bytes,
	_marker: PhantomData<C>,
}

impl<H: Digest + Clone, C: CommitmentCurve> HashTranscriptReader<H, C> {
	pub fn new(proof: Vec<u8>) -> Self {
		Self {
			state: HashState::new(),
			buffer: Bytes::from(proof),
			_marker: PhantomData,
		}
	}

	pub fn finalize(self) -> Result<(), Error> {
		if self.buffer.has_remaining() {
			return Err(Error::TranscriptNotEmpty {
				remaining: self.buffer.remaining(),
			});
		}
		Ok(())
	}
}

impl<H, C> Drop for HashTranscriptReader<H, C> {
	fn drop(&mut self) {
		if self.buffer.has_remaining() {
			warn!("Transcript reader is not fully read out: {:?} bytes left", self.buffer.remaining())
		}
	}
}

impl<H: Digest + Clone, C: CommitmentCurve> Transcript<C> for HashTranscriptReader<H, C> {
	fn squeeze_challenge(&mut self) -> Scalar<C> {
		self.state.squeeze()
	}

	fn write_commitment_to_transcript(&mut self, commitment: &Commitment<C>) -> Result<(), Error> {
		self.state.absorb_commitment(commitment);
		Ok(())
	}

	fn write_scalar_to_transcript(&mut self, scalar: &Scalar<C>) -> Result<(), Error> {
		self.state.absorb_scalar(scalar);
		Ok(())
	}
}

impl<H: Digest + Clone, C: CommitmentCurve> TranscriptRead<C> for HashTranscriptReader<H, C> {
	fn read_commitment_from_proof(&mut self) -> Result<Commitment<C>, Error> {
		let commitment = decode_point(&mut self.buffer)?;
		self.write_commitment_to_transcript(&commitment)?;
		Ok(commitment)
	}

	fn read_scalar_from_proof(&mut self) -> Result<Scalar<C>, Error> {
		let scalar = decode_field(&mut self.buffer)?;
		self.write_scalar_to_transcript(&scalar)?;
		Ok(scalar)
	}
}

#[cfg(test)]
mod tests {
	use ark_bn254::{g1::Config as G1, Fr, G1Affine};
	use ark_ec::{AffineRepr, CurveGroup};
	use ark_ff::{BigInteger, UniformRand};
	use assert_matches::assert_matches;
	use proptest::prelude::*;
	use rand::{rngs::StdRng, SeedableRng};
	use sha2::{Digest, Sha256};

	use super::*;

	fn random_point(rng: &mut StdRng) -> G1Affine {
		(G1Affine::generator() * Fr::rand(rng)).into_affine()
	}

	#[test]
	fn test_squeeze_is_deterministic() {
		let mut rng = StdRng::seed_from_u64(0);
		let point = random_point(&mut rng);
		let scalar = Fr::rand(&mut rng);

		let run = || {
			let mut transcript = Sha256Writer::<G1>::new();
			transcript.write_commitment_to_proof(&point).unwrap();
			let first = transcript.squeeze_challenge();
			transcript.write_scalar_to_proof(&scalar).unwrap();
			let second = transcript.squeeze_challenge();
			(first, second, transcript.finalize())
		};
		assert_eq!(run(), run());
	}

	#[test]
	fn test_empty_squeeze_matches_manual_hash() {
		let mut transcript = Sha256Writer::<G1>::new();
		let challenge = transcript.squeeze_challenge();

		let digest = Sha256::digest([0u8]);
		assert_eq!(challenge, Fr::from_le_bytes_mod_order(&digest));

		// The state is now a fresh hash seeded with the digest.
		let next = transcript.squeeze_challenge();
		let mut hasher = Sha256::new();
		hasher.update(digest);
		hasher.update([0u8]);
		assert_eq!(next, Fr::from_le_bytes_mod_order(&hasher.finalize()));
	}

	#[test]
	fn test_scalar_absorption_matches_manual_hash() {
		let scalar = Fr::from(5u64);
		let mut transcript = Sha256Writer::<G1>::new();
		transcript.write_scalar_to_transcript(&scalar).unwrap();
		let challenge = transcript.squeeze_challenge();

		let mut hasher = Sha256::new();
		hasher.update([0u8; 31]);
		hasher.update([2u8]);
		hasher.update(scalar.into_bigint().to_bytes_be());
		hasher.update([0u8]);
		assert_eq!(challenge, Fr::from_le_bytes_mod_order(&hasher.finalize()));

		// Absorbing into the transcript alone leaves the proof empty.
		assert_eq!(transcript.proof_len(), 0);
	}

	#[test]
	fn test_commitment_absorption_matches_manual_hash() {
		let point = G1Affine::generator();
		let mut transcript = Sha256Writer::<G1>::new();
		transcript.write_commitment_to_proof(&point).unwrap();
		let challenge = transcript.squeeze_challenge();

		let mut hasher = Sha256::new();
		hasher.update([0u8; 31]);
		hasher.update([1u8]);
		hasher.update(point.x.into_bigint().to_bytes_be());
		hasher.update(point.y.into_bigint().to_bytes_be());
		hasher.update([0u8]);
		assert_eq!(challenge, Fr::from_le_bytes_mod_order(&hasher.finalize()));

		assert_eq!(transcript.finalize().len(), 64);
	}

	#[test]
	fn test_message_kinds_are_domain_separated() {
		let value = Fr::from(1u64);
		let mut scalar_transcript = Sha256Writer::<G1>::new();
		scalar_transcript.write_scalar_to_transcript(&value).unwrap();

		let mut commitment_transcript = Sha256Writer::<G1>::new();
		commitment_transcript
			.write_commitment_to_transcript(&G1Affine::identity())
			.unwrap();

		assert_ne!(scalar_transcript.squeeze_challenge(), commitment_transcript.squeeze_challenge());
	}

	#[test]
	fn test_reader_finalize_reports_leftover() {
		let mut writer = Sha256Writer::<G1>::new();
		writer.write_scalar_to_proof(&Fr::from(3u64)).unwrap();
		writer.write_scalar_to_proof(&Fr::from(4u64)).unwrap();

		let mut reader = writer.into_reader();
		assert_eq!(reader.read_scalar_from_proof().unwrap(), Fr::from(3u64));
		assert_matches!(reader.finalize(), Err(Error::TranscriptNotEmpty { remaining: 32 }));
	}

	#[test]
	fn test_reader_short_proof() {
		let mut reader = Sha256Reader::<G1>::new(vec![0u8; 40]);
		assert_matches!(reader.read_commitment_from_proof(), Err(Error::NotEnoughBytes));
	}

	#[test]
	fn test_reader_rejects_non_canonical_scalar() {
		let mut reader = Sha256Reader::<G1>::new(vec![0xff; 32]);
		assert_matches!(reader.read_scalar_from_proof(), Err(Error::NonCanonicalEncoding));
	}

	#[test]
	fn test_identity_round_trip() {
		let mut writer = Sha256Writer::<G1>::new();
		writer.write_commitment_to_proof(&G1Affine::identity()).unwrap();
		let expected = writer.squeeze_challenge();

		let mut reader = writer.into_reader();
		assert!(reader.read_commitment_from_proof().unwrap().is_zero());
		assert_eq!(reader.squeeze_challenge(), expected);
		reader.finalize().unwrap();
	}

	#[derive(Debug, Clone)]
	enum Message {
		Commitment(u64),
		Scalar(u64),
		Squeeze,
	}

	fn arb_message() -> impl Strategy<Value = Message> {
		prop_oneof![
			any::<u64>().prop_map(Message::Commitment),
			any::<u64>().prop_map(Message::Scalar),
			Just(Message::Squeeze),
		]
	}

	proptest! {
		#[test]
		fn test_reader_replays_writer(messages in prop::collection::vec(arb_message(), 0..16)) {
			let mut writer = Sha256Writer::<G1>::new();
			let mut written_challenges = Vec::new();
			for message in &messages {
				match *message {
					Message::Commitment(k) => writer
						.write_commitment_to_proof(&(G1Affine::generator() * Fr::from(k)).into_affine())
						.unwrap(),
					Message::Scalar(v) => writer.write_scalar_to_proof(&Fr::from(v)).unwrap(),
					Message::Squeeze => written_challenges.push(writer.squeeze_challenge()),
				}
			}
			written_challenges.push(writer.squeeze_challenge());

			let mut reader = writer.into_reader();
			let mut read_challenges = Vec::new();
			for message in &messages {
				match *message {
					Message::Commitment(k) => {
						let point = reader.read_commitment_from_proof().unwrap();
						prop_assert_eq!(point, (G1Affine::generator() * Fr::from(k)).into_affine());
					}
					Message::Scalar(v) => {
						prop_assert_eq!(reader.read_scalar_from_proof().unwrap(), Fr::from(v));
					}
					Message::Squeeze => read_challenges.push(reader.squeeze_challenge()),
				}
			}
			read_challenges.push(reader.squeeze_challenge());

			prop_assert_eq!(written_challenges, read_challenges);
			prop_assert!(reader.finalize().is_ok());
		}
	}
}

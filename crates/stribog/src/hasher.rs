// Copyright 2026 The Stribog Developers

//! Runtime-width hashing façade.
//!
//! [`StreebogHasher`] drives the same compression core as the typed
//! [`Streebog256`](crate::Streebog256) / [`Streebog512`](crate::Streebog512)
//! hashers but selects the output width at construction time and enforces
//! the feed/finalize lifecycle with runtime checks: the typed API makes
//! use-after-finalize unrepresentable by consuming the hasher, while this
//! one reports it as [`Error::UseAfterFinalize`]. The free functions at the
//! bottom cover the one-shot and reader-driven cases.

use std::io;

use crate::compress::StreebogState;
use crate::consts::BLOCK_BYTES;
use crate::error::Error;

/// Digest width selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputWidth {
	/// 256-bit digest, all-0x01 initial chaining value.
	Bits256,
	/// 512-bit digest, all-zero initial chaining value.
	Bits512,
}

impl OutputWidth {
	/// Maps a width in bits to a selector, rejecting anything the standard
	/// does not define.
	pub fn from_bits(bits: usize) -> Result<Self, Error> {
		match bits {
			256 => Ok(Self::Bits256),
			512 => Ok(Self::Bits512),
			_ => Err(Error::InvalidOutputWidth { bits }),
		}
	}

	/// Digest size in bytes.
	pub const fn digest_size(self) -> usize {
		match self {
			Self::Bits256 => 32,
			Self::Bits512 => 64,
		}
	}

	const fn iv_byte(self) -> u8 {
		match self {
			Self::Bits256 => 0x01,
			Self::Bits512 => 0x00,
		}
	}

	/// Selects this width's digest bytes out of the full chaining value.
	fn select(self, full: [u8; BLOCK_BYTES]) -> Vec<u8> {
		match self {
			Self::Bits256 => full[BLOCK_BYTES / 2..].to_vec(),
			Self::Bits512 => full.to_vec(),
		}
	}
}

/// A single Streebog hashing session with a runtime-chosen output width.
///
/// Create, feed bytes in any chunking, finalize once. The session is spent
/// after [`finalize`](Self::finalize); later calls fail without disturbing
/// the digest already produced.
#[derive(Clone)]
pub struct StreebogHasher {
	state: StreebogState,
	width: OutputWidth,
	finalized: bool,
}

impl StreebogHasher {
	/// Fresh session for the given width.
	pub fn new(width: OutputWidth) -> Self {
		Self {
			state: StreebogState::new(width.iv_byte()),
			width,
			finalized: false,
		}
	}

	/// Fresh session for a width given in bits; fails with
	/// [`Error::InvalidOutputWidth`] unless `bits` is 256 or 512.
	pub fn with_output_bits(bits: usize) -> Result<Self, Error> {
		Ok(Self::new(OutputWidth::from_bits(bits)?))
	}

	/// The width this session was created with.
	pub fn output_width(&self) -> OutputWidth {
		self.width
	}

	/// Absorb message bytes. Feeding an empty slice is a no-op.
	pub fn feed(&mut self, data: &[u8]) -> Result<(), Error> {
		if self.finalized {
			return Err(Error::UseAfterFinalize);
		}
		self.state.update(data);
		Ok(())
	}

	/// Run finalization and return the digest: 32 bytes for the 256-bit
	/// width, 64 for the 512-bit width. The session is spent afterwards.
	pub fn finalize(&mut self) -> Result<Vec<u8>, Error> {
		if self.finalized {
			return Err(Error::UseAfterFinalize);
		}
		self.finalized = true;
		Ok(self.width.select(self.state.finalize()))
	}
}

/// One-shot 256-bit digest of a byte slice.
pub fn streebog256(data: &[u8]) -> [u8; 32] {
	let mut state = StreebogState::new(OutputWidth::Bits256.iv_byte());
	state.update(data);
	let full = state.finalize();
	full[BLOCK_BYTES / 2..].try_into().expect("upper half is 32 bytes")
}

/// One-shot 512-bit digest of a byte slice.
pub fn streebog512(data: &[u8]) -> [u8; 64] {
	let mut state = StreebogState::new(OutputWidth::Bits512.iv_byte());
	state.update(data);
	state.finalize()
}

/// Hashes everything a reader yields, feeding the core in 8 KiB chunks.
///
/// The core never performs I/O itself; the reader is the caller-owned byte
/// source, and its errors surface unchanged. Interrupted reads are retried.
pub fn hash_reader<R: io::Read>(width: OutputWidth, mut reader: R) -> io::Result<Vec<u8>> {
	let mut state = StreebogState::new(width.iv_byte());
	let mut buf = [0u8; 8192];
	loop {
		match reader.read(&mut buf) {
			Ok(0) => break,
			Ok(read) => state.update(&buf[..read]),
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
	Ok(width.select(state.finalize()))
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use digest::Digest;
	use hex_literal::hex;

	use super::*;
	use crate::digest::{Streebog256, Streebog512};

	#[test]
	fn width_validation() {
		assert!(matches!(OutputWidth::from_bits(256), Ok(OutputWidth::Bits256)));
		assert!(matches!(OutputWidth::from_bits(512), Ok(OutputWidth::Bits512)));
		for bits in [0, 1, 128, 255, 384, 1024] {
			assert_eq!(
				OutputWidth::from_bits(bits),
				Err(Error::InvalidOutputWidth { bits }),
			);
		}
		assert!(StreebogHasher::with_output_bits(384).is_err());
	}

	#[test]
	fn agrees_with_the_typed_hashers() {
		let data: Vec<u8> = (0..300u32).map(|i| i as u8).collect();

		let mut hasher = StreebogHasher::new(OutputWidth::Bits256);
		hasher.feed(&data).unwrap();
		assert_eq!(hasher.finalize().unwrap(), Streebog256::digest(&data).to_vec());

		let mut hasher = StreebogHasher::new(OutputWidth::Bits512);
		hasher.feed(&data).unwrap();
		assert_eq!(hasher.finalize().unwrap(), Streebog512::digest(&data).to_vec());

		assert_eq!(streebog256(&data).to_vec(), Streebog256::digest(&data).to_vec());
		assert_eq!(streebog512(&data).to_vec(), Streebog512::digest(&data).to_vec());
	}

	#[test]
	fn feeding_nothing_is_a_noop() {
		let mut hasher = StreebogHasher::new(OutputWidth::Bits256);
		hasher.feed(b"").unwrap();
		assert_eq!(
			hasher.finalize().unwrap(),
			hex!("3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb").to_vec(),
		);
	}

	#[test]
	fn use_after_finalize_is_rejected() {
		let mut hasher = StreebogHasher::new(OutputWidth::Bits256);
		hasher.feed(b"payload").unwrap();
		let digest = hasher.finalize().unwrap();

		assert_eq!(hasher.feed(b"more"), Err(Error::UseAfterFinalize));
		assert_eq!(hasher.finalize(), Err(Error::UseAfterFinalize));

		// The failed calls must not have disturbed the produced digest: a
		// fresh session over the same input still agrees.
		let mut fresh = StreebogHasher::new(OutputWidth::Bits256);
		fresh.feed(b"payload").unwrap();
		assert_eq!(fresh.finalize().unwrap(), digest);
	}

	#[test]
	fn reader_hashing_matches_slice_hashing() {
		let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
		let from_reader = hash_reader(OutputWidth::Bits512, Cursor::new(&data)).unwrap();
		assert_eq!(from_reader, streebog512(&data).to_vec());
	}
}

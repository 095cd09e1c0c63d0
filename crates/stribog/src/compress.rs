// Copyright 2026 The Stribog Developers

//! Streebog compression core.
//!
//! Implements the S-P-l pipeline, the 12-round cipher `E` with its key
//! schedule, the compression function `g_N`, and the buffering state that
//! drives them: chaining value, 512-bit bit-length counter and 512-bit
//! checksum, both kept modulo 2^512.

use crate::consts::{BLOCK_BITS, BLOCK_BYTES, C, LPS_TABLE, TAU};

/// A 512-bit block, little-endian: byte 0 is the least significant byte of
/// the first 64-bit word.
pub(crate) type Block = [u8; BLOCK_BYTES];

pub(crate) const ZERO_BLOCK: Block = [0u8; BLOCK_BYTES];

/// The fused S-P-l pipeline: substitute every byte through pi, transpose the
/// 8x8 byte matrix, then apply the linear transform to each 64-bit word.
///
/// The substitution and the linear transform are evaluated together through
/// [`LPS_TABLE`]; the transposition shows up as the `TAU` gather feeding it.
pub(crate) fn lps(block: &Block) -> Block {
	let mut words = [0u64; 8];
	for i in 0..BLOCK_BYTES {
		words[i >> 3] ^= LPS_TABLE[i & 7][block[TAU[i] as usize] as usize];
	}
	let mut out = ZERO_BLOCK;
	for (chunk, word) in out.chunks_exact_mut(8).zip(&words) {
		chunk.copy_from_slice(&word.to_le_bytes());
	}
	out
}

fn xor(a: &Block, b: &Block) -> Block {
	core::array::from_fn(|i| a[i] ^ b[i])
}

/// Addition modulo 2^512 of two little-endian 512-bit integers.
pub(crate) fn add_mod512(acc: &mut Block, addend: &Block) {
	let mut carry = 0u16;
	for (a, b) in acc.iter_mut().zip(addend) {
		carry = u16::from(*a) + u16::from(*b) + (carry >> 8);
		*a = carry as u8;
	}
}

/// The compression function `g_N(h, m)`.
///
/// The cipher key starts as `LPS(h xor n)`; the message block is then
/// encrypted through twelve rounds, each round transforming the running
/// state with the current key and advancing the key with the round constant.
/// The twelfth key is folded in by a plain XOR with no further LPS
/// application, and the Miyaguchi-Preneel style feed-forward XORs the
/// chaining value and the message block into the result.
pub(crate) fn compress(h: &Block, n: &Block, m: &Block) -> Block {
	let mut key = lps(&xor(h, n));
	let mut state = *m;
	for c in &C {
		state = lps(&xor(&state, &key));
		key = lps(&xor(&key, c));
	}
	let mut out = xor(&xor(&key, &state), h);
	for (o, b) in out.iter_mut().zip(m) {
		*o ^= b;
	}
	out
}

/// Running hash state: chaining value, accumulators and the partial-block
/// buffer. One instance per digest computation.
#[derive(Clone)]
pub(crate) struct StreebogState {
	h: Block,
	n: Block,
	sigma: Block,
	buffer: Block,
	filled_bytes: usize,
}

impl StreebogState {
	/// Fresh state. `iv_byte` is 0x00 for the 512-bit variant and 0x01 for
	/// the 256-bit variant; the standard fills the initial chaining value
	/// with it.
	pub(crate) fn new(iv_byte: u8) -> Self {
		Self {
			h: [iv_byte; BLOCK_BYTES],
			n: ZERO_BLOCK,
			sigma: ZERO_BLOCK,
			buffer: ZERO_BLOCK,
			filled_bytes: 0,
		}
	}

	/// One full compression step: advance the chaining value over `block`,
	/// then account for `msg_bits` message bits and add the block into the
	/// checksum. The length counter the compression sees is the count
	/// *before* this block.
	fn process_block(&mut self, block: &Block, msg_bits: u64) {
		self.h = compress(&self.h, &self.n, block);
		let mut bits = ZERO_BLOCK;
		bits[..8].copy_from_slice(&msg_bits.to_le_bytes());
		add_mod512(&mut self.n, &bits);
		add_mod512(&mut self.sigma, block);
	}

	/// Absorb message bytes, compressing every completed 64-byte block.
	/// Chunk boundaries never influence the digest.
	pub(crate) fn update(&mut self, mut data: &[u8]) {
		if self.filled_bytes != 0 {
			let to_copy = usize::min(data.len(), BLOCK_BYTES - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_BYTES {
				let block = self.buffer;
				self.process_block(&block, BLOCK_BITS);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_BYTES);
		for chunk in &mut chunks {
			let mut block = ZERO_BLOCK;
			block.copy_from_slice(chunk);
			self.process_block(&block, BLOCK_BITS);
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}

	/// Run the finalization schedule and return the full 512-bit chaining
	/// value; the 256-bit variant keeps its upper half.
	///
	/// The tail is padded with a single 0x01 byte and zeros (inputs are
	/// byte-aligned, so the standard's append-a-one-bit rule lands on a byte
	/// boundary) and compressed with its true bit count. Two more
	/// compressions with N = 0 then absorb the length counter and the
	/// checksum, in that order.
	pub(crate) fn finalize(&mut self) -> Block {
		let mut block = ZERO_BLOCK;
		block[..self.filled_bytes].copy_from_slice(&self.buffer[..self.filled_bytes]);
		block[self.filled_bytes] = 0x01;
		self.process_block(&block, 8 * self.filled_bytes as u64);
		self.filled_bytes = 0;

		let n = self.n;
		self.h = compress(&self.h, &ZERO_BLOCK, &n);
		let sigma = self.sigma;
		self.h = compress(&self.h, &ZERO_BLOCK, &sigma);
		self.h
	}
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;
	use crate::consts::{A, PI};

	/// Textbook S, P and l applied one after another, straight from the
	/// standard's definitions.
	fn lps_reference(block: &Block) -> Block {
		let substituted: Block = block.map(|b| PI[b as usize]);

		let mut transposed = ZERO_BLOCK;
		for (i, byte) in transposed.iter_mut().enumerate() {
			*byte = substituted[TAU[i] as usize];
		}

		let mut out = ZERO_BLOCK;
		for (chunk, src) in out.chunks_exact_mut(8).zip(transposed.chunks_exact(8)) {
			let word = u64::from_le_bytes(src.try_into().unwrap());
			let mut acc = 0u64;
			for bit in 0..64 {
				if word >> bit & 1 == 1 {
					acc ^= A[63 - bit];
				}
			}
			chunk.copy_from_slice(&acc.to_le_bytes());
		}
		out
	}

	#[test]
	fn lps_matches_reference_transform() {
		let mut rng = StdRng::seed_from_u64(0x5742);
		for _ in 0..64 {
			let block: Block = core::array::from_fn(|_| rng.random());
			assert_eq!(lps(&block), lps_reference(&block));
		}
		assert_eq!(lps(&ZERO_BLOCK), lps_reference(&ZERO_BLOCK));
	}

	#[test]
	fn add_mod512_carries_across_words() {
		let mut acc = [0xffu8; BLOCK_BYTES];
		let mut one = ZERO_BLOCK;
		one[0] = 1;
		add_mod512(&mut acc, &one);
		assert_eq!(acc, ZERO_BLOCK, "all-ones plus one must wrap to zero");

		let mut acc = ZERO_BLOCK;
		acc[7] = 0x80;
		let addend = acc;
		add_mod512(&mut acc, &addend);
		let mut expected = ZERO_BLOCK;
		expected[8] = 0x01;
		assert_eq!(acc, expected, "carry must cross the first word boundary");
	}

	#[test]
	fn length_counter_accounts_for_partial_tail() {
		let mut state = StreebogState::new(0x00);
		state.update(&[0xab; 100]);
		// 64 bytes compressed, 36 buffered.
		assert_eq!(state.filled_bytes, 36);
		assert_eq!(u64::from_le_bytes(state.n[..8].try_into().unwrap()), 512);
		state.finalize();
		assert_eq!(u64::from_le_bytes(state.n[..8].try_into().unwrap()), 800);
	}
}

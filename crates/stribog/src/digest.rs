// Copyright 2026 The Stribog Developers

//! Fixed-width Streebog hashers over the [`digest`] trait family.
//!
//! [`Streebog256`] and [`Streebog512`] select the output width at the type
//! level; each carries its own initial chaining value per the standard, so
//! the 256-bit digest is not a truncation of the 512-bit one. Both buffer
//! input into 64-byte blocks and are insensitive to how callers chunk their
//! `update` calls.

use digest::{
	FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update,
	consts::{U32, U64},
	core_api::BlockSizeUser,
};

use crate::compress::StreebogState;
use crate::consts::BLOCK_BYTES;

/// Initial chaining value fill for the 512-bit variant.
const IV_512: u8 = 0x00;
/// Initial chaining value fill for the 256-bit variant.
const IV_256: u8 = 0x01;

/// Streebog with 512-bit output.
#[derive(Clone)]
pub struct Streebog512 {
	state: StreebogState,
}

impl Default for Streebog512 {
	fn default() -> Self {
		Self { state: StreebogState::new(IV_512) }
	}
}

impl HashMarker for Streebog512 {}

impl Update for Streebog512 {
	fn update(&mut self, data: &[u8]) {
		self.state.update(data);
	}
}

impl OutputSizeUser for Streebog512 {
	type OutputSize = U64;
}

impl BlockSizeUser for Streebog512 {
	type BlockSize = U64;
}

impl FixedOutput for Streebog512 {
	fn finalize_into(mut self, out: &mut digest::Output<Self>) {
		out.copy_from_slice(&self.state.finalize());
	}
}

impl FixedOutputReset for Streebog512 {
	fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
		out.copy_from_slice(&self.state.finalize());
		Reset::reset(self);
	}
}

impl Reset for Streebog512 {
	fn reset(&mut self) {
		self.state = StreebogState::new(IV_512);
	}
}

/// Streebog with 256-bit output.
///
/// The digest is the upper 32 bytes of the final chaining value, computed
/// from the all-0x01 initial value the standard assigns to this variant.
#[derive(Clone)]
pub struct Streebog256 {
	state: StreebogState,
}

impl Default for Streebog256 {
	fn default() -> Self {
		Self { state: StreebogState::new(IV_256) }
	}
}

impl HashMarker for Streebog256 {}

impl Update for Streebog256 {
	fn update(&mut self, data: &[u8]) {
		self.state.update(data);
	}
}

impl OutputSizeUser for Streebog256 {
	type OutputSize = U32;
}

impl BlockSizeUser for Streebog256 {
	type BlockSize = U64;
}

impl FixedOutput for Streebog256 {
	fn finalize_into(mut self, out: &mut digest::Output<Self>) {
		out.copy_from_slice(&self.state.finalize()[BLOCK_BYTES / 2..]);
	}
}

impl FixedOutputReset for Streebog256 {
	fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
		out.copy_from_slice(&self.state.finalize()[BLOCK_BYTES / 2..]);
		Reset::reset(self);
	}
}

impl Reset for Streebog256 {
	fn reset(&mut self) {
		self.state = StreebogState::new(IV_256);
	}
}

// Copyright 2026 The Stribog Developers

//! Streebog (GOST R 34.11-2012) cryptographic hash function.
//!
//! This crate implements both output widths the standard defines. The typed
//! hashers [`Streebog256`] and [`Streebog512`] plug into the [`digest`]
//! trait ecosystem; [`StreebogHasher`] selects the width at runtime and
//! checks its feed/finalize lifecycle. Digest bytes follow the little-endian
//! convention used across the Rust ecosystem (least significant octet
//! first).
//!
//! ```
//! use stribog::{Digest, Streebog256};
//!
//! let mut hasher = Streebog256::new();
//! hasher.update(b"input data");
//! let digest = hasher.finalize();
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! The compression core performs no I/O and holds no shared mutable state;
//! independent hashers may run on separate threads freely.

mod compress;
mod consts;
mod digest;
mod error;
mod hasher;

pub use ::digest::Digest;

pub use crate::consts::BLOCK_BYTES;
pub use crate::digest::{Streebog256, Streebog512};
pub use crate::error::Error;
pub use crate::hasher::{OutputWidth, StreebogHasher, hash_reader, streebog256, streebog512};

// Copyright 2026 The Stribog Developers

//! Error definitions for the runtime-width hasher.

/// Streebog hashing error.
///
/// Both variants are caller precondition violations detected synchronously;
/// the transforms themselves are total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The requested digest width is not one the standard defines.
	#[error("unsupported output width: {bits} bits, expected 256 or 512")]
	InvalidOutputWidth {
		/// The width the caller asked for.
		bits: usize,
	},
	/// `feed` or `finalize` was called on a state that already produced its
	/// digest.
	#[error("hasher was already finalized")]
	UseAfterFinalize,
}

//! Error types surfaced by the sprite decoder.

use thiserror::Error;

/// The two fatal conditions [`crate::file::pic::decode`] can surface.
///
/// Malformed or truncated sprite data is never one of them — see the
/// module documentation on [`crate::file::pic`] for why. These variants
/// only cover failures in the environment around the decoder: the
/// caller's byte source misbehaving, or the staging buffer it needs
/// being too large to allocate.
#[derive(Debug, Error)]
pub enum PicError {
	/// The byte source returned a genuine I/O error while the bit reader
	/// was refilling its buffer. Ordinary end-of-stream truncation is
	/// never reported this way; only a failure the reader itself raised.
	#[error("I/O error while reading sprite stream: {0}")]
	Io(#[from] std::io::Error),

	/// The computed staging-buffer size could not be allocated.
	#[error("failed to allocate {requested}-byte staging buffer")]
	Allocation {
		/// The byte count that could not be reserved.
		requested: u64,
	},
}

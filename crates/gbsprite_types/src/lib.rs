//! This crate provides the core data types and decoder for the
//! `gbsprite-rs` project.
//!
//! # File Formats
//!
//! - **pic**: the Generation I Pokémon Game Boy sprite compression
//!   format, a bit-packed, run-length and delta-coded two-bit-plane
//!   tile bitmap, reproducing the original cartridge routine's
//!   center-bottom repositioning byte-for-byte, glitches included.
//!
//! # Examples
//!
//! ```no_run
//! use gbsprite_types::file::{DecodedSprite, decode};
//!
//! let data = std::fs::read("sprite.bin")?;
//! let sprite: DecodedSprite = decode(&data[..], None)?;
//! println!("decoded {}x{} tiles", sprite.width(), sprite.height());
//! # Ok::<(), gbsprite_types::file::PicError>(())
//! ```

pub mod file;
pub mod prelude;

// Re-export commonly used types at crate root for convenience.
pub use file::{DecodedSprite, PicError, decode};

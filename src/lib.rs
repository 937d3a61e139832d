#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gbsprite-rs` decodes the sprite-compression format used by the
//! first-generation Pokémon games on the original Game Boy.
//!
//! Given a compressed byte stream, [`decode`] produces the decoded
//! 2-bit-per-pixel bitmap in the same column-major tile layout the Game
//! Boy's video hardware would have received, reproducing the original
//! cartridge routine's decompression, delta reconstruction, bit-plane
//! combination, and center-bottom tile repositioning byte-for-byte —
//! well-known byte-wrapped-arithmetic glitches included.
//!
//! ```no_run
//! use gbsprite_rs::decode;
//!
//! let data = std::fs::read("sprite.bin")?;
//! let sprite = decode(&data[..], None)?;
//! std::fs::write("sprite.2bpp", sprite.into_bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub use gbsprite_internal::*;

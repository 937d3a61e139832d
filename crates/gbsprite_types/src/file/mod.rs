//! File format support for `gbsprite-rs`.

mod error;

pub mod pic;

// Re-export the unified error type.
pub use error::PicError;

// Re-export the main entry points.
pub use pic::{DecodedSprite, decode};

//! Prelude module for `gbsprite_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```no_run
//! use gbsprite_types::prelude::*;
//!
//! let decoded = decode(std::io::Cursor::new([0u8; 32]), None)?;
//! let plane0 = decoded.plane0();
//! # Ok::<(), PicError>(())
//! ```

#[doc(inline)]
pub use crate::file::{DecodedSprite, PicError, decode};

// Re-export the file module for advanced usage.
#[doc(inline)]
pub use crate::file;

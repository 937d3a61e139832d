//! Prelude module for `gbsprite_internal`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```rust
//! use gbsprite_internal::prelude::*;
//!
//! let decoded = decode(std::io::Cursor::new([0u8; 32]), None)?;
//! assert_eq!(decoded.plane1().len(), 392);
//! # Ok::<(), PicError>(())
//! ```

// Re-export everything from gbsprite_types::prelude.
#[doc(inline)]
pub use gbsprite_types::prelude::*;

// Re-export the entire gbsprite_types module for advanced usage.
#[doc(inline)]
pub use gbsprite_types;

//! Internal crate for `gbsprite-rs`.
//!
//! This module is separated into its own crate to keep the public
//! `gbsprite-rs` crate's root small and to leave room for future
//! internal-only collaborators (e.g. a dynamically linked backend);
//! it should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use gbsprite_internal::prelude::*;
//!
//! let decoded = decode(std::io::Cursor::new([0u8; 32]), None)?;
//! assert_eq!(decoded.plane0().len(), 392);
//! # Ok::<(), PicError>(())
//! ```

/// `use gbsprite_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export gbsprite_types for convenience.
pub use gbsprite_types;

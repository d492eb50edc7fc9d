#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for bitmap I/O.
///
/// Defines [`error::IoError`] variants for file access and unsupported or malformed
/// bitmap data.
pub mod error;

/// Bitmap headers, decoding and encoding from memory.
pub mod bmp;

/// High-level functions to read and write bitmap files.
pub mod functional;

pub use crate::bmp::{BmpHeader, BmpImage};
pub use crate::error::IoError;

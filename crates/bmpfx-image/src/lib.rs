#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// pixel buffer representation for filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// three channel pixel type.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelBuffer};
pub use crate::pixel::Pixel;

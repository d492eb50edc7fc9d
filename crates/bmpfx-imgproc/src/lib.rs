#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// Error types for the imgproc module.
pub mod error;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// 3x3 neighborhood extraction with border substitution.
pub mod kernel;

/// module containing parallization utilities.
pub mod parallel;

/// filter selection for whole-image pipelines.
pub mod transform;

pub use crate::error::ImgprocError;

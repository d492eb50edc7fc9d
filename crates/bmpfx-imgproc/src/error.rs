use bmpfx_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the imgproc module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImgprocError {
    /// The input image cannot be processed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The execution strategy could not be honored.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// The transform name is not recognized.
    #[error("Unknown transform: {0}")]
    UnknownTransform(String),
}

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the width is zero or a flat buffer cannot be split into rows of the
    /// given width.
    #[error("Buffer of {0} pixels cannot be split into rows of width {1}")]
    InvalidDimensions(usize, usize),

    /// Error when the image is a single row or a single column.
    #[error("Image of size {0}x{1} is too small for a 3x3 neighborhood")]
    DegenerateGeometry(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}

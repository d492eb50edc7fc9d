use bmpfx_image::ImageSize;

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File is does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] bmpfx_image::ImageError),

    /// The data does not start with the `BM` signature.
    #[error("Invalid bitmap signature: {0:?}")]
    InvalidSignature([u8; 2]),

    /// The data is shorter than the file and info headers.
    #[error("Bitmap header is truncated: got {0} bytes, need at least {1}")]
    TruncatedHeader(usize, usize),

    /// The info header is older or smaller than BITMAPINFOHEADER.
    #[error("Unsupported bitmap info header of {0} bytes")]
    UnsupportedHeader(u32),

    /// Only 24 bits per pixel are supported.
    #[error("Unsupported bitmap bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// Only uncompressed bitmaps are supported.
    #[error("Unsupported bitmap compression: {0}")]
    UnsupportedCompression(u32),

    /// The header declares a zero, negative or oversized image.
    #[error("Invalid bitmap dimensions: {0}x{1}")]
    InvalidHeaderDimensions(i32, i32),

    /// The pixel data offset points inside the headers or past the end of the file.
    #[error("Invalid bitmap pixel data offset: {0}")]
    InvalidPixelOffset(u32),

    /// The file ends before the last pixel row.
    #[error("Bitmap pixel data is truncated: expected {0} bytes, got {1}")]
    TruncatedPixelData(usize, usize),

    /// The image does not match the size recorded in the header.
    #[error("Image size {0} does not match the bitmap header size {1}")]
    SizeMismatch(ImageSize, ImageSize),
}

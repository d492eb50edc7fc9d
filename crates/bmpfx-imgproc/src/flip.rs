use bmpfx_image::{Pixel, PixelBuffer};

use crate::{
    error::ImgprocError,
    parallel::{fill_indexed, ExecutionStrategy},
};

/// Flip the input image horizontally.
///
/// Every row is reversed pixel by pixel; the channels of each pixel are untouched.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use bmpfx_image::{Pixel, PixelBuffer};
/// use bmpfx_imgproc::flip::horizontal_flip;
///
/// let image = PixelBuffer::from_size_val([2, 3].into(), Pixel::BLACK).unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn horizontal_flip(src: &PixelBuffer) -> Result<PixelBuffer, ImgprocError> {
    horizontal_flip_with(src, ExecutionStrategy::default())
}

/// Same as [`horizontal_flip`] with an explicit execution strategy.
pub fn horizontal_flip_with(
    src: &PixelBuffer,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer, ImgprocError> {
    let cols = src.cols();
    let src_data = src.as_slice();

    let mut dst = PixelBuffer::from_size_val(src.size(), Pixel::BLACK)?;
    fill_indexed(dst.as_slice_mut(), strategy, |index| {
        let (row, col) = (index / cols, index % cols);
        src_data[row * cols + (cols - 1 - col)]
    })?;

    Ok(dst)
}

use bmpfx_image::{Pixel, PixelBuffer};

use crate::{
    error::ImgprocError,
    parallel::{fill_indexed, ExecutionStrategy},
};

/// Convert a pixel to gray by averaging its channels.
///
/// Each channel is divided by three before summing, so the result never exceeds the
/// brightest channel and may be up to 2 below the exact average.
pub fn gray_from_pixel(pixel: &Pixel) -> Pixel {
    let value = pixel.channels().iter().fold(0u8, |acc, &c| acc + c / 3);
    Pixel::splat(value)
}

/// Convert an image to grayscale by averaging the channels of every pixel.
///
/// All three output channels carry the same value, so the result can be written back
/// to a 24-bit bitmap unchanged.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Example
///
/// ```
/// use bmpfx_image::{Pixel, PixelBuffer};
/// use bmpfx_imgproc::color::grayscale;
///
/// let image = PixelBuffer::from_size_val([4, 5].into(), Pixel::new(30, 60, 90)).unwrap();
/// let gray = grayscale(&image).unwrap();
///
/// assert_eq!(gray.size(), image.size());
/// assert_eq!(gray.as_slice()[0], Pixel::splat(60));
/// ```
pub fn grayscale(src: &PixelBuffer) -> Result<PixelBuffer, ImgprocError> {
    grayscale_with(src, ExecutionStrategy::default())
}

/// Same as [`grayscale`] with an explicit execution strategy.
pub fn grayscale_with(
    src: &PixelBuffer,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer, ImgprocError> {
    let src_data = src.as_slice();

    let mut dst = PixelBuffer::from_size_val(src.size(), Pixel::BLACK)?;
    fill_indexed(dst.as_slice_mut(), strategy, |index| {
        gray_from_pixel(&src_data[index])
    })?;

    Ok(dst)
}

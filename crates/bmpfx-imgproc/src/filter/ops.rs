use bmpfx_image::{Pixel, PixelBuffer};

use super::kernels::{BOX_BLUR_CELLS, SOBEL_X, SOBEL_Y};
use crate::{
    error::ImgprocError,
    kernel::Kernel,
    parallel::{fill_indexed, ExecutionStrategy},
};

/// Apply a per-neighborhood reduction to every pixel of `src`.
///
/// The output is allocated up front and every pixel is computed from its own kernel
/// only, so the strategy is free to visit pixels in any order.
fn kernel_filter<F>(
    src: &PixelBuffer,
    strategy: ExecutionStrategy,
    reduce: F,
) -> Result<PixelBuffer, ImgprocError>
where
    F: Fn(&Kernel) -> Pixel + Sync + Send,
{
    src.ensure_filterable()?;

    let width = src.width();
    let src_data = src.as_slice();

    let mut dst = PixelBuffer::from_size_val(src.size(), Pixel::BLACK)?;
    fill_indexed(dst.as_slice_mut(), strategy, |index| {
        reduce(&Kernel::gather(src_data, width, index))
    })?;

    Ok(dst)
}

/// Reduce a kernel to the truncated per-channel mean.
///
/// Every cell is divided by nine before the cells are summed, so the result can be up
/// to 8 below the true mean. This matches the output of existing bitmap tools
/// bit-for-bit; see [`box_blur_mean_reduce`] for the exact mean.
pub fn box_blur_reduce(kernel: &Kernel) -> Pixel {
    Pixel::from_fn(|ch| {
        kernel
            .channel(ch)
            .iter()
            .fold(0u8, |acc, &v| acc + v / BOX_BLUR_CELLS)
    })
}

/// Reduce a kernel to the rounded per-channel mean.
pub fn box_blur_mean_reduce(kernel: &Kernel) -> Pixel {
    Pixel::from_fn(|ch| {
        let sum: u16 = kernel.channel(ch).iter().map(|&v| v as u16).sum();
        let cells = BOX_BLUR_CELLS as u16;
        ((sum + cells / 2) / cells) as u8
    })
}

/// Reduce a kernel to the per-channel sobel gradient magnitude.
///
/// The directional responses are accumulated as `i32` and the magnitude
/// `sqrt(gx^2 + gy^2)` is rounded and clamped to `[0, 255]`.
pub fn sobel_reduce(kernel: &Kernel) -> Pixel {
    Pixel::from_fn(|ch| {
        let (gx, gy) = kernel
            .channel(ch)
            .iter()
            .zip(SOBEL_X.iter().zip(SOBEL_Y.iter()))
            .fold((0i32, 0i32), |(gx, gy), (&v, (&kx, &ky))| {
                let v = v as i32;
                (gx + kx * v, gy + ky * v)
            });
        let magnitude = f64::from(gx * gx + gy * gy).sqrt().round();
        magnitude.clamp(0.0, 255.0) as u8
    })
}

/// Blur an image using a 3x3 box blur filter.
///
/// Each output channel is the sum of `cell / 9` over the nine kernel cells, with the
/// division truncated per cell.
///
/// # Arguments
///
/// * `src` - The source image with at least two rows and two columns.
///
/// # Returns
///
/// A new image of the same size.
///
/// # Errors
///
/// Fails with a geometry error on single-row or single-column images.
///
/// # Example
///
/// ```
/// use bmpfx_image::{Pixel, PixelBuffer};
/// use bmpfx_imgproc::filter::box_blur;
///
/// let image = PixelBuffer::from_size_val([3, 3].into(), Pixel::splat(100)).unwrap();
/// let blurred = box_blur(&image).unwrap();
///
/// assert_eq!(blurred.as_slice(), &[Pixel::splat(99); 9]);
/// ```
pub fn box_blur(src: &PixelBuffer) -> Result<PixelBuffer, ImgprocError> {
    box_blur_with(src, ExecutionStrategy::default())
}

/// Same as [`box_blur`] with an explicit execution strategy.
pub fn box_blur_with(
    src: &PixelBuffer,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer, ImgprocError> {
    kernel_filter(src, strategy, box_blur_reduce)
}

/// Blur an image using a 3x3 box blur filter with the exact, rounded mean.
///
/// PRECONDITION: `src` has at least two rows and two columns.
pub fn box_blur_mean(src: &PixelBuffer) -> Result<PixelBuffer, ImgprocError> {
    box_blur_mean_with(src, ExecutionStrategy::default())
}

/// Same as [`box_blur_mean`] with an explicit execution strategy.
pub fn box_blur_mean_with(
    src: &PixelBuffer,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer, ImgprocError> {
    kernel_filter(src, strategy, box_blur_mean_reduce)
}

/// Compute the sobel gradient magnitude of an image.
///
/// Each channel is processed independently with the 3x3 operators in
/// [`super::kernels`].
///
/// # Arguments
///
/// * `src` - The source image with at least two rows and two columns.
///
/// # Returns
///
/// A new image of the same size holding the clamped gradient magnitude.
pub fn sobel(src: &PixelBuffer) -> Result<PixelBuffer, ImgprocError> {
    sobel_with(src, ExecutionStrategy::default())
}

/// Same as [`sobel`] with an explicit execution strategy.
pub fn sobel_with(
    src: &PixelBuffer,
    strategy: ExecutionStrategy,
) -> Result<PixelBuffer, ImgprocError> {
    kernel_filter(src, strategy, sobel_reduce)
}

use bmpfx_image::{ImageSize, Pixel, PixelBuffer};
use bmpfx_imgproc::{
    filter,
    kernel::{extract_kernel_at, KernelPosition},
    parallel::ExecutionStrategy,
    transform::Transform,
    ImgprocError,
};

fn gradient_image(size: ImageSize) -> PixelBuffer {
    let data = (0..size.num_pixels())
        .map(|i| {
            let (x, y) = (i % size.width, i / size.width);
            Pixel::new((x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8)
        })
        .collect();
    PixelBuffer::from_pixels(size.width, data).unwrap()
}

#[test]
fn test_transforms_keep_size_and_input() -> Result<(), ImgprocError> {
    for size in [[2, 2], [3, 3], [4, 4], [9, 2], [2, 9], [13, 7]] {
        let image = gradient_image(size.into());
        let original = image.clone();

        for transform in Transform::ALL {
            let out = transform.apply(&image, ExecutionStrategy::default())?;
            assert_eq!(out.size(), image.size(), "{transform} on {:?}", size);
        }

        assert_eq!(image, original);
    }
    Ok(())
}

#[test]
fn test_sobel_of_blurred_ramp_is_smaller() -> Result<(), ImgprocError> {
    // blurring flattens the ramp, which lowers the interior gradient magnitude
    let image = gradient_image([8, 8].into());
    let edges = filter::sobel(&image)?;
    let edges_blurred = filter::sobel(&filter::box_blur(&image)?)?;

    let interior = |img: &PixelBuffer| img.get_pixel(4, 4).map(|p| p.0[0]);
    assert!(interior(&edges_blurred)? <= interior(&edges)?);
    Ok(())
}

#[test]
fn test_interior_kernel_matches_geometry() -> Result<(), ImgprocError> {
    let image = gradient_image([5, 5].into());
    let index = 2 * 5 + 2;
    let kernel = extract_kernel_at(&image, index)?;

    assert_eq!(kernel.get(KernelPosition::North), image.get_pixel(2, 1)?);
    assert_eq!(kernel.get(KernelPosition::West), image.get_pixel(1, 2)?);
    assert_eq!(kernel.get(KernelPosition::SouthEast), image.get_pixel(3, 3)?);
    Ok(())
}

use bmpfx_image::{ImageSize, Pixel, PixelBuffer};
use bmpfx_imgproc::{parallel::ExecutionStrategy, transform::Transform};
use bmpfx_io::{
    bmp::{decode_bmp, encode_bmp, BmpImage},
    functional::{read_image_bmp, write_image_bmp},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn noise_image(size: ImageSize, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size.num_pixels())
        .map(|_| Pixel::from_fn(|_| rng.random()))
        .collect();
    PixelBuffer::new(size, data).unwrap()
}

fn make_top_down(data: &mut [u8]) {
    let height = i32::from_le_bytes([data[22], data[23], data[24], data[25]]);
    data[22..26].copy_from_slice(&(-height).to_le_bytes());
}

#[test]
fn decode_matches_image_crate() -> TestResult {
    for (width, height) in [(1, 1), (2, 3), (5, 4), (7, 2), (8, 8)] {
        let image = noise_image([width, height].into(), (width * 31 + height) as u64);
        let bottom_up = encode_bmp(&BmpImage::from_image(image)?)?;
        let mut top_down = bottom_up.clone();
        make_top_down(&mut top_down);

        for data in [bottom_up, top_down] {
            let ours = decode_bmp(&data)?.image;
            let theirs =
                image::load_from_memory_with_format(&data, image::ImageFormat::Bmp)?.to_rgb8();

            assert_eq!(theirs.width() as usize, width);
            assert_eq!(theirs.height() as usize, height);

            // the file stores blue first
            for (ours, theirs) in ours.as_slice().iter().zip(theirs.pixels()) {
                let [b, g, r] = ours.channels();
                assert_eq!([r, g, b], theirs.0);
            }
        }
    }
    Ok(())
}

#[test]
fn filter_file_keeps_header() -> TestResult {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.bmp");
    let output = tmp_dir.path().join("output.bmp");

    let mut data = encode_bmp(&BmpImage::from_image(noise_image([6, 5].into(), 7))?)?;
    make_top_down(&mut data);
    std::fs::write(&input, &data)?;

    for transform in Transform::ALL {
        let bmp = read_image_bmp(&input)?;
        let filtered = transform.apply(&bmp.image, ExecutionStrategy::Serial)?;
        write_image_bmp(&output, &bmp.with_image(filtered.clone())?)?;

        let written = std::fs::read(&output)?;
        let offset = bmp.header.pixel_offset();
        assert_eq!(written.len(), data.len(), "{transform}");
        assert_eq!(&written[..offset], &data[..offset], "{transform}");
        assert_eq!(read_image_bmp(&output)?.image, filtered, "{transform}");
    }
    Ok(())
}

#[test]
fn mirror_twice_is_byte_identical() -> TestResult {
    let data = encode_bmp(&BmpImage::from_image(noise_image([5, 3].into(), 3))?)?;
    let bmp = decode_bmp(&data)?;

    let once = Transform::Mirror.apply(&bmp.image, ExecutionStrategy::default())?;
    let twice = Transform::Mirror.apply(&once, ExecutionStrategy::default())?;

    assert_eq!(encode_bmp(&bmp.with_image(twice)?)?, data);
    Ok(())
}

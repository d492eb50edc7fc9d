use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bmpfx_image::{Pixel, PixelBuffer};
use bmpfx_imgproc::{
    filter::{box_blur_with, sobel_with},
    parallel::ExecutionStrategy,
};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Neighborhood Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        // input image with a horizontal ramp so the kernels see real gradients
        let image_data = (0..width * height)
            .map(|i| Pixel::splat((i % *width % 256) as u8))
            .collect();
        let image = PixelBuffer::from_pixels(*width, image_data).unwrap();

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("par_elements", ExecutionStrategy::ParallelElements),
            ("auto_rows", ExecutionStrategy::AutoRows(*width)),
        ] {
            let parameter_string = format!("{}x{}_{}", width, height, name);

            group.bench_with_input(
                BenchmarkId::new("box_blur", &parameter_string),
                &image,
                |b, i| b.iter(|| black_box(box_blur_with(i, strategy))),
            );

            group.bench_with_input(
                BenchmarkId::new("sobel", &parameter_string),
                &image,
                |b, i| b.iter(|| black_box(sobel_with(i, strategy))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);

use argh::FromArgs;
use std::{path::PathBuf, str::FromStr};

use bmpfx::{
    imgproc::{parallel::ExecutionStrategy, transform::Transform},
    io::functional as F,
};

#[derive(FromArgs)]
/// Apply a filter to an uncompressed 24-bit bitmap
struct Args {
    /// the bitmap to read
    #[argh(positional)]
    input: PathBuf,

    /// the filter to apply: gray (g), mirror (r), blur (b), blur-mean or sobel (s)
    #[argh(option, short = 'f')]
    filter: String,

    /// the bitmap to write
    #[argh(option, short = 'o', default = "PathBuf::from(\"filtered.bmp\")")]
    output: PathBuf,

    /// worker threads: 0 uses the global pool, 1 runs serially
    #[argh(option, short = 't', default = "0")]
    threads: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let transform = Transform::from_str(&args.filter)?;
    let strategy = ExecutionStrategy::from_threads(args.threads);

    let bmp = F::read_image_bmp(&args.input)?;
    log::info!(
        "read {} ({}x{})",
        args.input.display(),
        bmp.image.width(),
        bmp.image.height()
    );

    let filtered = transform.apply(&bmp.image, strategy)?;
    F::write_image_bmp(&args.output, &bmp.with_image(filtered)?)?;

    log::info!("{} written to {}", transform, args.output.display());

    Ok(())
}

use std::{fmt, str::FromStr};

use bmpfx_image::PixelBuffer;

use crate::{color, error::ImgprocError, filter, flip, parallel::ExecutionStrategy};

/// A whole-image transform that maps a buffer to a new buffer of the same size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Average the channels of every pixel.
    Grayscale,
    /// Reverse every row.
    Mirror,
    /// 3x3 box blur with per-cell truncation.
    BoxBlur,
    /// 3x3 box blur with the exact rounded mean.
    BoxBlurMean,
    /// 3x3 sobel gradient magnitude.
    Sobel,
}

impl Transform {
    /// All transforms, in the order they are listed in help output.
    pub const ALL: [Transform; 5] = [
        Transform::Grayscale,
        Transform::Mirror,
        Transform::BoxBlur,
        Transform::BoxBlurMean,
        Transform::Sobel,
    ];

    /// The canonical name of the transform.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Grayscale => "gray",
            Transform::Mirror => "mirror",
            Transform::BoxBlur => "blur",
            Transform::BoxBlurMean => "blur-mean",
            Transform::Sobel => "sobel",
        }
    }

    /// Whether the transform reads a 3x3 neighborhood around each pixel.
    pub fn needs_neighborhood(&self) -> bool {
        matches!(
            self,
            Transform::BoxBlur | Transform::BoxBlurMean | Transform::Sobel
        )
    }

    /// Apply the transform to `src`.
    ///
    /// # Arguments
    ///
    /// * `src` - The input image.
    /// * `strategy` - How to spread the per-pixel work over threads.
    ///
    /// # Returns
    ///
    /// A new image of the same size as `src`.
    pub fn apply(
        &self,
        src: &PixelBuffer,
        strategy: ExecutionStrategy,
    ) -> Result<PixelBuffer, ImgprocError> {
        log::debug!("applying {} to {} with {:?}", self, src.size(), strategy);

        match self {
            Transform::Grayscale => color::grayscale_with(src, strategy),
            Transform::Mirror => flip::horizontal_flip_with(src, strategy),
            Transform::BoxBlur => filter::box_blur_with(src, strategy),
            Transform::BoxBlurMean => filter::box_blur_mean_with(src, strategy),
            Transform::Sobel => filter::sobel_with(src, strategy),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = ImgprocError;

    /// Parse a transform name, ignoring case and surrounding whitespace.
    ///
    /// | Transform     | Accepted names               |
    /// |---------------|------------------------------|
    /// | `Grayscale`   | `gray`, `grayscale`, `g`     |
    /// | `Mirror`      | `mirror`, `hflip`, `r`       |
    /// | `BoxBlur`     | `blur`, `box`, `b`           |
    /// | `BoxBlurMean` | `blur-mean`, `mean`          |
    /// | `Sobel`       | `sobel`, `edges`, `s`        |
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gray" | "grayscale" | "g" => Ok(Transform::Grayscale),
            "mirror" | "hflip" | "r" => Ok(Transform::Mirror),
            "blur" | "box" | "b" => Ok(Transform::BoxBlur),
            "blur-mean" | "mean" => Ok(Transform::BoxBlurMean),
            "sobel" | "edges" | "s" => Ok(Transform::Sobel),
            _ => Err(ImgprocError::UnknownTransform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpfx_image::{ImageError, Pixel};

    #[test]
    fn test_parse_names_and_flags() -> Result<(), ImgprocError> {
        for transform in Transform::ALL {
            assert_eq!(transform.name().parse::<Transform>()?, transform);
        }
        assert_eq!("g".parse::<Transform>()?, Transform::Grayscale);
        assert_eq!("r".parse::<Transform>()?, Transform::Mirror);
        assert_eq!("b".parse::<Transform>()?, Transform::BoxBlur);
        assert_eq!(" Sobel ".parse::<Transform>()?, Transform::Sobel);
        for (alias, transform) in [
            ("grayscale", Transform::Grayscale),
            ("hflip", Transform::Mirror),
            ("box", Transform::BoxBlur),
            ("mean", Transform::BoxBlurMean),
            ("EDGES", Transform::Sobel),
        ] {
            assert_eq!(alias.parse::<Transform>()?, transform);
        }
        assert_eq!(
            "x".parse::<Transform>(),
            Err(ImgprocError::UnknownTransform("x".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_apply_dispatch() -> Result<(), ImgprocError> {
        let image = PixelBuffer::from_pixels(3, (0..9).map(|i| Pixel::splat(i * 20)).collect())?;
        let strategy = ExecutionStrategy::Serial;

        assert_eq!(
            Transform::BoxBlur.apply(&image, strategy)?,
            filter::box_blur(&image)?
        );
        assert_eq!(
            Transform::Sobel.apply(&image, strategy)?,
            filter::sobel(&image)?
        );
        assert_eq!(
            Transform::Mirror.apply(&image, strategy)?,
            flip::horizontal_flip(&image)?
        );
        assert_eq!(
            Transform::Grayscale.apply(&image, strategy)?,
            color::grayscale(&image)?
        );
        Ok(())
    }

    #[test]
    fn test_apply_single_row() -> Result<(), ImgprocError> {
        let image = PixelBuffer::from_size_val([4, 1].into(), Pixel::WHITE)?;
        for transform in Transform::ALL {
            let res = transform.apply(&image, ExecutionStrategy::Serial);
            if transform.needs_neighborhood() {
                assert_eq!(
                    res,
                    Err(ImgprocError::Image(ImageError::DegenerateGeometry(4, 1)))
                );
            } else {
                assert_eq!(res?.size(), image.size());
            }
        }
        Ok(())
    }
}

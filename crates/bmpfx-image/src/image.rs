use crate::{error::ImageError, pixel::Pixel};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use bmpfx_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Total number of pixels covered by this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A row-major buffer of three channel pixels.
///
/// Pixel `0` is the top-left pixel and rows follow each other top to bottom. The width
/// is fixed at construction; filters never resize a buffer, they allocate a new one of
/// the same size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a new buffer from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixels of the image, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if the width is zero, and
    /// [`ImageError::InvalidChannelShape`] if the number of pixels does not match the
    /// image size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmpfx_image::{ImageSize, Pixel, PixelBuffer};
    ///
    /// let image = PixelBuffer::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![Pixel::BLACK; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if size.width == 0 {
            return Err(ImageError::InvalidDimensions(data.len(), size.width));
        }

        if data.len() != size.num_pixels() {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.num_pixels(),
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new buffer from a flat pixel sequence and a row width.
    ///
    /// The height is derived as `data.len() / width`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if `width` is zero or does not evenly
    /// divide the number of pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmpfx_image::{Pixel, PixelBuffer};
    ///
    /// let image = PixelBuffer::from_pixels(3, vec![Pixel::WHITE; 6]).unwrap();
    /// assert_eq!(image.height(), 2);
    ///
    /// assert!(PixelBuffer::from_pixels(4, vec![Pixel::WHITE; 6]).is_err());
    /// ```
    pub fn from_pixels(width: usize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if width == 0 || data.len() % width != 0 {
            return Err(ImageError::InvalidDimensions(data.len(), width));
        }

        let size = ImageSize {
            width,
            height: data.len() / width,
        };

        Ok(Self { size, data })
    }

    /// Create a new buffer with every pixel set to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if the width is zero.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Result<Self, ImageError> {
        Self::new(size, vec![val; size.num_pixels()])
    }

    /// Create a new buffer from interleaved channel bytes, three per pixel.
    ///
    /// # Errors
    ///
    /// If the number of bytes is not `3 * width * height`, an error is returned.
    pub fn from_interleaved(size: ImageSize, bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() != size.num_pixels() * Pixel::CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                bytes.len(),
                size.num_pixels() * Pixel::CHANNELS,
            ));
        }

        let data = bytes
            .chunks_exact(Pixel::CHANNELS)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
            .collect();

        Self::new(size, data)
    }

    /// Flatten the buffer into interleaved channel bytes, three per pixel.
    pub fn to_interleaved(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.channels()).collect()
    }

    /// Check that the image has at least two rows and two columns, the minimum for
    /// 3x3 neighborhood extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] for a zero width and
    /// [`ImageError::DegenerateGeometry`] for single-row or single-column images.
    pub fn ensure_filterable(&self) -> Result<(), ImageError> {
        if self.width() == 0 {
            return Err(ImageError::InvalidDimensions(self.len(), self.width()));
        }
        if self.width() < 2 || self.height() < 2 {
            return Err(ImageError::DegenerateGeometry(self.width(), self.height()));
        }
        Ok(())
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of pixels in the image.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The pixels as a row-major slice.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// The pixels as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Get the pixel at a linear index.
    pub fn get(&self, index: usize) -> Option<&Pixel> {
        self.data.get(index)
    }

    /// Get the pixel at the given column and row.
    ///
    /// # Errors
    ///
    /// If the coordinates are outside the image, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        Ok(self.data[y * self.width() + x])
    }
}

use bmpfx_image::{ImageSize, Pixel, PixelBuffer};

use crate::error::IoError;

/// Size of the bitmap file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of a BITMAPINFOHEADER in bytes, the smallest supported info header.
pub const INFO_HEADER_SIZE: usize = 40;

const BITS_PER_PIXEL: u16 = 24;
const BYTES_PER_PIXEL: usize = 3;
const COMPRESSION_RGB: u32 = 0;
// 72 dpi
const PIXELS_PER_METER: u32 = 2835;

fn read_u16(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([data[off], data[off + 1]])
}

fn read_u32(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

fn read_i32(data: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

/// Parsed bitmap headers.
///
/// The header bytes up to the start of the pixel data are kept verbatim, so an image
/// written back with the same header is byte-identical outside the pixel rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    raw: Vec<u8>,
    size: ImageSize,
    top_down: bool,
}

impl BmpHeader {
    /// Create the headers of a new bottom-up 24-bit bitmap.
    ///
    /// # Example
    ///
    /// ```
    /// use bmpfx_io::bmp::BmpHeader;
    ///
    /// let header = BmpHeader::new([3, 2].into()).unwrap();
    ///
    /// assert_eq!(header.row_stride(), 12);
    /// assert_eq!(header.pixel_offset(), 54);
    /// assert!(!header.top_down());
    /// ```
    pub fn new(size: ImageSize) -> Result<Self, IoError> {
        let (width, height) = (
            i32::try_from(size.width).ok(),
            i32::try_from(size.height).ok(),
        );
        let (Some(width), Some(height)) = (width, height) else {
            return Err(IoError::InvalidHeaderDimensions(-1, -1));
        };
        if width <= 0 || height <= 0 {
            return Err(IoError::InvalidHeaderDimensions(width, height));
        }

        let pixel_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
        let image_bytes = pixel_data_len(size)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(IoError::InvalidHeaderDimensions(width, height))?;
        let file_size = image_bytes
            .checked_add(pixel_offset as u32)
            .ok_or(IoError::InvalidHeaderDimensions(width, height))?;

        let mut raw = Vec::with_capacity(pixel_offset);
        // file header
        raw.extend_from_slice(b"BM");
        raw.extend_from_slice(&file_size.to_le_bytes());
        raw.extend_from_slice(&[0u8; 4]);
        raw.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
        // info header
        raw.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
        raw.extend_from_slice(&width.to_le_bytes());
        raw.extend_from_slice(&height.to_le_bytes());
        raw.extend_from_slice(&1u16.to_le_bytes());
        raw.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        raw.extend_from_slice(&COMPRESSION_RGB.to_le_bytes());
        raw.extend_from_slice(&image_bytes.to_le_bytes());
        raw.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        raw.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        raw.extend_from_slice(&[0u8; 8]);

        Ok(Self {
            raw,
            size,
            top_down: false,
        })
    }

    /// Parse the file and info headers at the start of `data`.
    ///
    /// Only uncompressed 24-bit bitmaps with a BITMAPINFOHEADER or a later info header
    /// are accepted. A negative height marks a top-down bitmap.
    pub fn parse(data: &[u8]) -> Result<Self, IoError> {
        let min_len = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
        if data.len() < min_len {
            return Err(IoError::TruncatedHeader(data.len(), min_len));
        }

        if &data[0..2] != b"BM" {
            return Err(IoError::InvalidSignature([data[0], data[1]]));
        }

        let pixel_offset = read_u32(data, 10);
        let info_size = read_u32(data, 14);
        let width = read_i32(data, 18);
        let height = read_i32(data, 22);
        let bit_count = read_u16(data, 28);
        let compression = read_u32(data, 30);

        if (info_size as usize) < INFO_HEADER_SIZE {
            return Err(IoError::UnsupportedHeader(info_size));
        }

        if bit_count != BITS_PER_PIXEL {
            return Err(IoError::UnsupportedBitDepth(bit_count));
        }

        if compression != COMPRESSION_RGB {
            return Err(IoError::UnsupportedCompression(compression));
        }

        if width <= 0 || height == 0 || height == i32::MIN {
            return Err(IoError::InvalidHeaderDimensions(width, height));
        }

        let headers_end = FILE_HEADER_SIZE.saturating_add(info_size as usize);
        if (pixel_offset as usize) < headers_end || pixel_offset as usize > data.len() {
            return Err(IoError::InvalidPixelOffset(pixel_offset));
        }

        let size = ImageSize {
            width: width as usize,
            height: height.unsigned_abs() as usize,
        };

        Ok(Self {
            raw: data[..pixel_offset as usize].to_vec(),
            size,
            top_down: height < 0,
        })
    }

    /// The image size recorded in the header.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Whether the first stored row is the top row of the image.
    pub fn top_down(&self) -> bool {
        self.top_down
    }

    /// Offset of the first pixel row from the start of the file.
    pub fn pixel_offset(&self) -> usize {
        self.raw.len()
    }

    /// Bytes per stored row, padded to a multiple of four.
    pub fn row_stride(&self) -> usize {
        row_stride(self.size.width)
    }

    /// The raw header bytes, everything before the pixel data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Row of the image held by the `stored`-th row of the file.
    fn image_row(&self, stored: usize) -> usize {
        if self.top_down {
            stored
        } else {
            self.size.height - 1 - stored
        }
    }
}

fn row_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL + 3) & !3
}

fn pixel_data_len(size: ImageSize) -> Option<usize> {
    size.width
        .checked_mul(BYTES_PER_PIXEL)?
        .checked_add(3)
        .map(|n| n & !3)?
        .checked_mul(size.height)
}

/// A decoded bitmap: its original headers and its pixels, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpImage {
    /// The headers read from the file.
    pub header: BmpHeader,
    /// The pixels in top-to-bottom row order.
    pub image: PixelBuffer,
}

impl BmpImage {
    /// Wrap a pixel buffer with freshly created bottom-up headers.
    pub fn from_image(image: PixelBuffer) -> Result<Self, IoError> {
        let header = BmpHeader::new(image.size())?;
        Ok(Self { header, image })
    }

    /// Keep the headers and replace the pixels.
    ///
    /// # Errors
    ///
    /// The new image must have the size recorded in the headers.
    pub fn with_image(&self, image: PixelBuffer) -> Result<Self, IoError> {
        if image.size() != self.header.size() {
            return Err(IoError::SizeMismatch(image.size(), self.header.size()));
        }
        Ok(Self {
            header: self.header.clone(),
            image,
        })
    }
}

/// Decode an uncompressed 24-bit bitmap from its file bytes.
///
/// The rows are reordered so that pixel `0` of the returned buffer is the top-left
/// pixel, whatever the storage order of the file. Channels are kept in file order
/// (blue, green, red).
///
/// # Arguments
///
/// * `data` - The complete file contents.
///
/// # Errors
///
/// Returns an error if the headers are not supported or the pixel data is truncated.
pub fn decode_bmp(data: &[u8]) -> Result<BmpImage, IoError> {
    let header = BmpHeader::parse(data)?;
    let size = header.size();

    let stride = header.row_stride();
    let pixels_len = pixel_data_len(size).ok_or(IoError::InvalidHeaderDimensions(
        size.width as i32,
        size.height as i32,
    ))?;
    let pixel_offset = header.pixel_offset();
    let pixel_data = &data[pixel_offset..];
    if pixel_data.len() < pixels_len {
        return Err(IoError::TruncatedPixelData(pixels_len, pixel_data.len()));
    }

    log::debug!(
        "decoded bitmap header: {}, stride {}, offset {}, top_down {}",
        size,
        stride,
        pixel_offset,
        header.top_down()
    );
    if pixel_data.len() > pixels_len {
        log::debug!(
            "ignoring {} bytes after the pixel data",
            pixel_data.len() - pixels_len
        );
    }

    let mut pixels = vec![Pixel::BLACK; size.num_pixels()];
    for (stored, row) in pixel_data.chunks_exact(stride).take(size.height).enumerate() {
        let y = header.image_row(stored);
        let dst_row = &mut pixels[y * size.width..(y + 1) * size.width];
        for (dst, src) in dst_row
            .iter_mut()
            .zip(row.chunks_exact(BYTES_PER_PIXEL))
        {
            *dst = Pixel::new(src[0], src[1], src[2]);
        }
    }

    let image = PixelBuffer::new(size, pixels)?;

    Ok(BmpImage { header, image })
}

/// Encode a bitmap to file bytes.
///
/// The headers are written unchanged, followed by the pixel rows in the storage order
/// the headers declare, each padded with zeros to a multiple of four bytes.
///
/// # Errors
///
/// Returns [`IoError::SizeMismatch`] if the image size differs from the header size.
pub fn encode_bmp(bmp: &BmpImage) -> Result<Vec<u8>, IoError> {
    let header = &bmp.header;
    let size = header.size();
    if bmp.image.size() != size {
        return Err(IoError::SizeMismatch(bmp.image.size(), size));
    }

    let stride = header.row_stride();
    let padding = stride - size.width * BYTES_PER_PIXEL;

    let mut out = Vec::with_capacity(header.pixel_offset() + stride * size.height);
    out.extend_from_slice(header.as_bytes());

    let pixels = bmp.image.as_slice();
    for stored in 0..size.height {
        let y = header.image_row(stored);
        for pixel in &pixels[y * size.width..(y + 1) * size.width] {
            out.extend_from_slice(&pixel.channels());
        }
        out.extend(std::iter::repeat(0u8).take(padding));
    }

    Ok(out)
}

//! 3x3 neighborhood extraction.
//!
//! Every pixel of an image is assigned a [`BoundaryClass`] from its position. The class
//! selects a fixed table of offsets that says, for each of the nine kernel slots, which
//! in-bounds pixel is sampled. Interior pixels sample their true neighbors; pixels on a
//! border or corner sample the nearest pixel in the same row or column instead of a
//! neighbor that does not exist.

use bmpfx_image::{ImageError, Pixel, PixelBuffer};

/// Column and row offset of a sampled pixel relative to the kernel center.
type Tap = (isize, isize);

const NW: Tap = (-1, -1);
const N: Tap = (0, -1);
const NE: Tap = (1, -1);
const W: Tap = (-1, 0);
const SELF: Tap = (0, 0);
const E: Tap = (1, 0);
const SW: Tap = (-1, 1);
const S: Tap = (0, 1);
const SE: Tap = (1, 1);

// slot order: NW, N, NE, W, C, E, SW, S, SE
const TOP_LEFT_TAPS: [Tap; 9] = [SELF, SELF, E, SELF, SELF, E, S, S, SE];
const TOP_RIGHT_TAPS: [Tap; 9] = [W, SELF, SELF, W, SELF, SELF, SW, S, S];
const BOTTOM_LEFT_TAPS: [Tap; 9] = [N, N, NE, SELF, SELF, E, SELF, SELF, E];
const BOTTOM_RIGHT_TAPS: [Tap; 9] = [NW, N, N, W, SELF, SELF, W, SELF, SELF];
const TOP_TAPS: [Tap; 9] = [W, SELF, E, W, SELF, E, SW, S, SE];
const LEFT_TAPS: [Tap; 9] = [N, N, NE, SELF, SELF, E, S, S, SE];
const RIGHT_TAPS: [Tap; 9] = [NW, N, N, W, SELF, SELF, SW, S, S];
const BOTTOM_TAPS: [Tap; 9] = [NW, N, NE, W, SELF, E, W, SELF, E];
const INTERIOR_TAPS: [Tap; 9] = [NW, N, NE, W, SELF, E, SW, S, SE];

/// A slot of a 3x3 kernel, in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelPosition {
    /// Row above, column to the left.
    NorthWest,
    /// Row above, same column.
    North,
    /// Row above, column to the right.
    NorthEast,
    /// Same row, column to the left.
    West,
    /// The pixel the kernel is centered on.
    Center,
    /// Same row, column to the right.
    East,
    /// Row below, column to the left.
    SouthWest,
    /// Row below, same column.
    South,
    /// Row below, column to the right.
    SouthEast,
}

impl KernelPosition {
    /// All positions in kernel order.
    pub const ALL: [KernelPosition; 9] = [
        KernelPosition::NorthWest,
        KernelPosition::North,
        KernelPosition::NorthEast,
        KernelPosition::West,
        KernelPosition::Center,
        KernelPosition::East,
        KernelPosition::SouthWest,
        KernelPosition::South,
        KernelPosition::SouthEast,
    ];

    /// Index of the position inside a row-major 3x3 array.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Position class of a pixel, used to pick the border substitution rule.
///
/// The classes are tested in declaration order and the first match wins, so a corner
/// pixel is never reported as a border pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryClass {
    /// First pixel of the first row.
    TopLeft,
    /// Last pixel of the first row.
    TopRight,
    /// First pixel of the last row.
    BottomLeft,
    /// Last pixel of the image.
    BottomRight,
    /// Any other pixel of the first row.
    Top,
    /// Any other pixel of the first column.
    Left,
    /// Any other pixel of the last column.
    Right,
    /// Any other pixel of the last row.
    Bottom,
    /// A pixel with all eight neighbors inside the image.
    Interior,
}

impl BoundaryClass {
    /// All classes in priority order.
    pub const ALL: [BoundaryClass; 9] = [
        BoundaryClass::TopLeft,
        BoundaryClass::TopRight,
        BoundaryClass::BottomLeft,
        BoundaryClass::BottomRight,
        BoundaryClass::Top,
        BoundaryClass::Left,
        BoundaryClass::Right,
        BoundaryClass::Bottom,
        BoundaryClass::Interior,
    ];

    /// Classify a linear pixel index.
    ///
    /// # Arguments
    ///
    /// * `index` - The linear pixel index, `index < len`.
    /// * `width` - The number of pixels per row.
    /// * `len` - The number of pixels in the image.
    ///
    /// PRECONDITION: `width >= 2`, `len` is a multiple of `width` and `len >= 2 * width`.
    pub fn classify(index: usize, width: usize, len: usize) -> Self {
        debug_assert!(index < len, "index {index} out of bounds for {len} pixels");

        let first_row = index < width;
        let last_row = len - index <= width;
        let first_col = index % width == 0;
        let last_col = (index + 1) % width == 0;

        if first_row && first_col {
            BoundaryClass::TopLeft
        } else if first_row && last_col {
            BoundaryClass::TopRight
        } else if last_row && first_col {
            BoundaryClass::BottomLeft
        } else if index == len - 1 {
            BoundaryClass::BottomRight
        } else if first_row {
            BoundaryClass::Top
        } else if first_col && !last_row {
            BoundaryClass::Left
        } else if last_col {
            BoundaryClass::Right
        } else if last_row {
            BoundaryClass::Bottom
        } else {
            BoundaryClass::Interior
        }
    }

    /// Offsets sampled for each kernel slot, in kernel order.
    ///
    /// A zero offset means the center pixel stands in for the missing neighbor.
    pub fn taps(self) -> &'static [(isize, isize); 9] {
        match self {
            BoundaryClass::TopLeft => &TOP_LEFT_TAPS,
            BoundaryClass::TopRight => &TOP_RIGHT_TAPS,
            BoundaryClass::BottomLeft => &BOTTOM_LEFT_TAPS,
            BoundaryClass::BottomRight => &BOTTOM_RIGHT_TAPS,
            BoundaryClass::Top => &TOP_TAPS,
            BoundaryClass::Left => &LEFT_TAPS,
            BoundaryClass::Right => &RIGHT_TAPS,
            BoundaryClass::Bottom => &BOTTOM_TAPS,
            BoundaryClass::Interior => &INTERIOR_TAPS,
        }
    }
}

/// The nine pixels sampled around a center pixel, in kernel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel([Pixel; 9]);

impl Kernel {
    /// Gather the kernel around `index`.
    ///
    /// PRECONDITION: `src` holds at least two full rows of `width >= 2` pixels and
    /// `index < src.len()`. Use [`extract_kernel`] for a checked version.
    pub(crate) fn gather(src: &[Pixel], width: usize, index: usize) -> Self {
        let class = BoundaryClass::classify(index, width, src.len());
        let stride = width as isize;
        Kernel(
            class
                .taps()
                .map(|(dx, dy)| src[index.wrapping_add_signed(dy * stride + dx)]),
        )
    }

    /// Get the pixel sampled for a kernel slot.
    pub fn get(&self, position: KernelPosition) -> Pixel {
        self.0[position.index()]
    }

    /// The pixels in kernel order.
    pub fn as_array(&self) -> &[Pixel; 9] {
        &self.0
    }

    /// Iterate over the pixels in kernel order.
    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.0.iter()
    }

    /// The values of one channel across the kernel, in kernel order.
    pub fn channel(&self, ch: usize) -> [u8; 9] {
        self.0.map(|p| p.0[ch])
    }
}

/// Extract the 3x3 neighborhood of the pixel at `index`.
///
/// Neighbors that fall outside the image are replaced according to the
/// [`BoundaryClass`] of `index`; the returned kernel never contains pixels from outside
/// `buffer`.
///
/// # Arguments
///
/// * `buffer` - The row-major pixels of the image.
/// * `width` - The number of pixels per row.
/// * `index` - The linear index of the center pixel.
///
/// # Errors
///
/// * [`ImageError::InvalidDimensions`] if `width` is zero or does not divide the buffer.
/// * [`ImageError::DegenerateGeometry`] if the image is a single row or column.
/// * [`ImageError::PixelIndexOutOfBounds`] if `index` is past the end of the buffer.
///
/// # Example
///
/// ```
/// use bmpfx_image::Pixel;
/// use bmpfx_imgproc::kernel::{extract_kernel, KernelPosition};
///
/// let pixels = (0..9).map(Pixel::splat).collect::<Vec<_>>();
/// let kernel = extract_kernel(&pixels, 3, 4).unwrap();
///
/// assert_eq!(kernel.get(KernelPosition::NorthWest), Pixel::splat(0));
/// assert_eq!(kernel.get(KernelPosition::SouthEast), Pixel::splat(8));
/// ```
pub fn extract_kernel(buffer: &[Pixel], width: usize, index: usize) -> Result<Kernel, ImageError> {
    if width == 0 || buffer.len() % width != 0 {
        return Err(ImageError::InvalidDimensions(buffer.len(), width));
    }

    let height = buffer.len() / width;
    if width < 2 || height < 2 {
        return Err(ImageError::DegenerateGeometry(width, height));
    }

    if index >= buffer.len() {
        return Err(ImageError::PixelIndexOutOfBounds(
            index % width,
            index / width,
            width,
            height,
        ));
    }

    Ok(Kernel::gather(buffer, width, index))
}

/// Extract the 3x3 neighborhood of a pixel of `src`.
///
/// Same as [`extract_kernel`] with the width taken from the image.
pub fn extract_kernel_at(src: &PixelBuffer, index: usize) -> Result<Kernel, ImageError> {
    extract_kernel(src.as_slice(), src.width(), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    // pixel i holds the value i in every channel, so kernels read as index lists
    fn ramp(width: usize, height: usize) -> Vec<Pixel> {
        (0..width * height).map(|i| Pixel::splat(i as u8)).collect()
    }

    fn indices(kernel: &Kernel) -> [u8; 9] {
        kernel.channel(0)
    }

    #[test]
    fn test_classify_4x4_hits_every_class() {
        use BoundaryClass::*;

        let classes = (0..16)
            .map(|i| BoundaryClass::classify(i, 4, 16))
            .collect::<Vec<_>>();

        #[rustfmt::skip]
        let expected = vec![
            TopLeft,    Top,      Top,      TopRight,
            Left,       Interior, Interior, Right,
            Left,       Interior, Interior, Right,
            BottomLeft, Bottom,   Bottom,   BottomRight,
        ];
        assert_eq!(classes, expected);

        for class in BoundaryClass::ALL {
            assert!(classes.contains(&class), "{class:?} not hit");
        }
    }

    #[test]
    fn test_kernel_4x4_substitutions() -> Result<(), ImageError> {
        let pixels = ramp(4, 4);
        let cases: [(usize, [u8; 9]); 9] = [
            (0, [0, 0, 1, 0, 0, 1, 4, 4, 5]),
            (3, [2, 3, 3, 2, 3, 3, 6, 7, 7]),
            (12, [8, 8, 9, 12, 12, 13, 12, 12, 13]),
            (15, [10, 11, 11, 14, 15, 15, 14, 15, 15]),
            (5, [0, 1, 2, 4, 5, 6, 8, 9, 10]),
            (1, [0, 1, 2, 0, 1, 2, 4, 5, 6]),
            (4, [0, 0, 1, 4, 4, 5, 8, 8, 9]),
            (7, [2, 3, 3, 6, 7, 7, 10, 11, 11]),
            (13, [8, 9, 10, 12, 13, 14, 12, 13, 14]),
        ];
        for (index, expected) in cases {
            let kernel = extract_kernel(&pixels, 4, index)?;
            assert_eq!(indices(&kernel), expected, "index {index}");
        }
        Ok(())
    }

    #[test]
    fn test_kernel_2x2() -> Result<(), ImageError> {
        let pixels = ramp(2, 2);
        assert_eq!(
            indices(&extract_kernel(&pixels, 2, 0)?),
            [0, 0, 1, 0, 0, 1, 2, 2, 3]
        );
        assert_eq!(
            indices(&extract_kernel(&pixels, 2, 1)?),
            [0, 1, 1, 0, 1, 1, 2, 3, 3]
        );
        assert_eq!(
            indices(&extract_kernel(&pixels, 2, 2)?),
            [0, 0, 1, 2, 2, 3, 2, 2, 3]
        );
        assert_eq!(
            indices(&extract_kernel(&pixels, 2, 3)?),
            [0, 1, 1, 2, 3, 3, 2, 3, 3]
        );
        Ok(())
    }

    #[test]
    fn test_kernel_stays_in_row_and_column() -> Result<(), ImageError> {
        for width in 2..8 {
            for height in 2..8 {
                let pixels = ramp(width, height);
                for index in 0..pixels.len() {
                    let kernel = extract_kernel(&pixels, width, index)?;
                    assert_eq!(kernel.get(KernelPosition::Center), pixels[index]);

                    let (x, y) = ((index % width) as isize, (index / width) as isize);
                    for (position, pixel) in KernelPosition::ALL.iter().zip(kernel.iter()) {
                        let sampled = pixel.0[0] as isize;
                        let (sx, sy) = (sampled % width as isize, sampled / width as isize);
                        assert!(
                            (sx - x).abs() <= 1 && (sy - y).abs() <= 1,
                            "{width}x{height} index {index} {position:?} sampled {sampled}"
                        );
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_extract_kernel_errors() {
        let pixels = ramp(3, 2);
        assert_eq!(
            extract_kernel(&pixels, 0, 0),
            Err(ImageError::InvalidDimensions(6, 0))
        );
        assert_eq!(
            extract_kernel(&pixels, 4, 0),
            Err(ImageError::InvalidDimensions(6, 4))
        );
        assert_eq!(
            extract_kernel(&pixels, 6, 0),
            Err(ImageError::DegenerateGeometry(6, 1))
        );
        assert_eq!(
            extract_kernel(&pixels, 1, 0),
            Err(ImageError::DegenerateGeometry(1, 6))
        );
        assert_eq!(
            extract_kernel(&pixels, 3, 6),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );
    }

    #[test]
    fn test_extract_kernel_at() -> Result<(), ImageError> {
        let image = PixelBuffer::from_pixels(3, ramp(3, 3))?;
        let kernel = extract_kernel_at(&image, 4)?;
        assert_eq!(indices(&kernel), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(kernel.as_array()[8], Pixel::splat(8));
        Ok(())
    }
}

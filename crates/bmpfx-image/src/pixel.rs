/// A pixel with three independent byte channels.
///
/// The channels are stored in the order they appear in the source file, which for
/// bitmaps is blue, green, red. Nothing in this crate looks at the channel identity:
/// every operation treats `C0`, `C1` and `C2` the same way.
///
/// # Examples
///
/// ```
/// use bmpfx_image::Pixel;
///
/// let pixel = Pixel::new(10, 20, 30);
/// let halved = pixel.map(|c| c / 2);
///
/// assert_eq!(halved, Pixel::new(5, 10, 15));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel(pub [u8; 3]);

impl Pixel {
    /// Number of channels per pixel.
    pub const CHANNELS: usize = 3;

    /// A pixel with every channel at zero.
    pub const BLACK: Pixel = Pixel([0; 3]);

    /// A pixel with every channel at 255.
    pub const WHITE: Pixel = Pixel([255; 3]);

    /// Create a pixel from its three channels, in storage order.
    pub const fn new(c0: u8, c1: u8, c2: u8) -> Self {
        Self([c0, c1, c2])
    }

    /// Create a pixel with the same value in every channel.
    pub const fn splat(value: u8) -> Self {
        Self([value; 3])
    }

    /// The channels in storage order.
    pub fn channels(&self) -> [u8; Pixel::CHANNELS] {
        self.0
    }

    /// Apply the same scalar function to every channel.
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self(self.0.map(f))
    }

    /// Build a pixel by evaluating `f` once per channel index.
    pub fn from_fn(f: impl FnMut(usize) -> u8) -> Self {
        Self(std::array::from_fn(f))
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.0
    }
}

#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use bmpfx_image as image;

#[doc(inline)]
pub use bmpfx_imgproc as imgproc;

#[doc(inline)]
pub use bmpfx_io as io;

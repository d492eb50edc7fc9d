use std::path::Path;

use crate::{
    bmp::{decode_bmp, encode_bmp, BmpImage},
    error::IoError,
};

/// Reads a 24-bit uncompressed bitmap from the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the bitmap, with a `bmp` or `dib` extension.
///
/// # Returns
///
/// The bitmap headers and its pixels, top row first.
pub fn read_image_bmp(file_path: impl AsRef<Path>) -> Result<BmpImage, IoError> {
    let file_path = file_path.as_ref().to_owned();
    // verify the file exists and is a bitmap
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.extension().map_or(true, |ext| {
        ext.to_ascii_lowercase() != "bmp" && ext.to_ascii_lowercase() != "dib"
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let data = std::fs::read(&file_path)?;
    log::debug!("read {} bytes from {}", data.len(), file_path.display());

    decode_bmp(&data)
}

/// Writes a bitmap to the given file path.
///
/// The file is created if it does not exist and truncated if it does.
///
/// # Arguments
///
/// * `file_path` - The path to the bitmap.
/// * `bmp` - The headers and pixels to write.
pub fn write_image_bmp(file_path: impl AsRef<Path>, bmp: &BmpImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let data = encode_bmp(bmp)?;
    std::fs::write(file_path, &data)?;
    log::debug!("wrote {} bytes to {}", data.len(), file_path.display());

    Ok(())
}

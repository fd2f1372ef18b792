use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};
use log::debug;

use crate::{error::WatermarkError, image::Image};

/// Decodes the file, guessing the format based on file contents.
pub fn decode(path: &Path) -> Result<Image, WatermarkError> {
    if !path.is_file() {
        return Err(WatermarkError::NotFound {
            path: path.to_owned(),
        });
    }
    let decode_err = |source| WatermarkError::Decode {
        path: path.to_owned(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|source| WatermarkError::io(path, source))?
        .with_guessed_format()
        .map_err(|source| WatermarkError::io(path, source))?;
    let format = reader.format();
    let mut decoder = reader.into_decoder().map_err(decode_err)?;
    // a broken color profile is not worth failing the whole image over
    let icc = decoder.icc_profile().unwrap_or(None);
    let pixels = DynamicImage::from_decoder(decoder).map_err(decode_err)?;

    debug!(
        "decoded {} as {:?}, {}x{} {:?}",
        path.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );
    Ok(Image {
        format,
        icc,
        pixels,
    })
}

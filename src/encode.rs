use std::{
    ffi::OsStr,
    io::{BufWriter, Write},
    path::Path,
};

use image::{ImageError, ImageFormat};
use log::debug;

use crate::{error::WatermarkError, image::Image};

/// Encodes the image to `path`, picking the format from the file extension.
///
/// The image is first written to a temporary file next to the destination
/// and moved into place only once encoding succeeded,
/// so a failure never leaves a truncated image behind.
pub fn encode(image: &Image, path: &Path, quality: u8) -> Result<(), WatermarkError> {
    let format = choose_encoding_format(image, path)?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file = tempfile::NamedTempFile::new_in(directory)
        .map_err(|error| WatermarkError::io(directory, error))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    encode_inner(image, &mut writer, format, quality)
        .map_err(|error| WatermarkError::encode(path, error))?;

    // The buffers would be flushed on drop, but that would swallow errors.
    let file = writer
        .into_inner()
        .map_err(|error| WatermarkError::io(path, error.into_error()))?;
    // `persist` overwrites the destination if it exists
    file.persist(path)
        .map_err(|error| WatermarkError::io(path, error.error))?;

    debug!("wrote {} as {:?}", path.display(), format);
    Ok(())
}

fn encode_inner<W: Write + std::io::Seek>(
    image: &Image,
    writer: &mut W,
    format: ImageFormat,
    quality: u8,
) -> Result<(), ImageError> {
    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::encoders::jpeg::encode(image, writer, quality),
        #[cfg(feature = "png")]
        ImageFormat::Png => crate::encoders::png::encode(image, writer),
        // the other formats have no quality setting worth exposing
        _ => image.pixels.write_to(writer, format),
    }
}

fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, WatermarkError> {
    // guess based on the output path first
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    // if that fails, use the input format
    if let Some(format) = image.format {
        return Ok(format);
    }
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(WatermarkError::encode(
        path,
        ImageError::Unsupported(
            image::error::UnsupportedError::from_format_and_kind(
                image::error::ImageFormatHint::Unknown,
                image::error::UnsupportedErrorKind::GenericFeature(format!(
                    "no encode delegate for this image format `{}'",
                    extension.to_string_lossy().to_ascii_uppercase()
                )),
            ),
        ),
    ))
}

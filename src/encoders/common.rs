//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{DynamicImage, ImageBuffer, ImageEncoder, Pixel};

use crate::image::Image;

pub fn write_icc(encoder: &mut impl ImageEncoder, image: &Image) {
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
}

/// Compositing always produces RGBA, even when every pixel ends up opaque.
/// Writing out an alpha channel that is all 255 only makes the file bigger,
/// so drop it when that is lossless.
pub fn strip_opaque_alpha(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    match pixels {
        DynamicImage::ImageRgba8(buffer) if is_opaque(buffer) => {
            Cow::Owned(DynamicImage::ImageRgb8(pixels.to_rgb8()))
        }
        DynamicImage::ImageLumaA8(buffer) if is_opaque(buffer) => {
            Cow::Owned(DynamicImage::ImageLuma8(pixels.to_luma8()))
        }
        _ => Cow::Borrowed(pixels),
    }
}

fn is_opaque<P>(buffer: &ImageBuffer<P, Vec<u8>>) -> bool
where
    P: Pixel<Subpixel = u8>,
{
    if !P::HAS_ALPHA {
        return true;
    }
    // alpha is the last channel in every 8-bit pixel type we feed in here
    buffer
        .pixels()
        .all(|pixel| pixel.channels().last() == Some(&u8::MAX))
}

use image::{DynamicImage, ImageBuffer, Pixel};

use crate::image::Image;

/// Replaces every color channel with `map(value, channel_max)`, leaving alpha untouched.
/// The result is clamped to the channel range and truncated towards zero.
///
/// Floating-point images are converted to 8-bit RGBA first.
pub(super) fn map_color_channels(image: &mut Image, map: impl Fn(f32, f32) -> f32) {
    match &mut image.pixels {
        DynamicImage::ImageLuma8(buffer) => map_8bit(buffer, &map),
        DynamicImage::ImageLumaA8(buffer) => map_8bit(buffer, &map),
        DynamicImage::ImageRgb8(buffer) => map_8bit(buffer, &map),
        DynamicImage::ImageRgba8(buffer) => map_8bit(buffer, &map),
        DynamicImage::ImageLuma16(buffer) => map_16bit(buffer, &map),
        DynamicImage::ImageLumaA16(buffer) => map_16bit(buffer, &map),
        DynamicImage::ImageRgb16(buffer) => map_16bit(buffer, &map),
        DynamicImage::ImageRgba16(buffer) => map_16bit(buffer, &map),
        other => {
            let mut buffer = other.to_rgba8();
            map_8bit(&mut buffer, &map);
            *other = DynamicImage::ImageRgba8(buffer);
        }
    }
}

fn map_8bit<P: Pixel<Subpixel = u8>>(
    buffer: &mut ImageBuffer<P, Vec<u8>>,
    map: &impl Fn(f32, f32) -> f32,
) {
    let max = f32::from(u8::MAX);
    for pixel in buffer.pixels_mut() {
        pixel.apply_without_alpha(|c| map(f32::from(c), max).clamp(0.0, max) as u8);
    }
}

fn map_16bit<P: Pixel<Subpixel = u16>>(
    buffer: &mut ImageBuffer<P, Vec<u16>>,
    map: &impl Fn(f32, f32) -> f32,
) {
    let max = f32::from(u16::MAX);
    for pixel in buffer.pixels_mut() {
        pixel.apply_without_alpha(|c| map(f32::from(c), max).clamp(0.0, max) as u16);
    }
}

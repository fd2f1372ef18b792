use image::{imageops::overlay, DynamicImage};
use log::debug;

use crate::{error::WatermarkError, image::Image};

/// Draws `watermark` over the center of `image` with the given opacity (0.0 to 1.0),
/// using source-over blending.
pub fn composite(
    image: &mut Image,
    watermark: &Image,
    opacity: f32,
) -> Result<(), WatermarkError> {
    let (x, y) = centered_offset(
        (image.pixels.width(), image.pixels.height()),
        (watermark.pixels.width(), watermark.pixels.height()),
    );
    let (x, y) = (to_pixel(x), to_pixel(y));
    debug!("compositing watermark at offset ({x}, {y}) with opacity {opacity}");

    let mut top = watermark.pixels.to_rgba8();
    let opacity = opacity.clamp(0.0, 1.0);
    for pixel in top.pixels_mut() {
        pixel[3] = (f32::from(pixel[3]) * opacity).round() as u8;
    }

    let mut bottom = image.pixels.to_rgba8();
    overlay(&mut bottom, &top, x, y);
    image.pixels = DynamicImage::ImageRgba8(bottom);
    Ok(())
}

/// Offset of the top-left corner of the watermark that puts its center on the image's center.
/// Not rounded, and negative when the watermark is larger than the image.
pub fn centered_offset(image_dim: (u32, u32), watermark_dim: (u32, u32)) -> (f64, f64) {
    let (w1, h1) = (f64::from(image_dim.0), f64::from(image_dim.1));
    let (w2, h2) = (f64::from(watermark_dim.0), f64::from(watermark_dim.1));
    (w1 / 2.0 - w2 / 2.0, h1 / 2.0 - h2 / 2.0)
}

/// Rounds half-way cases up, towards positive infinity
fn to_pixel(coordinate: f64) -> i64 {
    (coordinate + 0.5).floor() as i64
}

use crate::{error::WatermarkError, image::Image};

use super::channels::map_color_channels;

/// Stretches channel values away from the midpoint by `(1 + intensity) / (1 - intensity)`.
/// `intensity` is clamped to `-1.0..=0.99`; negative values flatten the image.
pub fn contrast(image: &mut Image, intensity: f32) -> Result<(), WatermarkError> {
    let intensity = intensity.clamp(-1.0, 0.99);
    let factor = (1.0 + intensity) / (1.0 - intensity);
    map_color_channels(image, |c, max| {
        let middle = max * 127.0 / 255.0;
        (factor * (c - middle) + middle).floor()
    });
    Ok(())
}

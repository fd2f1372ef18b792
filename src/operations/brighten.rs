use crate::{error::WatermarkError, image::Image};

use super::channels::map_color_channels;

/// Moves every color channel `intensity` of the way towards white.
/// Negative intensities scale channels towards black instead.
pub fn brighten(image: &mut Image, intensity: f32) -> Result<(), WatermarkError> {
    let intensity = intensity.clamp(-1.0, 1.0);
    map_color_channels(image, |c, max| {
        if intensity < 0.0 {
            c * (1.0 + intensity)
        } else {
            c + (max - c) * intensity
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn brightens_towards_white() {
        let mut image = Image::from_pixels(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            1,
            1,
            Rgba([0, 100, 250, 77]),
        )));
        brighten(&mut image, 0.3).unwrap();
        // 0 + 255 * 0.3 = 76.5, 100 + 155 * 0.3 = 146.5, 250 + 5 * 0.3 = 251.5
        assert_eq!(image.pixels.to_rgba8().get_pixel(0, 0).0, [76, 146, 251, 77]);
    }

    #[test]
    fn bright_pixels_do_not_clip() {
        let mut image =
            Image::from_pixels(DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([200]))));
        brighten(&mut image, 0.3).unwrap();
        assert_eq!(image.pixels.to_luma8().get_pixel(0, 0).0, [216]);
    }

    #[test]
    fn negative_intensity_darkens() {
        let mut image =
            Image::from_pixels(DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([200]))));
        brighten(&mut image, -0.5).unwrap();
        assert_eq!(image.pixels.to_luma8().get_pixel(0, 0).0, [100]);
    }
}

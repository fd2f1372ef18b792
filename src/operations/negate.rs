use crate::{error::WatermarkError, image::Image};

/// Replaces every color channel with its complement. Alpha is left alone.
pub fn negate(image: &mut Image) -> Result<(), WatermarkError> {
    image.pixels.invert();
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn complement_of_every_pixel() {
        let mut buffer = RgbaImage::new(3, 2);
        for (x, y, pixel) in buffer.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 40) as u8, (y * 90) as u8, 255, 200]);
        }
        let original = buffer.clone();
        let mut image = Image::from_pixels(DynamicImage::ImageRgba8(buffer));

        negate(&mut image).unwrap();

        let negated = image.pixels.to_rgba8();
        for (before, after) in original.pixels().zip(negated.pixels()) {
            assert_eq!(after[0], 255 - before[0]);
            assert_eq!(after[1], 255 - before[1]);
            assert_eq!(after[2], 255 - before[2]);
            assert_eq!(after[3], before[3]);
        }
    }
}

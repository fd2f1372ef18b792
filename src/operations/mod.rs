mod annotate;
mod brighten;
mod channels;
mod composite;
mod contrast;
mod grayscale;
mod negate;

pub use annotate::{annotate, bundled_font, layout_text, TextLine};
pub use composite::{centered_offset, composite};

use strum::{IntoStaticStr, VariantArray};

use crate::{error::WatermarkError, image::Image};

/// Adjustment applied to the image before the watermark goes on.
/// The serialized names are what the user picks from.
#[derive(IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modification {
    #[strum(serialize = "make image brighter")]
    Brighten,
    #[strum(serialize = "increase contrast")]
    Contrast,
    #[strum(serialize = "make image b&w")]
    Greyscale,
    #[strum(serialize = "invert image")]
    Invert,
}

impl Modification {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// `intensity` only matters for brighten and contrast
    pub fn execute(&self, image: &mut Image, intensity: f32) -> Result<(), WatermarkError> {
        match self {
            Modification::Brighten => brighten::brighten(image, intensity),
            Modification::Contrast => contrast::contrast(image, intensity),
            Modification::Greyscale => grayscale::grayscale(image),
            Modification::Invert => negate::negate(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma};

    use super::*;

    fn apply(modification: Modification, values: &[u8]) -> Vec<u8> {
        let buffer = GrayImage::from_raw(values.len() as u32, 1, values.to_vec()).unwrap();
        let mut image = Image::from_pixels(DynamicImage::ImageLuma8(buffer));
        modification.execute(&mut image, 0.3).unwrap();
        image.pixels.to_luma8().into_raw()
    }

    #[test]
    fn modifications_at_default_intensity() {
        assert_eq!(apply(Modification::Brighten, &[100, 200]), [146, 216]);
        assert_eq!(apply(Modification::Contrast, &[100, 200]), [76, 255]);
        assert_eq!(apply(Modification::Greyscale, &[100, 200]), [100, 200]);
        assert_eq!(apply(Modification::Invert, &[100, 200]), [155, 55]);
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = Modification::VARIANTS.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            [
                "make image brighter",
                "increase contrast",
                "make image b&w",
                "invert image"
            ]
        );
    }
}

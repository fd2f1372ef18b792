use std::num::NonZeroU8;

use arbitrary::Unstructured;
use image::{DynamicImage, ImageBuffer, RgbaImage};
use watermark_manager::operations::Modification;

/// A small RGBA image with fuzzer-chosen dimensions and pixels
#[derive(Debug)]
pub struct StructuredImage {
    pub width: NonZeroU8,
    pub height: NonZeroU8,
    pub rgba_data: Vec<u8>,
}

impl StructuredImage {
    pub fn to_dynamic_image(&self) -> DynamicImage {
        let width = self.width.get() as u32;
        let img: RgbaImage = ImageBuffer::from_fn(width, self.height.get() as u32, |x, y| {
            let idx = (y * width + x) as usize * 4;
            image::Rgba([
                self.rgba_data[idx],
                self.rgba_data[idx + 1],
                self.rgba_data[idx + 2],
                self.rgba_data[idx + 3],
            ])
        });
        DynamicImage::ImageRgba8(img)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}

/// Maps a fuzzer byte to one of the modifications, or to none at all
pub fn pick_modification(selector: u8) -> Option<Modification> {
    match selector % 5 {
        0 => Some(Modification::Brighten),
        1 => Some(Modification::Contrast),
        2 => Some(Modification::Greyscale),
        3 => Some(Modification::Invert),
        _ => None,
    }
}

use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Format the image was decoded from, used when the output path has no usable extension
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    /// Wraps pixels that did not come from a file, e.g. in tests
    pub fn from_pixels(pixels: DynamicImage) -> Self {
        Self {
            format: None,
            icc: None,
            pixels,
        }
    }
}

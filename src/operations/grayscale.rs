use crate::{error::WatermarkError, image::Image};

pub fn grayscale(image: &mut Image) -> Result<(), WatermarkError> {
    // image-rs appears to be using something like Rec. 709 by default for grayscale
    // conversion of most image types.
    // https://github.com/image-rs/image/issues/598
    image.pixels = image.pixels.grayscale();
    Ok(())
}

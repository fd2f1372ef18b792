#![no_main]

use image::GenericImageView;
use libfuzzer_sys::fuzz_target;
use watermark_manager::{
    image::Image,
    operations::{annotate, bundled_font, composite},
    settings::TextStyle,
};
use watermark_manager_fuzz::{pick_modification, StructuredImage};

fuzz_target!(|input: (StructuredImage, StructuredImage, u8, String, f32)| {
    let (base, watermark, modification, text, opacity) = input;
    let mut image = Image::from_pixels(base.to_dynamic_image());
    let watermark = Image::from_pixels(watermark.to_dynamic_image());
    let dimensions = image.pixels.dimensions();

    if let Some(modification) = pick_modification(modification) {
        modification
            .execute(&mut image, 0.3)
            .expect("modifications never fail");
    }

    let font = bundled_font().expect("bundled font must parse");
    let style = TextStyle {
        font_size: 16.0,
        ..Default::default()
    };
    annotate(&mut image, &text, &font, &style).expect("drawing text never fails");
    composite(&mut image, &watermark, opacity).expect("compositing never fails");

    // Contract: watermarking never changes the size of the picture.
    assert_eq!(image.pixels.dimensions(), dimensions);
});

//! Text watermarks.
//!
//! The text is laid out inside a box covering the whole image:
//! words wrap at the image width, every line is centered horizontally,
//! and the block of lines is centered vertically.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::DynamicImage;
use imageproc::drawing::draw_text_mut;
use log::debug;

use crate::{error::WatermarkError, image::Image, settings::TextStyle};

/// DejaVu Sans, see `assets/fonts/LICENSE-DejaVu.txt`
const BUNDLED_FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

pub fn bundled_font() -> Result<FontRef<'static>, WatermarkError> {
    Ok(FontRef::try_from_slice(BUNDLED_FONT_DATA)?)
}

/// A single line of text and the position of its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Draws `text` centered on the image.
/// Empty or whitespace-only text leaves the image untouched.
pub fn annotate<F: Font>(
    image: &mut Image,
    text: &str,
    font: &F,
    style: &TextStyle,
) -> Result<(), WatermarkError> {
    let (width, height) = (image.pixels.width(), image.pixels.height());
    let lines = layout_text(text, font, style.font_size, width, height);
    if lines.is_empty() {
        debug!("nothing to draw for text watermark {text:?}");
        return Ok(());
    }

    let scale = PxScale::from(style.font_size);
    let mut canvas = image.pixels.to_rgba8();
    for line in &lines {
        draw_text_mut(&mut canvas, style.color, line.x, line.y, scale, font, &line.text);
    }
    image.pixels = DynamicImage::ImageRgba8(canvas);
    Ok(())
}

/// Positions the lines of `text` within a `box_width` x `box_height` box.
pub fn layout_text<F: Font>(
    text: &str,
    font: &F,
    font_size: f32,
    box_width: u32,
    box_height: u32,
) -> Vec<TextLine> {
    let scale = PxScale::from(font_size);
    let scaled_font = font.as_scaled(scale);
    let measure = |line: &str| line_width(font, scale, line);
    let lines = wrap_lines(text, box_width as f32, &measure);

    let line_height = scaled_font.height() + scaled_font.line_gap();
    let block_height = line_height * lines.len() as f32;
    let top = (box_height as f32 - block_height) / 2.0;

    lines
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let x = (box_width as f32 - measure(&text)) / 2.0;
            let y = top + line_height * index as f32;
            TextLine {
                text,
                x: x.round() as i32,
                y: y.round() as i32,
            }
        })
        .collect()
}

fn line_width<F: Font>(font: &F, scale: PxScale, line: &str) -> f32 {
    let scaled_font = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut previous = None;
    for c in line.chars() {
        let glyph_id = scaled_font.glyph_id(c);
        if let Some(previous) = previous {
            width += scaled_font.kern(previous, glyph_id);
        }
        width += scaled_font.h_advance(glyph_id);
        previous = Some(glyph_id);
    }
    width
}

/// Greedy word wrap. `\n` always starts a new line.
/// A word that does not fit on a line of its own is kept whole and overflows.
fn wrap_lines(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) > max_width {
                lines.push(std::mem::replace(&mut current, word.to_owned()));
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    lines
}

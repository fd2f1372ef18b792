//! Fixed configuration of a watermarking session.
//!
//! Nothing here is read from a file or the environment; the values are the defaults
//! of the tool and are passed down explicitly so that every step can be tested with its own.

use std::path::PathBuf;

use image::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where source images and image watermarks are read from
    pub input_dir: PathBuf,
    /// Where watermarked images are written to
    pub output_dir: PathBuf,
    /// Inserted between the file name and its extension for the output file
    pub output_suffix: String,
    pub default_input: String,
    pub default_watermark: String,
    /// Strength of brighten/contrast. Brighten moves channels this fraction of the way
    /// to white; contrast scales around the midpoint by `(1 + x) / (1 - x)`.
    pub modification_intensity: f32,
    /// Opacity of an image watermark, 0.0 to 1.0
    pub watermark_opacity: f32,
    /// Encoder quality, 1 to 100
    pub quality: u8,
    pub text_style: TextStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("img"),
            output_dir: PathBuf::from("images"),
            output_suffix: "-with-watermark".to_owned(),
            default_input: "test.jpg".to_owned(),
            default_watermark: "logo.png".to_owned(),
            modification_intensity: 0.3,
            watermark_opacity: 0.5,
            quality: 100,
            text_style: TextStyle::default(),
        }
    }
}

impl Settings {
    /// Same defaults, but with both directories placed under `root`
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let defaults = Self::default();
        Self {
            input_dir: root.join(&defaults.input_dir),
            output_dir: root.join(&defaults.output_dir),
            ..defaults
        }
    }

    /// Where a file the user named is looked up
    pub fn input_file(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }
}

/// How a text watermark is drawn. The text is always centered within the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    pub color: Rgba<u8>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 64.0,
            color: Rgba([255, 255, 255, 255]),
        }
    }
}

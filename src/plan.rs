//! What one pass of the session decided, and carrying it out.

use std::path::PathBuf;

use ab_glyph::Font;
use log::info;
use strum::{IntoStaticStr, VariantArray};

use crate::{
    decode::decode,
    encode::encode,
    error::WatermarkError,
    image::Image,
    operations::{self, Modification},
    settings::Settings,
    utils::filename::watermarked_file_name,
};

#[derive(IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkKind {
    #[strum(serialize = "Text watermark")]
    Text,
    #[strum(serialize = "Image watermark")]
    Image,
}

impl WatermarkKind {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Watermark {
    Text(String),
    /// File name of the watermark image, relative to the input directory
    Image(String),
}

/// Everything the user decided for one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkPlan {
    /// File name of the image to mark, relative to the input directory
    pub input_image: String,
    pub watermark: Watermark,
    pub modification: Option<Modification>,
}

impl WatermarkPlan {
    pub fn output_path(&self, settings: &Settings) -> PathBuf {
        settings
            .output_dir
            .join(watermarked_file_name(&self.input_image, &settings.output_suffix))
    }

    /// Modifies and watermarks an already decoded input image, then writes it out.
    /// Returns where the result went.
    pub fn execute<F: Font>(
        &self,
        mut image: Image,
        font: &F,
        settings: &Settings,
    ) -> Result<PathBuf, WatermarkError> {
        if let Some(modification) = self.modification {
            info!("applying modification: {}", modification.label());
            modification.execute(&mut image, settings.modification_intensity)?;
        }

        match &self.watermark {
            Watermark::Text(text) => {
                operations::annotate(&mut image, text, font, &settings.text_style)?;
            }
            Watermark::Image(file_name) => {
                let watermark = decode(&settings.input_file(file_name))?;
                operations::composite(&mut image, &watermark, settings.watermark_opacity)?;
            }
        }

        let output = self.output_path(settings);
        encode(&image, &output, settings.quality)?;
        info!("wrote {}", output.display());
        Ok(output)
    }
}

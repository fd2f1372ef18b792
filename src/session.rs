//! The interactive loop: ask what to do, do it, start over.

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use ab_glyph::FontRef;
use log::{debug, info};
use strum::VariantArray;

use crate::{
    decode::decode,
    error::{WatermarkError, GENERIC_FAILURE_MESSAGE},
    operations::{bundled_font, Modification},
    plan::{Watermark, WatermarkKind, WatermarkPlan},
    prompt::Prompter,
    settings::Settings,
};

/// Why the session stopped
#[derive(Debug)]
pub enum SessionEnd {
    /// The user said they were not ready, or closed the input at that question
    Declined,
    /// A pass failed. The user has already been shown the generic failure message.
    Failed(WatermarkError),
}

/// What a single pass produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    Declined,
    Saved { path: PathBuf, kind: WatermarkKind },
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    settings: Settings,
    font: FontRef<'static>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, settings: Settings) -> Result<Self, WatermarkError> {
        Ok(Self {
            prompter,
            settings,
            font: bundled_font()?,
        })
    }

    /// Runs passes until the user declines or a pass fails.
    /// A failed pass is not retried and does not lead back to the first question.
    pub fn run(&mut self) -> SessionEnd {
        loop {
            match self.run_once() {
                Ok(PassOutcome::Declined) => return SessionEnd::Declined,
                Ok(PassOutcome::Saved { path, kind }) => {
                    debug!("pass finished, output at {}", path.display());
                    let notice = match kind {
                        WatermarkKind::Text => "Text watermark added successfully.",
                        WatermarkKind::Image => "Image watermark added successfully.",
                    };
                    if let Err(error) = self.prompter.say(notice) {
                        return self.fail(error);
                    }
                }
                Err(error) => return self.fail(error),
            }
        }
    }

    fn fail(&self, error: WatermarkError) -> SessionEnd {
        debug!("pass failed: {error}");
        eprintln!("{GENERIC_FAILURE_MESSAGE}");
        SessionEnd::Failed(error)
    }

    /// One full pass from the welcome question to the written file.
    pub fn run_once(&mut self) -> Result<PassOutcome, WatermarkError> {
        bootstrap_directories(&self.settings)?;

        let welcome = format!(
            "Hi! Welcome to \"Watermark manager\". Copy your image files to `{}` folder. \
             Then you'll be able to use them in the app. Are you ready?",
            self.settings.input_dir.display()
        );
        match self.prompter.confirm(&welcome, true) {
            Ok(true) => {}
            Ok(false) => return Ok(PassOutcome::Declined),
            Err(error) if error.is_end_of_input() => return Ok(PassOutcome::Declined),
            Err(error) => return Err(error),
        }

        let input_image = self.prompter.input(
            "What file do you want to mark?",
            Some(self.settings.default_input.as_str()),
        )?;
        let kind_labels: Vec<&str> = WatermarkKind::VARIANTS.iter().map(|k| k.label()).collect();
        let kind = WatermarkKind::VARIANTS[self.prompter.select("Watermark type:", &kind_labels)?];

        // loaded before the remaining questions so that a bad file name is reported right away
        let image = decode(&self.settings.input_file(&input_image))?;

        let modification = if self
            .prompter
            .confirm("Do you want to modify the image before adding a watermark?", true)?
        {
            let labels: Vec<&str> = Modification::VARIANTS.iter().map(|m| m.label()).collect();
            Some(Modification::VARIANTS[self.prompter.select("Choose a modification:", &labels)?])
        } else {
            None
        };

        let watermark = match kind {
            WatermarkKind::Text => {
                Watermark::Text(self.prompter.input("Type your watermark text:", None)?)
            }
            WatermarkKind::Image => Watermark::Image(self.prompter.input(
                "Type your watermark name:",
                Some(self.settings.default_watermark.as_str()),
            )?),
        };

        let plan = WatermarkPlan {
            input_image,
            watermark,
            modification,
        };
        info!("executing {plan:?}");
        let path = plan.execute(image, &self.font, &self.settings)?;
        Ok(PassOutcome::Saved { path, kind })
    }
}

/// Creates the input and output directories if they are missing. Not recursive.
pub fn bootstrap_directories(settings: &Settings) -> Result<(), WatermarkError> {
    for directory in [&settings.output_dir, &settings.input_dir] {
        ensure_directory(directory)?;
    }
    Ok(())
}

fn ensure_directory(directory: &Path) -> Result<(), WatermarkError> {
    if directory.is_dir() {
        return Ok(());
    }
    match fs::create_dir(directory) {
        Ok(()) => {
            info!("created directory {}", directory.display());
            Ok(())
        }
        // somebody else created it in the meantime
        Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(error) => Err(WatermarkError::io(directory, error)),
    }
}

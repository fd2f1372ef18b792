use std::path::PathBuf;

use image::ImageError;

/// The only thing the user is ever told when a watermarking pass fails.
/// The details go to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong... Try again.";

#[derive(Debug, thiserror::Error)]
pub enum WatermarkError {
    #[error("unable to open image `{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to decode image `{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("unable to encode image `{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("I/O error on `{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundled font is invalid: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("unable to read answer: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Coarse classification of [`WatermarkError`], handy for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Decode,
    Encode,
    Io,
    Font,
    Prompt,
}

impl WatermarkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WatermarkError::NotFound { .. } => ErrorKind::NotFound,
            WatermarkError::Decode { .. } => ErrorKind::Decode,
            WatermarkError::Encode { .. } => ErrorKind::Encode,
            WatermarkError::Io { .. } => ErrorKind::Io,
            WatermarkError::Font(_) => ErrorKind::Font,
            WatermarkError::Prompt(_) => ErrorKind::Prompt,
        }
    }

    /// True if the terminal input was closed while we were waiting for an answer.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, WatermarkError::Prompt(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WatermarkError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn encode(path: impl Into<PathBuf>, source: ImageError) -> Self {
        WatermarkError::Encode {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_path() {
        let err = WatermarkError::NotFound {
            path: PathBuf::from("img/missing.jpg"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("img/missing.jpg"));
    }

    #[test]
    fn end_of_input_is_detected() {
        let eof = WatermarkError::Prompt(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(eof.is_end_of_input());

        let other = WatermarkError::Prompt(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(!other.is_end_of_input());

        let io = WatermarkError::io(
            "images",
            std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
        );
        assert!(!io.is_end_of_input());
    }
}

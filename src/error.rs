use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the scan pipeline. All of them are terminal for the
/// current run; the CLI translates them into exit codes.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("invalid detection: {0}")]
    InvalidDetection(String),
    #[error("failed to load image {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
    #[error("detector failed: {0}")]
    Detector(String),
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

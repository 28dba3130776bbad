use thiserror::Error;

/// The primary error type for the image-inspector crate.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Not an image file (type: {0:?})")]
    InvalidFileType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // --- External Service Initialization Errors ---
    #[error("Exiftool failed to start")]
    Exiftool(#[from] exiftool::ExifToolError),
}

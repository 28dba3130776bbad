use std::time::Duration;
use thiserror::Error;

/// Failure of the tag extraction branch as a whole. There are no per-tag errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Exiftool failed to execute or process the file: {0}")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("Unsupported or unreadable file: {0}")]
    Unsupported(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("I/O error while reading image header: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode image dimensions: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Dimension probe timed out after {0:?}")]
    Timeout(Duration),

    #[error("Probe task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_the_cause() {
        let io = ProbeError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.png",
        ));
        assert!(io.to_string().ends_with(": missing.png"), "{io}");

        let decode = ProbeError::from(image::ImageError::IoError(std::io::Error::other(
            "truncated header",
        )));
        assert!(decode.to_string().contains("truncated header"), "{decode}");
    }
}

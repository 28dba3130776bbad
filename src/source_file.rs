use crate::ViewerError;
use chrono::{DateTime, Utc};
use mime_guess::MimeGuess;
use std::path::{Path, PathBuf};

/// A file handed to the inspector, with the attributes the inspector reads from it.
///
/// The MIME type is guessed from the file extension, the way a browser fills in
/// the `type` of a picked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    name: String,
    size: u64,
    mime_type: String,
    last_modified: DateTime<Utc>,
}

impl SourceFile {
    /// Builds a `SourceFile` from known attributes. The name is the final path component.
    pub fn new(
        path: impl Into<PathBuf>,
        size: u64,
        mime_type: impl Into<String>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self {
            path,
            name,
            size,
            mime_type: mime_type.into(),
            last_modified,
        }
    }

    /// Reads size and modification time from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Io`] if the file does not exist or its metadata
    /// cannot be read.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let fs_metadata = tokio::fs::metadata(path).await?;
        let last_modified = fs_metadata.modified()?.into();
        let mime_type = MimeGuess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_owned();

        Ok(Self::new(path, fs_metadata.len(), mime_type, last_modified))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub const fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// True when the MIME type is in the `image/` category.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_name_is_last_path_component() {
        let file = SourceFile::new("photos/2024/tent.jpg", 10, "image/jpeg", Utc::now());
        assert_eq!(file.name(), "tent.jpg");
        assert_eq!(file.path(), Path::new("photos/2024/tent.jpg"));
    }

    #[test]
    fn test_is_image_checks_mime_category() {
        let now = Utc::now();
        assert!(SourceFile::new("a.png", 1, "image/png", now).is_image());
        assert!(SourceFile::new("a.heic", 1, "image/heic", now).is_image());
        assert!(!SourceFile::new("a.txt", 1, "text/plain", now).is_image());
        assert!(!SourceFile::new("a", 1, "", now).is_image());
    }

    #[tokio::test]
    async fn test_open_reads_size_and_guesses_mime() -> Result<(), ViewerError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("notes.txt");
        let mut file = std::fs::File::create(&path)?;
        file.write_all(b"hello world")?;
        drop(file);

        let source = SourceFile::open(&path).await?;
        assert_eq!(source.name(), "notes.txt");
        assert_eq!(source.size(), 11);
        assert_eq!(source.mime_type(), "text/plain");
        assert!(!source.is_image());

        Ok(())
    }

    #[tokio::test]
    async fn test_open_guesses_image_mime_from_extension() -> Result<(), ViewerError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("IMG_0001.JPG");
        std::fs::write(&path, [0u8; 4])?;

        let source = SourceFile::open(&path).await?;
        assert_eq!(source.mime_type(), "image/jpeg");
        assert!(source.is_image());

        Ok(())
    }

    #[tokio::test]
    async fn test_open_missing_file_is_io_error() {
        let result = SourceFile::open("does/not/exist.jpg").await;
        assert!(matches!(result, Err(ViewerError::Io(_))));
    }
}

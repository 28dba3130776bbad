use crate::features::error::ProbeError;
use crate::source_file::SourceFile;
use crate::structs::Dimensions;
use image::ImageReader;
use std::future::Future;
use std::path::Path;

/// Finds the pixel size of an image.
pub trait DimensionProber {
    fn probe(
        &self,
        file: &SourceFile,
    ) -> impl Future<Output = Result<Dimensions, ProbeError>> + Send;
}

/// Reads dimensions from the image header with the `image` crate.
///
/// Only the header is decoded. The reader is dropped before the probe returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageProber;

impl DimensionProber for ImageProber {
    async fn probe(&self, file: &SourceFile) -> Result<Dimensions, ProbeError> {
        let path = file.path().to_path_buf();
        let (width, height) = tokio::task::spawn_blocking(move || read_dimensions(&path))
            .await
            .map_err(|e| ProbeError::Task(e.to_string()))??;

        Ok(Dimensions { width, height })
    }
}

fn read_dimensions(path: &Path) -> Result<(u32, u32), ProbeError> {
    // The extension can lie, so sniff the format from the content.
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

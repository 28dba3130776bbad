use crate::ViewerError;
use crate::features::dimensions::{DimensionProber, ImageProber};
use crate::features::error::ProbeError;
use crate::features::exif::get_exif_summary;
use crate::features::exiftool::ExifToolExtractor;
use crate::features::gps::get_gps_info;
use crate::features::iptc::get_iptc_summary;
use crate::features::tags::TagExtractor;
use crate::result_slot::ResultSlot;
use crate::source_file::SourceFile;
use crate::structs::{BasicInfo, Dimensions, Metadata};
use bon::bon;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// The entry point for inspecting image files.
///
/// Holds the dimension prober, the tag extractor and the slot with the
/// currently displayed result. Create it once and reuse it for every file.
///
/// ```rust,no_run
/// # use image_inspector::{MetadataViewer, ViewerError};
/// # use std::time::Duration;
/// # fn main() -> Result<(), ViewerError> {
/// let viewer = MetadataViewer::builder()
///     .probe_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct MetadataViewer<P = ImageProber, E = ExifToolExtractor> {
    prober: P,
    extractor: E,
    probe_timeout: Option<Duration>,
    results: ResultSlot,
}

#[bon]
impl MetadataViewer {
    /// Constructs a `MetadataViewer` with the default collaborators.
    ///
    /// # Builder Arguments
    ///
    /// * `exiftool_path: Option<PathBuf>` - A specific `exiftool` executable. If `None`, `exiftool` is searched for in `PATH`.
    /// * `probe_timeout: Option<Duration>` - Upper bound for reading the image dimensions. If `None`, the probe may take as long as it needs.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Exiftool`] if the `exiftool` executable cannot be found or fails to start.
    #[builder]
    pub fn new(
        exiftool_path: Option<PathBuf>,
        probe_timeout: Option<Duration>,
    ) -> Result<Self, ViewerError> {
        let extractor = ExifToolExtractor::new(exiftool_path.as_deref())?;
        Ok(Self::with_collaborators(ImageProber, extractor).with_probe_timeout(probe_timeout))
    }
}

impl<P: DimensionProber, E: TagExtractor> MetadataViewer<P, E> {
    pub fn with_collaborators(prober: P, extractor: E) -> Self {
        Self {
            prober,
            extractor,
            probe_timeout: None,
            results: ResultSlot::new(),
        }
    }

    #[must_use]
    pub fn with_probe_timeout(mut self, probe_timeout: Option<Duration>) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    /// The slot holding the currently displayed result.
    pub const fn results(&self) -> &ResultSlot {
        &self.results
    }

    /// Inspects one file.
    ///
    /// The dimension probe and the tag extraction run concurrently and both
    /// are awaited before the result is assembled. Neither failing is fatal:
    /// a failed extraction leaves `exif`, `gps` and `iptc` absent, a failed
    /// probe leaves `basic.dimensions` as `None`.
    ///
    /// # Errors
    ///
    /// * [`ViewerError::InvalidFileType`]: the file's MIME type is not `image/*`.
    pub async fn process(&self, file: &SourceFile) -> Result<Metadata, ViewerError> {
        ensure_image(file)?;
        debug!(name = file.name(), mime_type = file.mime_type(), "processing file");

        let mut basic = BasicInfo::from_source(file);
        let (dimensions, tags) =
            tokio::join!(self.probe_dimensions(file), self.extractor.extract(file));
        basic.dimensions = dimensions;

        let (exif, gps, iptc) = match tags {
            Ok(tags) => (
                Some(get_exif_summary(&tags)),
                get_gps_info(&tags),
                get_iptc_summary(&tags),
            ),
            Err(error) => {
                warn!(name = file.name(), %error, "could not extract tag metadata");
                (None, None, None)
            }
        };

        Ok(Metadata {
            basic,
            exif,
            gps,
            iptc,
        })
    }

    /// Reads the file's attributes from disk, then [`process`](Self::process)es it.
    ///
    /// # Errors
    ///
    /// * [`ViewerError::Io`]: the file's metadata cannot be read.
    /// * [`ViewerError::InvalidFileType`]: see [`process`](Self::process).
    pub async fn open_and_process(&self, path: &Path) -> Result<Metadata, ViewerError> {
        let file = SourceFile::open(path).await?;
        self.process(&file).await
    }

    /// Processes a file and publishes the result to [`results`](Self::results).
    ///
    /// Returns `false` if another file was submitted in the meantime, in which
    /// case this result is discarded. A non-image file is rejected before a
    /// generation is taken, so it never displaces an in-flight result.
    pub async fn submit(&self, file: &SourceFile) -> Result<bool, ViewerError> {
        ensure_image(file)?;
        let generation = self.results.begin();
        let metadata = self.process(file).await?;
        Ok(self.results.publish(generation, metadata))
    }

    async fn probe_dimensions(&self, file: &SourceFile) -> Option<Dimensions> {
        let probe = self.prober.probe(file);
        let result = match self.probe_timeout {
            Some(limit) => tokio::time::timeout(limit, probe)
                .await
                .unwrap_or(Err(ProbeError::Timeout(limit))),
            None => probe.await,
        };

        match result {
            Ok(dimensions) => Some(dimensions),
            Err(error) => {
                warn!(name = file.name(), %error, "could not read image dimensions");
                None
            }
        }
    }
}

fn ensure_image(file: &SourceFile) -> Result<(), ViewerError> {
    if file.is_image() {
        Ok(())
    } else {
        Err(ViewerError::InvalidFileType(file.mime_type().to_owned()))
    }
}

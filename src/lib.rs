//! # Image Inspector
//!
//! Show what an image file carries: its basic file attributes, camera
//! metadata (EXIF), GPS coordinates and captioning metadata (IPTC).
//!
//! ## Key Features
//!
//! - **Basic Info**: Name, human readable size, MIME type, pixel dimensions and last modification time.
//! - **EXIF Summary**: Camera make and model, capture date, ISO, shutter speed, aperture, focal length, software, orientation and flash.
//! - **GPS Location**: Latitude and longitude, only when both are present.
//! - **IPTC Captions**: Title, keywords, copyright, caption and author.
//! - **Latest Wins**: Results are published to a slot where a later submission always supersedes an earlier one.
//!
//! Dimensions are read with the `image` crate and tags with `exiftool`. A file
//! whose tags cannot be decoded still gets its basic info.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use image_inspector::MetadataViewer;
//!
//! #[tokio::main]
//! async fn main() -> color_eyre::Result<()> {
//!     let viewer = MetadataViewer::builder().build()?;
//!     let metadata = viewer.open_and_process(Path::new("assets/sunset.jpg")).await?;
//!
//!     println!("{metadata}");
//!     println!("GPS: {:?}", metadata.gps);
//!
//!     Ok(())
//! }
//! ```

mod error;
pub mod features;
mod metadata_viewer;
mod render;
mod result_slot;
mod source_file;
mod structs;

pub use error::ViewerError;
pub use features::error::{ExtractionError, ProbeError};
pub use features::exif::{ExifField, ExifSummary};
pub use features::gps::GpsInfo;
pub use features::iptc::{IptcField, IptcSummary};
pub use features::size::format_size;
pub use features::tags::{TagDescriptor, TagExtractor, TagMap};
pub use features::dimensions::{DimensionProber, ImageProber};
pub use features::exiftool::ExifToolExtractor;
pub use metadata_viewer::MetadataViewer;
pub use result_slot::{Generation, Published, ResultSlot};
pub use source_file::SourceFile;
pub use structs::{BasicInfo, Dimensions, Metadata};

use crate::features::exif::ExifSummary;
use crate::features::gps::GpsInfo;
use crate::features::iptc::IptcSummary;
use crate::features::size::format_size;
use crate::source_file::SourceFile;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel size of an image, shown as `"WxH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<Dimensions> for String {
    fn from(dimensions: Dimensions) -> Self {
        dimensions.to_string()
    }
}

impl FromStr for Dimensions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once('x')
            .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
        Ok(Self {
            width: width.parse().map_err(|_| format!("bad width in {s:?}"))?,
            height: height.parse().map_err(|_| format!("bad height in {s:?}"))?,
        })
    }
}

impl TryFrom<String> for Dimensions {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// File attributes, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    /// Human readable size, e.g. `"2.35 MB"`.
    pub size: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// `None` only when the dimension probe failed.
    pub dimensions: Option<Dimensions>,
    pub last_modified: String,
}

impl BasicInfo {
    /// Derives everything except `dimensions`, which is filled in by the probe.
    pub fn from_source(file: &SourceFile) -> Self {
        Self {
            name: file.name().to_owned(),
            size: format_size(file.size()),
            mime_type: file.mime_type().to_owned(),
            dimensions: None,
            last_modified: file
                .last_modified()
                .with_timezone(&Local)
                .format("%d/%m/%Y, %H:%M:%S")
                .to_string(),
        }
    }
}

/// Everything the inspector reports for one file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    pub basic: BasicInfo,
    /// Present whenever tag extraction succeeded, even with no entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif: Option<ExifSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps: Option<GpsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iptc: Option<IptcSummary>,
}

use crate::features::error::ExtractionError;
use crate::features::tags::{TagDescriptor, TagExtractor, TagMap};
use crate::source_file::SourceFile;
use exiftool::{ExifTool, ExifToolError};
use parking_lot::Mutex;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Canonical tag name, followed by the exiftool names that can provide it.
/// The first one present wins.
const TAG_ALIASES: &[(&str, &[&str])] = &[
    ("ISOSpeedRatings", &["ISO", "ISOSpeed"]),
    ("ObjectName", &["ObjectName", "Title"]),
    ("Copyright", &["CopyrightNotice", "Copyright", "Rights"]),
    ("Caption", &["Caption-Abstract", "Description", "ImageDescription"]),
    ("Author", &["By-line", "Artist", "Creator"]),
];

/// [`TagExtractor`] backed by a persistent `exiftool` process.
///
/// Tags are read with exiftool's print conversion, so values arrive as the
/// human readable descriptions (`"1/250"`, `"Auto, Did not fire"`).
#[derive(Clone)]
pub struct ExifToolExtractor {
    exiftool: Arc<Mutex<ExifTool>>,
}

impl ExifToolExtractor {
    /// Starts `exiftool` from the given executable, or from `PATH`.
    ///
    /// # Errors
    ///
    /// Fails if the executable cannot be found or does not start.
    pub fn new(exiftool_path: Option<&Path>) -> Result<Self, ExifToolError> {
        let exiftool = match exiftool_path {
            Some(path) => ExifTool::with_executable(path)?,
            None => ExifTool::new()?,
        };
        Ok(Self {
            exiftool: Arc::new(Mutex::new(exiftool)),
        })
    }
}

impl TagExtractor for ExifToolExtractor {
    async fn extract(&self, file: &SourceFile) -> Result<TagMap, ExtractionError> {
        let exiftool = Arc::clone(&self.exiftool);
        let path = file.path().to_path_buf();
        let output = tokio::task::spawn_blocking(move || exiftool.lock().json(&path, &[]))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))??;

        tags_from_exiftool_json(&output)
    }
}

/// Turns one file's exiftool JSON object into a [`TagMap`].
///
/// Every key is kept under its exiftool name. Canonical names from
/// [`TAG_ALIASES`] are added when the file does not already carry them.
pub fn tags_from_exiftool_json(output: &Value) -> Result<TagMap, ExtractionError> {
    let object = output.as_object().ok_or_else(|| {
        ExtractionError::Unsupported("exiftool output is not an object".to_string())
    })?;

    if let Some(error) = object.get("Error").and_then(Value::as_str) {
        return Err(ExtractionError::Unsupported(error.to_string()));
    }

    let mut tags: TagMap = object
        .iter()
        .map(|(name, value)| (name.as_str(), descriptor(value)))
        .collect();

    for (canonical, aliases) in TAG_ALIASES {
        if tags.contains(canonical) {
            continue;
        }
        if let Some(value) = aliases.iter().find_map(|alias| object.get(*alias)) {
            tags.insert(*canonical, descriptor(value));
        }
    }

    Ok(tags)
}

fn descriptor(value: &Value) -> TagDescriptor {
    TagDescriptor {
        description: describe(value),
    }
}

fn describe(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(describe).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

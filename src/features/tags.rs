use crate::features::error::ExtractionError;
use crate::source_file::SourceFile;
use std::collections::HashMap;
use std::future::Future;

/// A decoded tag. Only the human readable description is ever read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDescriptor {
    pub description: Option<String>,
}

impl TagDescriptor {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

/// Tag name to descriptor. Tags missing from the file have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap(HashMap<String, TagDescriptor>);

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&TagDescriptor> {
        self.0.get(name)
    }

    /// The description of `name`, if the tag exists and has one.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.get(name)?.description.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, descriptor: TagDescriptor) {
        self.0.insert(name.into(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TagDescriptor)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, TagDescriptor)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Decodes the tags embedded in a file.
///
/// A failure covers the whole extraction; an absent tag is not an error.
pub trait TagExtractor {
    fn extract(
        &self,
        file: &SourceFile,
    ) -> impl Future<Output = Result<TagMap, ExtractionError>> + Send;
}

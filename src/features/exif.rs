use crate::features::tags::TagMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The camera fields shown in the EXIF section, in display order.
///
/// Serialized under their Spanish display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum ExifField {
    #[serde(rename = "Marca")]
    Make,
    #[serde(rename = "Modelo")]
    Model,
    #[serde(rename = "Fecha de captura")]
    DateTimeOriginal,
    #[serde(rename = "Velocidad ISO")]
    Iso,
    #[serde(rename = "Velocidad de obturación")]
    ExposureTime,
    #[serde(rename = "Apertura")]
    FNumber,
    #[serde(rename = "Distancia focal")]
    FocalLength,
    #[serde(rename = "Software")]
    Software,
    #[serde(rename = "Orientación")]
    Orientation,
    #[serde(rename = "Flash")]
    Flash,
}

impl ExifField {
    pub const ALL: [Self; 10] = [
        Self::Make,
        Self::Model,
        Self::DateTimeOriginal,
        Self::Iso,
        Self::ExposureTime,
        Self::FNumber,
        Self::FocalLength,
        Self::Software,
        Self::Orientation,
        Self::Flash,
    ];

    /// Canonical tag name looked up in the [`TagMap`].
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Make => "Make",
            Self::Model => "Model",
            Self::DateTimeOriginal => "DateTimeOriginal",
            Self::Iso => "ISOSpeedRatings",
            Self::ExposureTime => "ExposureTime",
            Self::FNumber => "FNumber",
            Self::FocalLength => "FocalLength",
            Self::Software => "Software",
            Self::Orientation => "Orientation",
            Self::Flash => "Flash",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Make => "Marca",
            Self::Model => "Modelo",
            Self::DateTimeOriginal => "Fecha de captura",
            Self::Iso => "Velocidad ISO",
            Self::ExposureTime => "Velocidad de obturación",
            Self::FNumber => "Apertura",
            Self::FocalLength => "Distancia focal",
            Self::Software => "Software",
            Self::Orientation => "Orientación",
            Self::Flash => "Flash",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExifSummary(BTreeMap<ExifField, String>);

impl ExifSummary {
    pub fn get(&self, field: ExifField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = ExifField> + '_ {
        self.0.keys().copied()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ExifField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Collects the camera fields whose tag has a description. Missing tags are left out.
pub fn get_exif_summary(tags: &TagMap) -> ExifSummary {
    ExifSummary(
        ExifField::ALL
            .into_iter()
            .filter_map(|field| {
                tags.description(field.tag_name())
                    .map(|description| (field, description.to_owned()))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tags::TagDescriptor;
    use serde_json::json;

    #[test]
    fn test_only_present_tags_are_included() {
        let tags: TagMap = [
            ("Make", TagDescriptor::new("Google")),
            ("Model", TagDescriptor::new("Pixel 7 Pro")),
            ("ImageWidth", TagDescriptor::new("4080")),
        ]
        .into_iter()
        .collect();

        let summary = get_exif_summary(&tags);
        assert_eq!(
            summary.fields().collect::<Vec<_>>(),
            vec![ExifField::Make, ExifField::Model]
        );
        assert_eq!(summary.get(ExifField::Make), Some("Google"));
        assert_eq!(summary.get(ExifField::Model), Some("Pixel 7 Pro"));
        assert_eq!(summary.get(ExifField::Flash), None);
    }

    #[test]
    fn test_tag_without_description_is_omitted() {
        let tags: TagMap = [("Software", TagDescriptor::default())].into_iter().collect();
        assert!(get_exif_summary(&tags).is_empty());
    }

    #[test]
    fn test_full_summary_keeps_canonical_order() {
        let tags: TagMap = ExifField::ALL
            .into_iter()
            .map(|field| (field.tag_name(), TagDescriptor::new(field.label())))
            .collect();

        let summary = get_exif_summary(&tags);
        assert_eq!(summary.len(), 10);
        assert_eq!(summary.fields().collect::<Vec<_>>(), ExifField::ALL.to_vec());
        assert_eq!(summary.get(ExifField::Iso), Some("Velocidad ISO"));
    }

    #[test]
    fn test_serializes_with_display_labels() {
        let tags: TagMap = [
            ("ISOSpeedRatings", TagDescriptor::new("100")),
            ("ExposureTime", TagDescriptor::new("1/250")),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(get_exif_summary(&tags)).unwrap();
        assert_eq!(
            value,
            json!({
                "Velocidad ISO": "100",
                "Velocidad de obturación": "1/250"
            })
        );
    }

    #[test]
    fn test_labels_match_serde_names() {
        for field in ExifField::ALL {
            let value = serde_json::to_value(field).unwrap();
            assert_eq!(value, json!(field.label()));
        }
    }
}

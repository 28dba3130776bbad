use crate::features::tags::TagMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Captioning and rights fields shown in the IPTC section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum IptcField {
    ObjectName,
    Keywords,
    Copyright,
    Caption,
    Author,
}

impl IptcField {
    pub const ALL: [Self; 5] = [
        Self::ObjectName,
        Self::Keywords,
        Self::Copyright,
        Self::Caption,
        Self::Author,
    ];

    /// Tag name looked up in the [`TagMap`], also used as the display label.
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::ObjectName => "ObjectName",
            Self::Keywords => "Keywords",
            Self::Copyright => "Copyright",
            Self::Caption => "Caption",
            Self::Author => "Author",
        }
    }
}

/// Never empty when attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct IptcSummary(BTreeMap<IptcField, String>);

impl IptcSummary {
    pub fn get(&self, field: IptcField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IptcField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Collects the whitelisted IPTC fields. `None` when none of them is present.
pub fn get_iptc_summary(tags: &TagMap) -> Option<IptcSummary> {
    let entries: BTreeMap<_, _> = IptcField::ALL
        .into_iter()
        .filter_map(|field| {
            tags.description(field.tag_name())
                .map(|description| (field, description.to_owned()))
        })
        .collect();

    (!entries.is_empty()).then_some(IptcSummary(entries))
}

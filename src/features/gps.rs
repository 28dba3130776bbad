use crate::features::tags::TagMap;
use serde::{Deserialize, Serialize};

/// Capture location, as the decoder describes it (e.g. `52° 22' 45.08" N`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsInfo {
    pub latitude: String,
    pub longitude: String,
}

/// Returns `None` unless both coordinates are described. A lone latitude or
/// longitude is not a location.
pub fn get_gps_info(tags: &TagMap) -> Option<GpsInfo> {
    let (Some(latitude), Some(longitude)) = (
        tags.description("GPSLatitude"),
        tags.description("GPSLongitude"),
    ) else {
        return None;
    };

    Some(GpsInfo {
        latitude: latitude.to_owned(),
        longitude: longitude.to_owned(),
    })
}

pub mod dimensions;
pub mod error;
pub mod exif;
pub mod exiftool;
pub mod gps;
pub mod iptc;
pub mod size;
pub mod tags;

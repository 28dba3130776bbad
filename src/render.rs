use crate::structs::Metadata;
use std::fmt;

const UNKNOWN_DIMENSIONS: &str = "desconocidas";

/// Renders the result as the labelled listing shown to the user. Absent
/// sections are skipped.
///
/// EXIF and IPTC entries are listed in canonical tag order, not sorted by
/// label. Their order carries no meaning.
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let basic = &self.basic;
        writeln!(f, "Metadatos Básicos:")?;
        writeln!(f, "  Nombre: {}", basic.name)?;
        writeln!(f, "  Tamaño: {}", basic.size)?;
        writeln!(f, "  Tipo: {}", basic.mime_type)?;
        match basic.dimensions {
            Some(dimensions) => writeln!(f, "  Dimensiones: {dimensions}")?,
            None => writeln!(f, "  Dimensiones: {UNKNOWN_DIMENSIONS}")?,
        }
        writeln!(f, "  Última modificación: {}", basic.last_modified)?;

        if let Some(exif) = &self.exif {
            writeln!(f, "\nInformación EXIF:")?;
            for (field, value) in exif.iter() {
                writeln!(f, "  {}: {value}", field.label())?;
            }
        }

        if let Some(gps) = &self.gps {
            writeln!(f, "\nInformación GPS:")?;
            writeln!(f, "  Latitud: {}", gps.latitude)?;
            writeln!(f, "  Longitud: {}", gps.longitude)?;
        }

        if let Some(iptc) = &self.iptc {
            writeln!(f, "\nInformación IPTC:")?;
            for (field, value) in iptc.iter() {
                writeln!(f, "  {}: {value}", field.tag_name())?;
            }
        }

        Ok(())
    }
}

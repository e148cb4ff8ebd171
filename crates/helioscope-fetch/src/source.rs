//! Image source descriptors
//!
//! A source descriptor names a fetchable endpoint and its expected payload
//! format. The fallback order is the order of the table; sources are
//! capability-equivalent, so the first success wins. Two built-in tables
//! ship with the crate and callers may supply their own (the descriptors
//! round-trip through serde).

use serde::{Deserialize, Serialize};

/// Expected payload format of an image endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// JPEG payload (tags `jpg` / `jpeg`)
    #[serde(alias = "jpg")]
    Jpeg,
    /// PNG payload
    Png,
}

impl PayloadFormat {
    /// Parse a format tag, accepting `jpg`, `jpeg` and `png`
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Canonical tag
    #[inline]
    #[must_use]
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Matching codec format
    #[inline]
    #[must_use]
    pub fn as_image_format(&self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

/// A fetchable image endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Display name, also used in archive filenames
    pub name: String,
    /// Endpoint URL
    pub url: String,
    /// Expected payload format
    pub format: PayloadFormat,
}

impl SourceDescriptor {
    /// Create a descriptor
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        format: PayloadFormat,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            format,
        }
    }
}

/// SOHO realtime EIT feeds plus the SDO HMI continuum, the default table
#[must_use]
pub fn soho_sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new(
            "SOHO_EIT_195",
            "https://soho.nascom.nasa.gov/data/realtime/eit_195/512/latest.jpg",
            PayloadFormat::Jpeg,
        ),
        SourceDescriptor::new(
            "SOHO_EIT_171",
            "https://soho.nascom.nasa.gov/data/realtime/eit_171/512/latest.jpg",
            PayloadFormat::Jpeg,
        ),
        SourceDescriptor::new(
            "SOHO_EIT_304",
            "https://soho.nascom.nasa.gov/data/realtime/eit_304/512/latest.jpg",
            PayloadFormat::Jpeg,
        ),
        SourceDescriptor::new(
            "NASA_SDO_HMI",
            "https://sdo.gsfc.nasa.gov/assets/img/latest/latest_1024_hmiic.jpg",
            PayloadFormat::Jpeg,
        ),
    ]
}

/// SDO HMI feeds plus the NOAA SUVI 171 PNG, the alternate table
#[must_use]
pub fn sdo_sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new(
            "NASA SDO HMI Continuum",
            "https://sdo.gsfc.nasa.gov/assets/img/latest/latest_1024_hmiic.jpg",
            PayloadFormat::Jpeg,
        ),
        SourceDescriptor::new(
            "NASA SDO HMI Magnetogram",
            "https://sdo.gsfc.nasa.gov/assets/img/latest/latest_1024_hmib.jpg",
            PayloadFormat::Jpeg,
        ),
        SourceDescriptor::new(
            "SpaceWeatherLive HMI",
            "https://services.swpc.noaa.gov/images/animations/suvi/primary/171/latest.png",
            PayloadFormat::Png,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_keep_their_order() {
        let soho = soho_sources();
        assert_eq!(soho.len(), 4);
        assert_eq!(soho[0].name, "SOHO_EIT_195");
        assert_eq!(soho[3].name, "NASA_SDO_HMI");

        let sdo = sdo_sources();
        assert_eq!(sdo.len(), 3);
        assert_eq!(sdo[2].format, PayloadFormat::Png);
    }

    #[test]
    fn format_tags() {
        assert_eq!(PayloadFormat::from_tag("jpg"), Some(PayloadFormat::Jpeg));
        assert_eq!(PayloadFormat::from_tag("JPEG"), Some(PayloadFormat::Jpeg));
        assert_eq!(PayloadFormat::from_tag("png"), Some(PayloadFormat::Png));
        assert_eq!(PayloadFormat::from_tag("webp"), None);
    }

    #[test]
    fn descriptor_table_round_trips_through_serde() {
        let table = soho_sources();
        let json = serde_json::to_string(&table).unwrap();
        let back: Vec<SourceDescriptor> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn swapped_table_deserializes_with_jpg_alias() {
        let json = r#"[
            {"name": "GOES SUVI 304", "url": "https://example.org/latest.jpg", "format": "jpg"}
        ]"#;
        let table: Vec<SourceDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(table[0].format, PayloadFormat::Jpeg);
    }
}

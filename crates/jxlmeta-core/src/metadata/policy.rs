//! Capture policy
//!
//! Decides which metadata boxes a scan keeps. Size limits apply to the
//! box as stored, so a compressed box is measured before decompression.

use serde::{Deserialize, Serialize};

use super::box_type::MetadataBoxType;
use crate::error::{Error, Result};

/// Default EXIF ceiling: 1 MiB
pub const DEFAULT_EXIF_SIZE_LIMIT: usize = 1 << 20;
/// Default XML ceiling: 16 MiB
pub const DEFAULT_XML_SIZE_LIMIT: usize = 16 << 20;
/// Default JUMBF ceiling: 16 MiB
pub const DEFAULT_JUMBF_SIZE_LIMIT: usize = 16 << 20;

/// Per-type capture flags and size ceilings
///
/// Deserializes from partial documents; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturePolicy {
    pub capture_exif: bool,
    pub capture_xml: bool,
    pub capture_jumbf: bool,
    pub exif_size_limit: usize,
    pub xml_size_limit: usize,
    pub jumbf_size_limit: usize,
}

impl Default for CapturePolicy {
    /// Capture everything
    fn default() -> Self {
        Self {
            capture_exif: true,
            capture_xml: true,
            capture_jumbf: true,
            exif_size_limit: DEFAULT_EXIF_SIZE_LIMIT,
            xml_size_limit: DEFAULT_XML_SIZE_LIMIT,
            jumbf_size_limit: DEFAULT_JUMBF_SIZE_LIMIT,
        }
    }
}

impl CapturePolicy {
    /// Capture nothing
    pub fn no_capture() -> Self {
        Self {
            capture_exif: false,
            capture_xml: false,
            capture_jumbf: false,
            ..Self::default()
        }
    }

    /// Capture EXIF boxes only
    pub fn exif_only() -> Self {
        Self {
            capture_exif: true,
            ..Self::no_capture()
        }
    }

    /// Parse a JSON policy document
    ///
    /// The document must be an object. Serde would otherwise accept an
    /// array as a sequence of fields, and an empty one as the default.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::Config(serde::de::Error::custom(
                "capture policy must be a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn captures(&self, box_type: MetadataBoxType) -> bool {
        match box_type {
            MetadataBoxType::Exif => self.capture_exif,
            MetadataBoxType::Xml => self.capture_xml,
            MetadataBoxType::Jumbf => self.capture_jumbf,
        }
    }

    pub fn size_limit(&self, box_type: MetadataBoxType) -> usize {
        match box_type {
            MetadataBoxType::Exif => self.exif_size_limit,
            MetadataBoxType::Xml => self.xml_size_limit,
            MetadataBoxType::Jumbf => self.jumbf_size_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let all = CapturePolicy::default();
        assert!(MetadataBoxType::ALL.iter().all(|&t| all.captures(t)));

        let none = CapturePolicy::no_capture();
        assert!(MetadataBoxType::ALL.iter().all(|&t| !none.captures(t)));

        let exif = CapturePolicy::exif_only();
        assert!(exif.captures(MetadataBoxType::Exif));
        assert!(!exif.captures(MetadataBoxType::Xml));
        assert!(!exif.captures(MetadataBoxType::Jumbf));
        assert_eq!(exif.size_limit(MetadataBoxType::Exif), DEFAULT_EXIF_SIZE_LIMIT);
    }

    #[test]
    fn test_partial_json() {
        let policy = CapturePolicy::from_json(r#"{"capture_xml": false, "exif_size_limit": 50}"#)
            .unwrap();
        assert!(policy.capture_exif);
        assert!(!policy.capture_xml);
        assert_eq!(policy.exif_size_limit, 50);
        assert_eq!(policy.jumbf_size_limit, DEFAULT_JUMBF_SIZE_LIMIT);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            CapturePolicy::from_json(r#"{"capture_exif": "yes"}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_non_object_documents_rejected() {
        for doc in ["[]", "[true, true, false]", "null", "42", r#""policy""#] {
            assert!(
                matches!(CapturePolicy::from_json(doc), Err(Error::Config(_))),
                "{} accepted",
                doc
            );
        }
    }
}

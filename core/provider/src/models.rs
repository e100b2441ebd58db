//! Provider data models

use serde::{Deserialize, Serialize};

/// Available stream URLs per quality tier.
///
/// Absent tiers mean the source does not offer them, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct QualitySet {
    pub fhd: Option<String>,
    pub hd: Option<String>,
    pub sd: Option<String>,
}

impl QualitySet {
    /// The best available URL, preferring fhd over hd over sd
    pub fn preferred(&self) -> Option<&str> {
        self.fhd
            .as_deref()
            .or(self.hd.as_deref())
            .or(self.sd.as_deref())
    }

    /// True when no tier carries a URL
    pub fn is_empty(&self) -> bool {
        self.fhd.is_none() && self.hd.is_none() && self.sd.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_quality_order() {
        // Full set: fhd wins
        let full = QualitySet {
            fhd: Some("1080.m3u8".to_string()),
            hd: Some("720.m3u8".to_string()),
            sd: Some("480.m3u8".to_string()),
        };
        assert_eq!(full.preferred(), Some("1080.m3u8"));

        // fhd absent: hd wins
        let partial = QualitySet {
            fhd: None,
            hd: Some("720.m3u8".to_string()),
            sd: Some("480.m3u8".to_string()),
        };
        assert_eq!(partial.preferred(), Some("720.m3u8"));

        // Single-tier set: the only tier wins, nothing is fabricated
        let legacy = QualitySet {
            fhd: None,
            hd: None,
            sd: Some("480.mp4".to_string()),
        };
        assert_eq!(legacy.preferred(), Some("480.mp4"));
        assert!(!legacy.is_empty());

        // Empty set
        assert!(QualitySet::default().is_empty());
        assert_eq!(QualitySet::default().preferred(), None);
    }
}

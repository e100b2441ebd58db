//! anicli bridge data models

use serde::Deserialize;

/// Video link payload of the bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoLink {
    #[serde(default)]
    pub url: Option<String>,
}

/// Quality listing payload of the bridge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualitiesPayload {
    #[serde(default)]
    pub qualities: QualityLinks,
}

/// Absolute stream URLs per quality tier. The bridge frequently offers
/// only a single tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualityLinks {
    #[serde(default)]
    pub fhd: Option<String>,
    #[serde(default)]
    pub hd: Option<String>,
    #[serde(default)]
    pub sd: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payloads() {
        let link: VideoLink =
            serde_json::from_str(r#"{"url": "https://legacy.example/42/3.mp4"}"#).unwrap();
        assert_eq!(link.url.as_deref(), Some("https://legacy.example/42/3.mp4"));

        // Bridge answers with an empty object when it has nothing
        let empty: VideoLink = serde_json::from_str("{}").unwrap();
        assert!(empty.url.is_none());

        // Single-tier quality payload
        let payload: QualitiesPayload =
            serde_json::from_str(r#"{"qualities": {"sd": "https://legacy.example/42/3_480.mp4"}}"#)
                .unwrap();
        assert!(payload.qualities.fhd.is_none());
        assert!(payload.qualities.hd.is_none());
        assert_eq!(
            payload.qualities.sd.as_deref(),
            Some("https://legacy.example/42/3_480.mp4")
        );
    }
}

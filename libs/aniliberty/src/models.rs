//! AniLiberty API data models

use serde::Deserialize;

/// A release as returned by catalog search and release detail lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: i64,
    #[serde(default)]
    pub name: Option<ReleaseName>,
    #[serde(default)]
    pub alias: Option<String>,
    /// Present only when the release was fetched with `include=episodes`.
    #[serde(default)]
    pub episodes: Option<Vec<Episode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseName {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
}

/// One episode row of a release.
///
/// The API has shipped both `hls_*` and the older `video_*` field names
/// for stream URLs, and `ordinal` has appeared as `number` in older
/// payloads. Ordinals are fractional to cover .5 recap episodes.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: String,
    #[serde(default, alias = "number")]
    pub ordinal: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "video_1080")]
    pub hls_1080: Option<String>,
    #[serde(default, alias = "video_720")]
    pub hls_720: Option<String>,
    #[serde(default, alias = "video_480")]
    pub hls_480: Option<String>,
}

impl Episode {
    /// True when at least one stream URL is present on this row.
    pub fn has_streams(&self) -> bool {
        self.hls_1080.is_some() || self.hls_720.is_some() || self.hls_480.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_episode() {
        // Current field names
        let episode: Episode = serde_json::from_str(
            r#"{
                "id": "0a1b2c3d",
                "ordinal": 3,
                "name": "Third Episode",
                "hls_1080": "https://cache.aniliberty.top/videos/3/1080.m3u8",
                "hls_480": "https://cache.aniliberty.top/videos/3/480.m3u8"
            }"#,
        )
        .unwrap();
        assert_eq!(episode.ordinal, 3.0);
        assert!(episode.has_streams());
        assert!(episode.hls_720.is_none());

        // Legacy field names
        let legacy: Episode = serde_json::from_str(
            r#"{"id": "x", "number": 12.5, "video_720": "https://example.com/720.m3u8"}"#,
        )
        .unwrap();
        assert_eq!(legacy.ordinal, 12.5);
        assert_eq!(
            legacy.hls_720.as_deref(),
            Some("https://example.com/720.m3u8")
        );

        // No stream URLs at all
        let bare: Episode = serde_json::from_str(r#"{"id": "y", "ordinal": 1}"#).unwrap();
        assert!(!bare.has_streams());
    }

    #[test]
    fn test_parse_release() {
        let release: Release = serde_json::from_str(
            r#"{
                "id": 42,
                "name": {"main": "Тестовый тайтл", "english": "Test Title"},
                "alias": "test-title",
                "episodes": [{"id": "a", "ordinal": 1}, {"id": "b", "ordinal": 2}]
            }"#,
        )
        .unwrap();
        assert_eq!(release.id, 42);
        assert_eq!(release.episodes.map(|e| e.len()), Some(2));

        // Search results omit episodes entirely
        let summary: Release = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert!(summary.episodes.is_none());
    }
}

//! AniLibria API data models

use std::collections::HashMap;

use serde::Deserialize;

/// Title payload of the v3 `title` endpoint, reduced to what episode
/// resolution needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Title {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub player: Option<Player>,
}

/// Per-title playback data: episodes keyed by textual ordinal ("1", "2", ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub list: HashMap<String, PlayerEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEpisode {
    #[serde(default)]
    pub episode: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hls: Option<Hls>,
}

/// Root-relative HLS playlist paths per quality tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hls {
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
    fn test_parse_title() {
        let title: Title = serde_json::from_str(
            r#"{
                "id": 9000,
                "code": "some-title",
                "player": {
                    "list": {
                        "1": {"episode": 1, "hls": {"fhd": "/videos/9000/1/1080.m3u8", "hd": "/videos/9000/1/720.m3u8", "sd": "/videos/9000/1/480.m3u8"}},
                        "2": {"episode": 2, "hls": {"sd": "/videos/9000/2/480.m3u8"}}
                    }
                }
            }"#,
        )
        .unwrap();

        let player = title.player.unwrap();
        assert_eq!(player.list.len(), 2);

        let first = player.list.get("1").unwrap();
        let hls = first.hls.as_ref().unwrap();
        assert_eq!(hls.fhd.as_deref(), Some("/videos/9000/1/1080.m3u8"));

        let second = player.list.get("2").unwrap();
        let hls = second.hls.as_ref().unwrap();
        assert!(hls.fhd.is_none());
        assert_eq!(hls.sd.as_deref(), Some("/videos/9000/2/480.m3u8"));

        // Titles without playback data parse fine
        let bare: Title = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(bare.player.is_none());
    }
}

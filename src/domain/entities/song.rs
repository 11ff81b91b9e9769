use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a search result.
///
/// Only the columns shown in the results table are typed; anything else the
/// server sends is kept in `extra` so the list can be exported unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "annId", default, skip_serializing_if = "Option::is_none")]
    pub ann_id: Option<u64>,
    #[serde(rename = "annSongId", default, skip_serializing_if = "Option::is_none")]
    pub ann_song_id: Option<u64>,
    #[serde(rename = "animeENName", default, skip_serializing_if = "Option::is_none")]
    pub anime_en_name: Option<String>,
    #[serde(rename = "animeJPName", default, skip_serializing_if = "Option::is_none")]
    pub anime_jp_name: Option<String>,
    #[serde(rename = "animeVintage", default, skip_serializing_if = "Option::is_none")]
    pub anime_vintage: Option<String>,
    #[serde(rename = "animeType", default, skip_serializing_if = "Option::is_none")]
    pub anime_type: Option<String>,
    #[serde(rename = "songType", default, skip_serializing_if = "Option::is_none")]
    pub song_type: Option<String>,
    #[serde(rename = "songName", default, skip_serializing_if = "Option::is_none")]
    pub song_name: Option<String>,
    #[serde(rename = "songArtist", default, skip_serializing_if = "Option::is_none")]
    pub song_artist: Option<String>,
    #[serde(rename = "songComposer", default, skip_serializing_if = "Option::is_none")]
    pub song_composer: Option<String>,
    #[serde(rename = "songArranger", default, skip_serializing_if = "Option::is_none")]
    pub song_arranger: Option<String>,
    #[serde(rename = "HQ", default, skip_serializing_if = "Option::is_none")]
    pub hq: Option<String>,
    #[serde(rename = "MQ", default, skip_serializing_if = "Option::is_none")]
    pub mq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Song {
    /// English title first, Japanese title as a fallback.
    pub fn display_anime_name(&self) -> &str {
        self.anime_en_name
            .as_deref()
            .or(self.anime_jp_name.as_deref())
            .unwrap_or("")
    }

    pub fn best_media_link(&self) -> Option<&str> {
        self.hq
            .as_deref()
            .or(self.mq.as_deref())
            .or(self.audio.as_deref())
    }
}

pub type SongList = Vec<Song>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_pass_through() {
        let raw = json!({
            "annId": 1234,
            "animeENName": "My Neighbor Totoro",
            "animeJPName": "Tonari no Totoro",
            "songType": "Ending 1",
            "songName": "Tonari no Totoro",
            "songArtist": "Azumi Inoue",
            "songDifficulty": 42.5,
            "artists": [{"id": 1, "names": ["Azumi Inoue"]}],
            "audio": null
        });

        let song: Song = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(song.ann_id, Some(1234));
        assert_eq!(song.display_anime_name(), "My Neighbor Totoro");
        assert!(song.extra.contains_key("songDifficulty"));
        assert!(song.extra.contains_key("artists"));

        let back = serde_json::to_value(&song).unwrap();
        assert_eq!(back["songDifficulty"], raw["songDifficulty"]);
        assert_eq!(back["artists"], raw["artists"]);
    }

    #[test]
    fn media_link_prefers_high_quality() {
        let song = Song {
            mq: Some("https://example.invalid/mq.webm".to_string()),
            audio: Some("https://example.invalid/a.mp3".to_string()),
            ..Song::default()
        };
        assert_eq!(song.best_media_link(), Some("https://example.invalid/mq.webm"));
        assert_eq!(Song::default().best_media_link(), None);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSearchFilter {
    pub search: String,
    pub ignore_special_character: bool,
    pub partial_match: bool,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSearchFilter {
    #[serde(flatten)]
    pub text: TextSearchFilter,
    pub group_granularity: u32,
    pub max_other_artist: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerSearchFilter {
    #[serde(flatten)]
    pub text: TextSearchFilter,
    pub arrangement: bool,
}

/// JSON body posted to the search endpoint.
///
/// An absent sub-filter is left out of the payload entirely; when all four
/// are absent the server matches every song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime_search_filter: Option<TextSearchFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_name_search_filter: Option<TextSearchFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_search_filter: Option<ArtistSearchFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer_search_filter: Option<ComposerSearchFilter>,
    pub and_logic: bool,
    pub ignore_duplicate: bool,
    pub opening_filter: bool,
    pub ending_filter: bool,
    pub insert_filter: bool,
}

impl RequestBody {
    pub fn has_sub_filters(&self) -> bool {
        self.anime_search_filter.is_some()
            || self.song_name_search_filter.is_some()
            || self.artist_search_filter.is_some()
            || self.composer_search_filter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_sub_filters_are_omitted_from_json() {
        let body = RequestBody {
            anime_search_filter: None,
            song_name_search_filter: None,
            artist_search_filter: None,
            composer_search_filter: None,
            and_logic: false,
            ignore_duplicate: false,
            opening_filter: true,
            ending_filter: true,
            insert_filter: false,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "and_logic": false,
                "ignore_duplicate": false,
                "opening_filter": true,
                "ending_filter": true,
                "insert_filter": false,
            })
        );
        assert!(!body.has_sub_filters());
    }

    #[test]
    fn artist_and_composer_extras_sit_next_to_text_fields() {
        let text = TextSearchFilter {
            search: "Kajiura".to_string(),
            ignore_special_character: true,
            partial_match: false,
            case_sensitive: true,
        };
        let body = RequestBody {
            anime_search_filter: None,
            song_name_search_filter: None,
            artist_search_filter: Some(ArtistSearchFilter {
                text: text.clone(),
                group_granularity: 2,
                max_other_artist: 99,
            }),
            composer_search_filter: Some(ComposerSearchFilter {
                text,
                arrangement: true,
            }),
            and_logic: true,
            ignore_duplicate: true,
            opening_filter: true,
            ending_filter: true,
            insert_filter: true,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value["artist_search_filter"],
            json!({
                "search": "Kajiura",
                "ignore_special_character": true,
                "partial_match": false,
                "case_sensitive": true,
                "group_granularity": 2,
                "max_other_artist": 99,
            })
        );
        assert_eq!(value["composer_search_filter"]["arrangement"], json!(true));
        assert_eq!(value["composer_search_filter"]["search"], json!("Kajiura"));
    }
}

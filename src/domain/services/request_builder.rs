use crate::domain::entities::search_filters::{DEFAULT_MAXIMUM_RANDOMS, DEFAULT_MINIMAL_MEMBERS};
use crate::domain::entities::{
    ArtistSearchFilter, ComposerSearchFilter, MatchOptions, RequestBody, SearchFilters,
    TextSearchFilter,
};
use crate::domain::errors::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Ranked,
    Advanced,
    Simple,
}

impl SearchMode {
    pub fn select(filters: &SearchFilters, ranked: bool) -> Self {
        if ranked {
            SearchMode::Ranked
        } else if filters.show_advanced_filters {
            SearchMode::Advanced
        } else {
            SearchMode::Simple
        }
    }
}

pub fn build_request_body(
    filters: &SearchFilters,
    ranked: bool,
) -> Result<RequestBody, SearchError> {
    let mut body = RequestBody {
        anime_search_filter: None,
        song_name_search_filter: None,
        artist_search_filter: None,
        composer_search_filter: None,
        and_logic: filters.and_logic(),
        ignore_duplicate: filters.ignore_duplicate,
        opening_filter: filters.show_openings,
        ending_filter: filters.show_endings,
        insert_filter: filters.show_inserts,
    };

    match SearchMode::select(filters, ranked) {
        SearchMode::Ranked => {
            body.anime_search_filter = non_empty(&filters.anime_filter)
                .map(|search| text_filter(search, filters.anime));
        }
        SearchMode::Advanced => {
            body.anime_search_filter = non_empty(&filters.anime_filter)
                .map(|search| text_filter(search, filters.anime));
            body.song_name_search_filter = non_empty(&filters.song_name_filter)
                .map(|search| text_filter(search, filters.song_name));
            body.artist_search_filter = non_empty(&filters.artist_filter)
                .map(|search| artist_filter(search, filters))
                .transpose()?;
            body.composer_search_filter = non_empty(&filters.composer_filter)
                .map(|search| composer_filter(search, filters));
        }
        SearchMode::Simple => {
            if let Some(search) = non_empty(&filters.main_filter) {
                body.anime_search_filter = Some(text_filter(search, filters.anime));
                body.song_name_search_filter = Some(text_filter(search, filters.song_name));
                body.artist_search_filter = Some(artist_filter(search, filters)?);
                body.composer_search_filter = Some(composer_filter(search, filters));
            }
        }
    }

    Ok(body)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn text_filter(search: &str, options: MatchOptions) -> TextSearchFilter {
    TextSearchFilter {
        search: search.to_string(),
        ignore_special_character: options.ignore_special_characters,
        partial_match: options.partial_match,
        case_sensitive: options.case_sensitive,
    }
}

fn artist_filter(search: &str, filters: &SearchFilters) -> Result<ArtistSearchFilter, SearchError> {
    Ok(ArtistSearchFilter {
        text: text_filter(search, filters.artist),
        group_granularity: parse_limit(
            "minimal members",
            &filters.minimal_members_filter,
            DEFAULT_MINIMAL_MEMBERS,
        )?,
        max_other_artist: parse_limit(
            "maximum other artists",
            &filters.maximum_randoms_filter,
            DEFAULT_MAXIMUM_RANDOMS,
        )?,
    })
}

fn composer_filter(search: &str, filters: &SearchFilters) -> ComposerSearchFilter {
    ComposerSearchFilter {
        text: text_filter(search, filters.composer),
        arrangement: filters.composer_arrangement,
    }
}

fn parse_limit(field: &'static str, value: &str, default: &str) -> Result<u32, SearchError> {
    let raw = if value.trim().is_empty() { default } else { value };
    raw.trim()
        .parse::<u32>()
        .map_err(|_| SearchError::InvalidFilterValue {
            field,
            value: value.to_string(),
        })
}

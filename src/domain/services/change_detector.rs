use crate::domain::entities::{ArtistSearchFilter, ComposerSearchFilter, RequestBody, TextSearchFilter};

/// Structural comparison of two request bodies.
///
/// There is no previous body before the first search, so `None` never
/// compares equal.
pub fn bodies_equal(body: &RequestBody, previous: Option<&RequestBody>) -> bool {
    let Some(previous) = previous else {
        return false;
    };

    body.and_logic == previous.and_logic
        && body.ignore_duplicate == previous.ignore_duplicate
        && body.opening_filter == previous.opening_filter
        && body.ending_filter == previous.ending_filter
        && body.insert_filter == previous.insert_filter
        && same_presence(&body.anime_search_filter, &previous.anime_search_filter, text_equal)
        && same_presence(
            &body.song_name_search_filter,
            &previous.song_name_search_filter,
            text_equal,
        )
        && same_presence(&body.artist_search_filter, &previous.artist_search_filter, artist_equal)
        && same_presence(
            &body.composer_search_filter,
            &previous.composer_search_filter,
            composer_equal,
        )
}

fn same_presence<T>(a: &Option<T>, b: &Option<T>, eq: fn(&T, &T) -> bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => eq(a, b),
        _ => false,
    }
}

fn text_equal(a: &TextSearchFilter, b: &TextSearchFilter) -> bool {
    a.search == b.search
        && a.ignore_special_character == b.ignore_special_character
        && a.partial_match == b.partial_match
        && a.case_sensitive == b.case_sensitive
}

fn artist_equal(a: &ArtistSearchFilter, b: &ArtistSearchFilter) -> bool {
    text_equal(&a.text, &b.text)
        && a.group_granularity == b.group_granularity
        && a.max_other_artist == b.max_other_artist
}

fn composer_equal(a: &ComposerSearchFilter, b: &ComposerSearchFilter) -> bool {
    text_equal(&a.text, &b.text) && a.arrangement == b.arrangement
}

/// Remembers the last dispatched body so identical submissions can be skipped.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    previous: Option<RequestBody>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self { previous: None }
    }

    pub fn is_duplicate(&self, body: &RequestBody) -> bool {
        bodies_equal(body, self.previous.as_ref())
    }

    pub fn record(&mut self, body: RequestBody) {
        self.previous = Some(body);
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SearchFilters;
    use crate::domain::services::request_builder::build_request_body;

    fn advanced_filters() -> SearchFilters {
        let mut filters = SearchFilters::default();
        filters.show_advanced_filters = true;
        filters.anime_filter = "Clannad".to_string();
        filters.artist_filter = "Lia".to_string();
        filters
    }

    #[test]
    fn nothing_equals_a_missing_previous_body() {
        let body = build_request_body(&SearchFilters::default(), false).unwrap();
        assert!(!bodies_equal(&body, None));
    }

    #[test]
    fn rebuilt_bodies_are_equal_in_every_mode() {
        let mut simple = SearchFilters::default();
        simple.main_filter = "Totoro".to_string();
        let advanced = advanced_filters();

        for (filters, ranked) in [(&simple, false), (&advanced, false), (&advanced, true)] {
            let first = build_request_body(filters, ranked).unwrap();
            let second = build_request_body(filters, ranked).unwrap();
            assert!(bodies_equal(&second, Some(&first)));
        }
    }

    #[test]
    fn presence_mismatch_is_a_change() {
        let filters = advanced_filters();
        let previous = build_request_body(&filters, false).unwrap();

        let mut without_artist = filters.clone();
        without_artist.artist_filter.clear();
        let body = build_request_body(&without_artist, false).unwrap();

        assert!(!bodies_equal(&body, Some(&previous)));
        assert!(!bodies_equal(&previous, Some(&body)));
    }

    #[test]
    fn top_level_flags_are_compared() {
        let filters = advanced_filters();
        let previous = build_request_body(&filters, false).unwrap();

        let mut no_inserts = filters.clone();
        no_inserts.show_inserts = false;
        let body = build_request_body(&no_inserts, false).unwrap();

        assert!(!bodies_equal(&body, Some(&previous)));
    }

    #[test]
    fn sub_filter_fields_are_compared() {
        let filters = advanced_filters();
        let previous = build_request_body(&filters, false).unwrap();

        let mut members = filters.clone();
        members.minimal_members_filter = "1".to_string();
        let body = build_request_body(&members, false).unwrap();
        assert!(!bodies_equal(&body, Some(&previous)));

        let mut case = filters.clone();
        case.anime.case_sensitive = true;
        let body = build_request_body(&case, false).unwrap();
        assert!(!bodies_equal(&body, Some(&previous)));
    }

    #[test]
    fn toggles_of_absent_sub_filters_are_ignored() {
        let filters = advanced_filters();
        let previous = build_request_body(&filters, false).unwrap();

        let mut toggled = filters.clone();
        toggled.composer_arrangement = true;
        toggled.composer.case_sensitive = true;
        let body = build_request_body(&toggled, false).unwrap();

        assert!(bodies_equal(&body, Some(&previous)));
    }

    #[test]
    fn detector_tracks_the_last_recorded_body() {
        let mut detector = ChangeDetector::new();
        let body = build_request_body(&advanced_filters(), false).unwrap();

        assert!(!detector.is_duplicate(&body));
        detector.record(body.clone());
        assert!(detector.is_duplicate(&body));
        assert_eq!(detector.previous.as_ref(), Some(&body));

        detector.reset();
        assert!(!detector.is_duplicate(&body));
    }
}

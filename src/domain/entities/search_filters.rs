use std::fmt;

pub const DEFAULT_MINIMAL_MEMBERS: &str = "0";
pub const DEFAULT_MAXIMUM_RANDOMS: &str = "99";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCombination {
    Union,
    Intersection,
}

impl fmt::Display for FilterCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterCombination::Union => write!(f, "Union"),
            FilterCombination::Intersection => write!(f, "Intersection"),
        }
    }
}

/// Per-category text matching toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub partial_match: bool,
    pub ignore_special_characters: bool,
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            partial_match: true,
            ignore_special_characters: true,
            case_sensitive: false,
        }
    }
}

/// Everything the user can edit in the search bar.
///
/// The numeric artist limits are kept as text because they are bound to
/// text inputs; they are coerced to integers when the request body is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub main_filter: String,
    pub anime_filter: String,
    pub song_name_filter: String,
    pub artist_filter: String,
    pub composer_filter: String,
    pub maximum_randoms_filter: String,
    pub minimal_members_filter: String,
    pub anime: MatchOptions,
    pub song_name: MatchOptions,
    pub artist: MatchOptions,
    pub composer: MatchOptions,
    pub composer_arrangement: bool,
    pub combination: FilterCombination,
    pub show_openings: bool,
    pub show_endings: bool,
    pub show_inserts: bool,
    pub ignore_duplicate: bool,
    pub show_advanced_filters: bool,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self {
            main_filter: String::new(),
            anime_filter: String::new(),
            song_name_filter: String::new(),
            artist_filter: String::new(),
            composer_filter: String::new(),
            maximum_randoms_filter: DEFAULT_MAXIMUM_RANDOMS.to_string(),
            minimal_members_filter: DEFAULT_MINIMAL_MEMBERS.to_string(),
            anime: MatchOptions::default(),
            song_name: MatchOptions::default(),
            artist: MatchOptions::default(),
            composer: MatchOptions::default(),
            composer_arrangement: false,
            combination: FilterCombination::Union,
            show_openings: true,
            show_endings: true,
            show_inserts: true,
            ignore_duplicate: false,
            show_advanced_filters: false,
        }
    }

    /// Writes the default artist limits back into empty fields.
    pub fn restore_artist_limit_defaults(&mut self) {
        if self.minimal_members_filter.trim().is_empty() {
            self.minimal_members_filter = DEFAULT_MINIMAL_MEMBERS.to_string();
        }
        if self.maximum_randoms_filter.trim().is_empty() {
            self.maximum_randoms_filter = DEFAULT_MAXIMUM_RANDOMS.to_string();
        }
    }

    pub fn uses_main_filter(&self) -> bool {
        !self.main_filter.is_empty()
    }

    pub fn and_logic(&self) -> bool {
        self.combination == FilterCombination::Intersection
    }
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_search_bar_initial_state() {
        let filters = SearchFilters::default();
        assert_eq!(filters.maximum_randoms_filter, "99");
        assert_eq!(filters.minimal_members_filter, "0");
        assert_eq!(filters.combination, FilterCombination::Union);
        assert!(filters.show_openings && filters.show_endings && filters.show_inserts);
        assert!(!filters.ignore_duplicate);
        assert!(!filters.show_advanced_filters);
        assert!(filters.anime.partial_match);
        assert!(filters.anime.ignore_special_characters);
        assert!(!filters.anime.case_sensitive);
        assert!(!filters.composer_arrangement);
    }

    #[test]
    fn restores_only_empty_artist_limits() {
        let mut filters = SearchFilters::default();
        filters.minimal_members_filter.clear();
        filters.maximum_randoms_filter = "3".to_string();

        filters.restore_artist_limit_defaults();

        assert_eq!(filters.minimal_members_filter, "0");
        assert_eq!(filters.maximum_randoms_filter, "3");
    }

    #[test]
    fn intersection_means_and_logic() {
        let mut filters = SearchFilters::default();
        assert!(!filters.and_logic());
        filters.combination = FilterCombination::Intersection;
        assert!(filters.and_logic());
    }
}

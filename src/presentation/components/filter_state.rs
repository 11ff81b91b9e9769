use crate::domain::entities::{FilterCombination, MatchOptions, SearchFilters};

/// Widget-facing wrapper around the search bar's filter snapshot.
pub struct FilterState {
    filters: SearchFilters,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            filters: SearchFilters::new(),
        }
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut SearchFilters {
        &mut self.filters
    }

    pub fn main_filter_mut(&mut self) -> &mut String {
        &mut self.filters.main_filter
    }

    pub fn show_advanced_filters(&self) -> bool {
        self.filters.show_advanced_filters
    }

    pub fn set_show_advanced_filters(&mut self, value: bool) {
        self.filters.show_advanced_filters = value;
    }

    pub fn combination(&self) -> FilterCombination {
        self.filters.combination
    }

    pub fn set_combination(&mut self, combination: FilterCombination) {
        self.filters.combination = combination;
    }

    /// Text field and match toggles for one advanced category.
    pub fn category_mut(&mut self, category: FilterCategory) -> (&mut String, &mut MatchOptions) {
        let filters = &mut self.filters;
        match category {
            FilterCategory::Anime => (&mut filters.anime_filter, &mut filters.anime),
            FilterCategory::SongName => (&mut filters.song_name_filter, &mut filters.song_name),
            FilterCategory::Artist => (&mut filters.artist_filter, &mut filters.artist),
            FilterCategory::Composer => (&mut filters.composer_filter, &mut filters.composer),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Anime,
    SongName,
    Artist,
    Composer,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Anime,
        FilterCategory::SongName,
        FilterCategory::Artist,
        FilterCategory::Composer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::Anime => "Anime",
            FilterCategory::SongName => "Song Name",
            FilterCategory::Artist => "Artist",
            FilterCategory::Composer => "Composer",
        }
    }
}

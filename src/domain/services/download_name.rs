use crate::domain::entities::SearchFilters;

pub const INITIAL_DOWNLOAD_NAME: &str = "Init_SongList.json";
const SUFFIX: &str = "_SongList.json";

/// File name offered when exporting the current song list.
///
/// Only the first space of each part is dropped and only the first `__` of
/// the assembled name is collapsed; this is a naming convention, not a
/// filename sanitizer.
pub fn download_file_name(filters: &SearchFilters) -> String {
    if !filters.show_advanced_filters {
        return format!("{}{}", filters.main_filter.replacen(' ', "", 1), SUFFIX);
    }

    let name = format!(
        "{}_{}_{}_{}{}",
        filters.anime_filter.replacen(' ', "", 1),
        filters.song_name_filter.replacen(' ', "", 1),
        filters.artist_filter.replacen(' ', "", 1),
        filters.composer_filter.replacen(' ', "", 1),
        SUFFIX
    );
    name.replacen("__", "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_mode_uses_main_filter() {
        let mut filters = SearchFilters::default();
        filters.main_filter = "Cowboy Bebop OST".to_string();
        assert_eq!(download_file_name(&filters), "CowboyBebop OST_SongList.json");
    }

    #[test]
    fn empty_main_filter_keeps_the_suffix() {
        assert_eq!(download_file_name(&SearchFilters::default()), "_SongList.json");
    }

    #[test]
    fn advanced_mode_joins_every_category() {
        let mut filters = SearchFilters::default();
        filters.show_advanced_filters = true;
        filters.anime_filter = "Kill la Kill".to_string();
        filters.song_name_filter = "Sirtaki".to_string();
        filters.artist_filter = "Eir Aoi".to_string();
        filters.composer_filter = "Hiroyuki".to_string();

        assert_eq!(
            download_file_name(&filters),
            "Killla Kill_Sirtaki_EirAoi_Hiroyuki_SongList.json"
        );
    }

    #[test]
    fn only_first_double_underscore_is_collapsed() {
        let mut filters = SearchFilters::default();
        filters.show_advanced_filters = true;
        filters.anime_filter = "Haruhi".to_string();

        assert_eq!(download_file_name(&filters), "Haruhi__SongList.json");
    }
}

pub mod config;
pub mod request_body;
pub mod search_filters;
pub mod song;

pub use config::{AppConfig, ThemeMode};
pub use request_body::{ArtistSearchFilter, ComposerSearchFilter, RequestBody, TextSearchFilter};
pub use search_filters::{FilterCombination, MatchOptions, SearchFilters};
pub use song::{Song, SongList};

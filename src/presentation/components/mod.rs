pub mod filter_state;
pub mod log_manager;
pub mod song_table;
pub mod tab_manager;

pub use filter_state::{FilterCategory, FilterState};
pub use log_manager::{LogLevel, LogManager};
pub use song_table::SongTable;
pub use tab_manager::{Tab, TabManager};

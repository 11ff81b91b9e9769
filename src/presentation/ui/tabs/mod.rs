pub mod log;
pub mod search;
pub mod settings;

pub use log::{LogAction, LogTab};
pub use search::{SearchAction, SearchTab};
pub use settings::{SettingsAction, SettingsTab};

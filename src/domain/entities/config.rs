use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://anisongdb.com/api";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub api_base_url: String,
    pub search_path: String,
    pub initial_results_path: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_path: "search_request".to_string(),
            initial_results_path: "get_50_latest_songs".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}

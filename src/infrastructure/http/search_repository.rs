use crate::domain::{
    entities::{AppConfig, RequestBody, SongList},
    errors::SearchError,
    repositories::SearchRepository,
};
use crate::infrastructure::http::ApiClient;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpSearchRepository {
    client: ApiClient,
    search_path: String,
    initial_results_path: String,
}

impl HttpSearchRepository {
    pub fn new(client: ApiClient, search_path: &str, initial_results_path: &str) -> Self {
        Self {
            client,
            search_path: search_path.to_string(),
            initial_results_path: initial_results_path.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = ApiClient::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::new(
            client,
            &config.search_path,
            &config.initial_results_path,
        ))
    }
}

#[async_trait]
impl SearchRepository for HttpSearchRepository {
    async fn get_initial_results(&self) -> Result<SongList, SearchError> {
        let songs: SongList = self.client.get_json(&self.initial_results_path).await?;
        tracing::info!("Loaded {} initial songs", songs.len());
        Ok(songs)
    }

    async fn search(&self, body: &RequestBody) -> Result<SongList, SearchError> {
        if !body.has_sub_filters() {
            tracing::debug!("Search has no sub-filters, every song matches");
        }
        let songs: SongList = self.client.post_json(&self.search_path, body).await?;
        tracing::info!("Search returned {} songs", songs.len());
        Ok(songs)
    }
}

use crate::domain::entities::{RequestBody, SongList};
use crate::domain::errors::SearchError;
use async_trait::async_trait;

#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn get_initial_results(&self) -> Result<SongList, SearchError>;
    async fn search(&self, body: &RequestBody) -> Result<SongList, SearchError>;
}

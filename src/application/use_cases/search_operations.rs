use crate::application::SearchRequest;
use crate::domain::{
    entities::{RequestBody, SongList},
    errors::SearchError,
    repositories::SearchRepository,
};
use std::sync::Arc;

pub struct LoadInitialSongs {
    repository: Arc<dyn SearchRepository>,
}

impl LoadInitialSongs {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<SongList, SearchError> {
        self.repository.get_initial_results().await
    }
}

pub struct SearchSongs {
    repository: Arc<dyn SearchRepository>,
}

impl SearchSongs {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, body: &RequestBody) -> Result<SongList, SearchError> {
        self.repository.search(body).await
    }
}

/// Routes a dispatched ticket to the matching use case.
pub struct RunSearchRequest {
    initial: LoadInitialSongs,
    search: SearchSongs,
}

impl RunSearchRequest {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self {
            initial: LoadInitialSongs::new(Arc::clone(&repository)),
            search: SearchSongs::new(repository),
        }
    }

    pub async fn execute(&self, request: &SearchRequest) -> Result<SongList, SearchError> {
        match request {
            SearchRequest::Initial => self.initial.execute().await,
            SearchRequest::Filtered(body) => self.search.execute(body).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SearchFilters, Song};
    use crate::domain::services::build_request_body;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeRepository {
        bodies: Mutex<Vec<RequestBody>>,
    }

    #[async_trait]
    impl SearchRepository for FakeRepository {
        async fn get_initial_results(&self) -> Result<SongList, SearchError> {
            Ok(vec![Song {
                song_name: Some("latest".to_string()),
                ..Song::default()
            }])
        }

        async fn search(&self, body: &RequestBody) -> Result<SongList, SearchError> {
            self.bodies.lock().unwrap().push(body.clone());
            Err(SearchError::Status {
                status: 503,
                body: "maintenance".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn routes_tickets_to_the_right_endpoint() {
        let repository = Arc::new(FakeRepository {
            bodies: Mutex::new(Vec::new()),
        });
        let runner = RunSearchRequest::new(repository.clone());

        let initial = runner.execute(&SearchRequest::Initial).await.unwrap();
        assert_eq!(initial[0].song_name.as_deref(), Some("latest"));

        let body = build_request_body(&SearchFilters::default(), false).unwrap();
        let err = runner
            .execute(&SearchRequest::Filtered(body.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Status { status: 503, .. }));
        assert_eq!(repository.bodies.lock().unwrap().as_slice(), &[body]);
    }
}

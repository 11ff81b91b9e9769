use crate::application::use_cases::*;
use crate::domain::repositories::SearchRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub run_request: Arc<RunSearchRequest>,
    pub export_songs: Arc<ExportSongList>,
}

impl UseCaseContainer {
    pub fn new(search_repository: Arc<dyn SearchRepository>) -> Self {
        Self {
            run_request: Arc::new(RunSearchRequest::new(search_repository)),
            export_songs: Arc::new(ExportSongList::new()),
        }
    }
}

pub mod analytics;
pub mod client;
pub mod search_repository;

pub use analytics::TracingAnalyticsSink;
pub use client::ApiClient;
pub use search_repository::HttpSearchRepository;

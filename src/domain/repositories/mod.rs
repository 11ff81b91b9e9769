pub mod analytics_sink;
pub mod search_repository;

pub use analytics_sink::AnalyticsSink;
pub use search_repository::SearchRepository;

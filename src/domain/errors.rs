use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidFilterValue { field: &'static str, value: String },
}

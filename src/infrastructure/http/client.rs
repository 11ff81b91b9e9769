use crate::domain::errors::SearchError;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::MalformedResponse(err.to_string())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

/// Thin JSON client bound to the API base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SearchError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SearchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SearchError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| SearchError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = ApiClient::new("https://example.invalid/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint("/search_request"),
            "https://example.invalid/api/search_request"
        );
        assert_eq!(
            client.endpoint("get_50_latest_songs"),
            "https://example.invalid/api/get_50_latest_songs"
        );
    }
}

//! HTTP client implementation for the routine API.
//!
//! This module provides a reqwest-based implementation of the [`RoutineClient`](crate::RoutineClient) trait.

use crate::config::Config;
use crate::{Category, Routine, RoutineApiError, RoutineClient, Tag};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the routine API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestRoutineClient {
    base_url: String,
    token: SecretString,
    client: reqwest::Client,
}

impl ReqwestRoutineClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API, without a trailing path
    /// * `token` - Bearer token scoping every request to the signed-in user
    pub fn new(base_url: &str, token: SecretString) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, config.token.clone())
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(self.token.expose_secret())
    }

    /// Build an authenticated DELETE request.
    fn delete_request(&self, url: reqwest::Url) -> reqwest::RequestBuilder {
        self.client
            .delete(url)
            .bearer_auth(self.token.expose_secret())
    }

    /// `{base_url}/{segments..}` with every segment percent-encoded as a single path segment.
    fn segment_url(&self, segments: &[&str]) -> Result<reqwest::Url, RoutineApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| RoutineApiError::Config(format!("invalid base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| RoutineApiError::Config("base url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RoutineApiError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Execute a request with no expected response body.
    async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), RoutineApiError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(())
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> RoutineApiError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        tracing::debug!(status, "routine api request failed");
        RoutineApiError::from_status(status, body_snippet)
    }
}

#[async_trait]
impl RoutineClient for ReqwestRoutineClient {
    async fn list_routines(&self) -> Result<Vec<Routine>, RoutineApiError> {
        let url = format!("{}/r/", self.base_url);
        self.execute_json(self.get_request(&url)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RoutineApiError> {
        let url = format!("{}/api/categories", self.base_url);
        self.execute_json(self.get_request(&url)).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, RoutineApiError> {
        let url = format!("{}/t/tag", self.base_url);
        self.execute_json(self.get_request(&url)).await
    }

    async fn delete_routine(&self, routine_id: &str) -> Result<(), RoutineApiError> {
        if routine_id.trim().is_empty() || routine_id == "." || routine_id == ".." {
            return Err(RoutineApiError::InvalidInput(format!(
                "invalid routine id `{routine_id}`"
            )));
        }
        let url = self.segment_url(&["r", routine_id])?;
        self.execute_empty(self.delete_request(url)).await
    }
}

//! Low-level HTTP client for the Graylog Universal Search API.
//!
//! This module owns the request plumbing (URL joining, basic-auth headers,
//! query serialization, error classification) and knows nothing about
//! MCP. Callers get back either the deserialized response body or a typed
//! [`Error`] they can pattern-match; nothing here retries or unwinds.

use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::GraylogConfig;
use crate::error::{Error, Result};

/// Authenticated client for one Graylog server.
#[derive(Debug, Clone)]
pub struct GraylogClient {
    config: GraylogConfig,
    http:   reqwest::Client,
}

impl GraylogClient {
    /// Build a client from resolved connection parameters.
    ///
    /// No request timeout is configured; timeout and cancellation behavior
    /// belong to the underlying transport and surface as network errors.
    pub fn new(config: GraylogConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configured base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Issue an authenticated GET and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, "issuing Graylog search request");
        let request = self.http.get(&url).query(query);
        self.dispatch(url, request).await
    }

    /// Issue an authenticated POST with a JSON body and decode the response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, "issuing Graylog request");
        let request = self.http.post(&url).json(body);
        self.dispatch(url, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            // The body often carries Graylog's own explanation; best effort only.
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %url, "Graylog returned an error status");
            return Err(Error::Http {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Decoding(e.to_string()))
    }
}

//! Storefront API fetcher.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::ClientError;

/// HTTP method of a hook's request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<FetchMethod> for reqwest::Method {
    fn from(method: FetchMethod) -> Self {
        match method {
            FetchMethod::Get => Self::GET,
            FetchMethod::Post => Self::POST,
            FetchMethod::Put => Self::PUT,
            FetchMethod::Delete => Self::DELETE,
        }
    }
}

/// Fixed request target of a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Path relative to the storefront base URL.
    pub url: &'static str,
    pub method: FetchMethod,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Fetcher for the storefront's JSON API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct StorefrontFetcher {
    inner: Arc<FetcherInner>,
}

#[derive(Debug)]
struct FetcherInner {
    client: reqwest::Client,
    base_url: Url,
}

impl StorefrontFetcher {
    /// Create a fetcher for the storefront at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a fetcher reusing an existing `reqwest` client (e.g. one with a cookie store).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            inner: Arc::new(FetcherInner {
                client,
                base_url: Url::parse(base_url)?,
            }),
        })
    }

    /// Send a request and unwrap the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns `Api` with the joined error messages on a non-success status,
    /// `Parse` when the envelope does not match `T`, and `Http` on transport failure.
    #[instrument(skip(self, body), fields(url = options.url, method = ?options.method))]
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        options: FetchOptions,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ClientError> {
        let url = self.inner.base_url.join(options.url)?;

        let mut request = self.inner.client.request(options.method.into(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, "storefront request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&text)?;
        Ok(envelope.data)
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => envelope
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_joins_entries() {
        let body = r#"{"data":null,"errors":[{"message":"itemId is required"},{"message":"No active cart"}]}"#;
        assert_eq!(error_message(body), "itemId is required; No active cart");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(FetchMethod::Delete), reqwest::Method::DELETE);
    }
}

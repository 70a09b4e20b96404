//! commercetools platform integration.
//!
//! # Architecture
//!
//! - `client` issues one typed query-execution call per operation against the
//!   commercetools HTTP API (`reqwest`, bearer token)
//! - `types` mirrors the platform's wire records, optional fields and all
//! - `normalize` maps those records into the `cirrus-core` schema
//! - commercetools is the source of truth: no local sync, no response caching
//!
//! # Example
//!
//! ```rust,ignore
//! use cirrus_storefront::commercetools::{CommercetoolsClient, normalize};
//!
//! let client = CommercetoolsClient::new(&config.commercetools)?;
//!
//! let cart = client.get_cart("8f0b...").await?;
//! let cart = normalize::normalize_cart(&cart, &options)?;
//! ```

pub mod client;
pub mod locale;
pub mod normalize;
pub mod sort;
pub mod types;

pub use client::{CommercetoolsClient, Method, QueryVariables, SdkQuery, SdkRequest, TextSearch};
pub use locale::map_locale;
pub use normalize::{NormalizeError, NormalizeOptions};
pub use sort::sort_variables;

use thiserror::Error;

/// Errors that can occur when calling the commercetools API.
#[derive(Debug, Error)]
pub enum CommercetoolsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {}", format_api_errors(.errors))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error entries reported in the response body.
        errors: Vec<ApiErrorDetail>,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A single entry of a commercetools error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., `ConcurrentModification`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

fn format_api_errors(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .map(|e| match (e.code.is_empty(), e.message.is_empty()) {
            (true, true) => "(no details)".to_string(),
            (false, true) => e.code.clone(),
            (true, false) => e.message.clone(),
            (false, false) => format!("{}: {}", e.code, e.message),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

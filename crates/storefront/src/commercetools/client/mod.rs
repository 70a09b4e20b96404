//! commercetools HTTP API client.
//!
//! Every operation goes through [`CommercetoolsClient::sdk_fetch`], which
//! builds the endpoint URL from the request descriptor, attaches the bearer
//! token, and decodes either the typed result or the platform's error body.
//! Nothing is cached and nothing is retried.

mod queries;

pub use queries::{Method, QueryVariables, SdkQuery, SdkRequest, TextSearch};

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::CommercetoolsConfig;

use super::types::{
    Cart, CartDraft, CartUpdateAction, Category, Customer, ErrorResponse, PagedQueryResponse,
    Product, ProductProjection, ShoppingList, ShoppingListDraft, ShoppingListUpdateAction,
    UpdateRequest,
};
use super::{ApiErrorDetail, CommercetoolsError};

/// Upper bound on categories fetched for navigation.
const CATEGORY_LIMIT: u32 = 500;

/// Client for the commercetools HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CommercetoolsClient {
    inner: Arc<CommercetoolsClientInner>,
}

struct CommercetoolsClientInner {
    client: reqwest::Client,
    /// `{api_url}/{project_key}/`
    project_url: Url,
    access_token: SecretString,
}

impl std::fmt::Debug for CommercetoolsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommercetoolsClient")
            .field("project_url", &self.inner.project_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CommercetoolsClient {
    /// Create a new client for the configured project.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL or project key do not form a valid URL.
    pub fn new(config: &CommercetoolsConfig) -> Result<Self, CommercetoolsError> {
        let project_url = Url::parse(&format!(
            "{}/{}/",
            config.api_url.trim_end_matches('/'),
            config.project_key
        ))?;

        Ok(Self {
            inner: Arc::new(CommercetoolsClientInner {
                client: reqwest::Client::new(),
                project_url,
                access_token: config.access_token.clone(),
            }),
        })
    }

    /// Resolve the full URL of a request, query string included.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource path cannot be joined onto the project URL.
    pub fn endpoint(&self, request: &SdkRequest) -> Result<Url, CommercetoolsError> {
        let mut url = self.inner.project_url.join(&request.query.path())?;

        let pairs = request.variables.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Execute a single typed query against the platform.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on 404, `Api` on any other non-success status,
    /// `Parse` when the body does not match `T`, and `Http` on transport failure.
    #[instrument(skip(self, request), fields(query = %request.query, method = ?request.method))]
    pub async fn sdk_fetch<T: DeserializeOwned>(
        &self,
        request: SdkRequest,
    ) -> Result<T, CommercetoolsError> {
        let url = self.endpoint(&request)?;

        let mut builder = self
            .inner
            .client
            .request(request.method.into(), url)
            .bearer_auth(self.inner.access_token.expose_secret());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("commercetools resource not found");
            return Err(CommercetoolsError::NotFound(request.query.path()));
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "commercetools API returned non-success status"
            );
            return Err(api_error(status.as_u16(), &response_text));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse commercetools response"
            );
            CommercetoolsError::Parse(e)
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Search product projections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn search_product_projections(
        &self,
        variables: QueryVariables,
    ) -> Result<PagedQueryResponse<ProductProjection>, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::get(SdkQuery::ProductProjectionsSearch).with_variables(variables))
            .await
    }

    /// Query product projections with a predicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn query_product_projections(
        &self,
        variables: QueryVariables,
    ) -> Result<PagedQueryResponse<ProductProjection>, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::get(SdkQuery::ProductProjections).with_variables(variables))
            .await
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the product does not exist.
    pub async fn get_product(&self, id: &str) -> Result<Product, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::get(SdkQuery::Product(id.to_string())))
            .await
    }

    /// List categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get_categories(
        &self,
    ) -> Result<PagedQueryResponse<Category>, CommercetoolsError> {
        let variables = QueryVariables {
            limit: Some(CATEGORY_LIMIT),
            ..QueryVariables::default()
        };
        self.sdk_fetch(SdkRequest::get(SdkQuery::Categories).with_variables(variables))
            .await
    }

    // =========================================================================
    // Carts
    // =========================================================================

    /// Create an empty cart in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_cart(&self, currency: &str) -> Result<Cart, CommercetoolsError> {
        let draft = CartDraft {
            currency: currency.to_string(),
        };
        self.sdk_fetch(SdkRequest::post(SdkQuery::Carts, serde_json::to_value(draft)?))
            .await
    }

    /// Get a cart by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the cart does not exist.
    pub async fn get_cart(&self, id: &str) -> Result<Cart, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::get(SdkQuery::Cart(id.to_string())))
            .await
    }

    /// Apply update actions to a cart at `version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is stale or an action is rejected.
    pub async fn update_cart(
        &self,
        id: &str,
        version: i64,
        actions: Vec<CartUpdateAction>,
    ) -> Result<Cart, CommercetoolsError> {
        let body = serde_json::to_value(UpdateRequest { version, actions })?;
        self.sdk_fetch(SdkRequest::post(SdkQuery::Cart(id.to_string()), body))
            .await
    }

    // =========================================================================
    // Shopping lists
    // =========================================================================

    /// Create an empty shopping list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_shopping_list(
        &self,
        draft: ShoppingListDraft,
    ) -> Result<ShoppingList, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::post(
            SdkQuery::ShoppingLists,
            serde_json::to_value(draft)?,
        ))
        .await
    }

    /// Get a shopping list by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the list does not exist.
    pub async fn get_shopping_list(&self, id: &str) -> Result<ShoppingList, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::get(SdkQuery::ShoppingList(id.to_string())))
            .await
    }

    /// Apply update actions to a shopping list at `version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is stale or an action is rejected.
    pub async fn update_shopping_list(
        &self,
        id: &str,
        version: i64,
        actions: Vec<ShoppingListUpdateAction>,
    ) -> Result<ShoppingList, CommercetoolsError> {
        let body = serde_json::to_value(UpdateRequest { version, actions })?;
        self.sdk_fetch(SdkRequest::post(SdkQuery::ShoppingList(id.to_string()), body))
            .await
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the customer does not exist.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, CommercetoolsError> {
        self.sdk_fetch(SdkRequest::get(SdkQuery::Customer(id.to_string())))
            .await
    }
}

/// Build an `Api` error from a non-success response body.
fn api_error(status: u16, body: &str) -> CommercetoolsError {
    let errors = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) if !response.errors.is_empty() => response
            .errors
            .into_iter()
            .map(|e| ApiErrorDetail {
                code: e.code,
                message: e.message,
            })
            .collect(),
        Ok(response) if !response.message.is_empty() => vec![ApiErrorDetail {
            code: String::new(),
            message: response.message,
        }],
        _ => Vec::new(),
    };

    CommercetoolsError::Api { status, errors }
}

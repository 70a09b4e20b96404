//! Query descriptors for [`super::CommercetoolsClient::sdk_fetch`].
//!
//! A request names the platform resource (`SdkQuery`), the HTTP method, and a
//! variables object that becomes the query string.

use std::fmt;

/// Platform resource addressed by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkQuery {
    /// Full-text and faceted product search.
    ProductProjectionsSearch,
    /// Predicate query over product projections.
    ProductProjections,
    /// A single product by id.
    Product(String),
    Categories,
    Carts,
    Cart(String),
    ShoppingLists,
    ShoppingList(String),
    Customer(String),
}

impl SdkQuery {
    /// Path relative to the project root.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ProductProjectionsSearch => "product-projections/search".to_string(),
            Self::ProductProjections => "product-projections".to_string(),
            Self::Product(id) => format!("products/{id}"),
            Self::Categories => "categories".to_string(),
            Self::Carts => "carts".to_string(),
            Self::Cart(id) => format!("carts/{id}"),
            Self::ShoppingLists => "shopping-lists".to_string(),
            Self::ShoppingList(id) => format!("shopping-lists/{id}"),
            Self::Customer(id) => format!("customers/{id}"),
        }
    }
}

impl fmt::Display for SdkQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Full-text search scoped to a locale-specific field (e.g., `text.en`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSearch {
    pub field: String,
    pub text: String,
}

/// Query-string variables of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryVariables {
    /// Reference expansion paths.
    pub expand: Vec<String>,
    /// Sort clauses, e.g. `price asc`.
    pub sort: Vec<String>,
    pub search: Option<TextSearch>,
    /// Search filter expression, e.g. `categories.id: subtree("42")`.
    pub filters: Option<String>,
    /// Query predicate, e.g. `slug(en="shoe")`.
    pub where_clause: Option<String>,
    pub limit: Option<u32>,
}

impl QueryVariables {
    /// Flatten into query-string pairs, repeating multi-valued keys.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for path in &self.expand {
            pairs.push(("expand".to_string(), path.clone()));
        }
        for clause in &self.sort {
            pairs.push(("sort".to_string(), clause.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push((search.field.clone(), search.text.clone()));
        }
        if let Some(filter) = &self.filters {
            pairs.push(("filter".to_string(), filter.clone()));
        }
        if let Some(predicate) = &self.where_clause {
            pairs.push(("where".to_string(), predicate.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

/// A single outbound request.
#[derive(Debug, Clone)]
pub struct SdkRequest {
    pub query: SdkQuery,
    pub method: Method,
    pub variables: QueryVariables,
    /// JSON body for `POST` requests.
    pub body: Option<serde_json::Value>,
}

impl SdkRequest {
    /// A `GET` request without variables.
    #[must_use]
    pub fn get(query: SdkQuery) -> Self {
        Self {
            query,
            method: Method::Get,
            variables: QueryVariables::default(),
            body: None,
        }
    }

    /// A `POST` request carrying `body`.
    #[must_use]
    pub fn post(query: SdkQuery, body: serde_json::Value) -> Self {
        Self {
            query,
            method: Method::Post,
            variables: QueryVariables::default(),
            body: Some(body),
        }
    }

    /// Replace the variables.
    #[must_use]
    pub fn with_variables(mut self, variables: QueryVariables) -> Self {
        self.variables = variables;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_paths() {
        assert_eq!(
            SdkQuery::ProductProjectionsSearch.path(),
            "product-projections/search"
        );
        assert_eq!(SdkQuery::Cart("c-1".to_string()).path(), "carts/c-1");
        assert_eq!(
            SdkQuery::ShoppingList("s-1".to_string()).to_string(),
            "shopping-lists/s-1"
        );
    }

    #[test]
    fn test_query_pairs_order_and_repetition() {
        let variables = QueryVariables {
            expand: vec!["masterData.current".to_string()],
            sort: vec!["price asc".to_string(), "createdAt desc".to_string()],
            search: Some(TextSearch {
                field: "text.en".to_string(),
                text: "shoe".to_string(),
            }),
            filters: Some("categories.id: subtree(\"42\")".to_string()),
            where_clause: None,
            limit: Some(20),
        };

        assert_eq!(
            variables.query_pairs(),
            vec![
                ("expand".to_string(), "masterData.current".to_string()),
                ("sort".to_string(), "price asc".to_string()),
                ("sort".to_string(), "createdAt desc".to_string()),
                ("text.en".to_string(), "shoe".to_string()),
                ("filter".to_string(), "categories.id: subtree(\"42\")".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_variables_have_no_pairs() {
        assert!(QueryVariables::default().query_pairs().is_empty());
    }
}

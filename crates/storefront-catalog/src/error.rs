//! # Catalog Error Types
//!
//! Error types for product source operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / serde_json::Error / io::Error                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ├──► ProductListView: logs it, shows the load error message       │
//! │       │                                                                 │
//! │       └──► AppError (binary): exits with a readable message             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Product source errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed.
    ///
    /// ## When This Occurs
    /// - Backend not running
    /// - DNS / TLS failure
    /// - Request timed out
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body was not `{ "products": [...] }` or held an invalid price.
    #[error("Invalid product payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be joined with the products path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The source is switched off (in-memory failure mode).
    #[error("Product source unavailable: {0}")]
    Unavailable(String),

    /// The mock backend could not bind its listener.
    #[error("Failed to bind mock server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = CatalogError::UnexpectedStatus {
            status: 500,
            url: "http://localhost/api/products".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 500 from http://localhost/api/products"
        );
    }

    #[test]
    fn test_decode_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}

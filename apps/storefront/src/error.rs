//! # App Error Type
//!
//! Unified error type for everything the storefront shows to a user.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  ConfigError ─────────────┐                                             │
//! │  (bad toml, bad env)      │                                             │
//! │                           ▼                                             │
//! │  CatalogError ────────► AppError { code, message } ──► view / stderr   │
//! │  (HTTP, decode, status)   ▲                                             │
//! │                           │                                             │
//! │  CoreError ───────────────┘                                             │
//! │  (unknown product id, invalid input)                                    │
//! │                                                                         │
//! │  Internal details go to the log; `message` stays presentable.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::CatalogError;
use storefront_core::CoreError;

use crate::state::ConfigError;

/// Error shown to the user.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CATALOG_UNAVAILABLE",
///   "message": "Problema ao carregar a lista"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for user-facing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The product list could not be fetched or decoded
    CatalogUnavailable,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a catalog load error with a fixed display message.
    pub fn load_failed(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::CatalogUnavailable, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts catalog errors to app errors.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Request(e) => {
                tracing::error!("Product request failed: {}", e);
                AppError::load_failed("Could not reach the product service")
            }
            CatalogError::UnexpectedStatus { status, url } => {
                tracing::error!(status, %url, "Product service returned an error status");
                AppError::load_failed(format!("Product service responded with {}", status))
            }
            CatalogError::Decode(e) => {
                tracing::error!("Product response could not be decoded: {}", e);
                AppError::load_failed("Product service sent an invalid response")
            }
            CatalogError::InvalidUrl(e) => {
                AppError::new(ErrorCode::ConfigError, format!("Invalid product service URL: {}", e))
            }
            CatalogError::Unavailable(reason) => {
                tracing::error!("Product source unavailable: {}", reason);
                AppError::load_failed("Product service unavailable")
            }
            CatalogError::Bind(e) => {
                tracing::error!("Failed to bind server socket: {}", e);
                AppError::internal("Failed to start server")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => AppError::not_found("Product", &id),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts configuration errors to app errors.
impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

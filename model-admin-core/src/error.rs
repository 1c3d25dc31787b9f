//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use model_admin_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Record no longer exists (view/edit on a deleted row)
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Form validation error (nullability only)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A control value could not be converted to a stored value
    #[error("Invalid value for '{field}': {detail}")]
    ConversionError { field: String, detail: String },

    /// Configuration file could not be used
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Backend error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound(_)
            | Self::ValidationError(_)
            | Self::ConversionError { .. } => true,
            Self::Client(e) => e.is_expected(),
            Self::ConfigError(_) => false,
        }
    }

    /// Whether the addressed record (or model) is gone.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::RecordNotFound(_) => true,
            Self::Client(e) => e.is_not_found(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

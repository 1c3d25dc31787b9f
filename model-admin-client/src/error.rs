use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all backend operations.
///
/// Every variant is serializable so it can be forwarded to a UI or log sink
/// without losing structure.
///
/// # Expected vs. unexpected
///
/// [`is_expected`](Self::is_expected) separates errors caused by the caller
/// (missing record, rejected payload, expired session) from transport or
/// protocol failures. Callers use it to pick `warn` or `error` log levels.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The backend rejected the ambient session (HTTP 401/403).
    #[error("Unauthorized: {raw_message}")]
    Unauthorized {
        /// HTTP status returned by the backend.
        status: u16,
        /// Response body, if any.
        raw_message: String,
    },

    /// The requested model or record does not exist (HTTP 404).
    #[error("Not found: {resource}")]
    NotFound {
        /// Path of the missing resource, e.g. `Lesson/7`.
        resource: String,
    },

    /// The backend answered with a non-success status not covered above.
    #[error("Backend returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// Failed to parse the backend's response.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Failed to serialize request: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid base URL '{url}'")]
    InvalidBaseUrl {
        /// The offending URL.
        url: String,
    },
}

impl ClientError {
    /// 是否为预期行为（资源不存在、参数被拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized { .. } | Self::NotFound { .. } => true,
            Self::Api { status, .. } => (400..500).contains(status),
            Self::Network { .. }
            | Self::Parse { .. }
            | Self::Serialization { .. }
            | Self::InvalidBaseUrl { .. } => false,
        }
    }

    /// Whether this error means the addressed record or model is gone.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Client Result 类型别名
pub type Result<T> = std::result::Result<T, ClientError>;

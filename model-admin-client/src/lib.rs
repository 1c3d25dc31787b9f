//! # model-admin-client
//!
//! A typed client for schema-agnostic model administration backends: list
//! the browsable models, discover a model's fields at runtime, and page,
//! read, create, update and delete its records without per-model code.
//!
//! ## Backend Contract
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/models` | `string[]` |
//! | `GET` | `/models/{model}/fields` | `{ fields: FieldDescriptor[] }` |
//! | `GET` | `/models/{model}/records?page&limit` | `{ data: Record[], total }` |
//! | `GET` | `/models/{model}/records/{id}` | `Record` |
//! | `POST` | `/models/{model}/records` | `Record` |
//! | `PATCH` | `/models/{model}/records/{id}` | `Record` |
//! | `DELETE` | `/models/{model}/records/{id}` | empty |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use model_admin_client::{AdminBackend, ModelName, RestBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = RestBackend::new("http://localhost:3000/api/admin", None)?;
//!
//!     for model in backend.list_models().await? {
//!         println!("{model}");
//!     }
//!
//!     let course = ModelName::new("Course");
//!     let fields = backend.get_fields(&course).await?;
//!     let page = backend.list_records(&course, 1, 10).await?;
//!     println!("{} fields, {} records", fields.len(), page.total);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Network`]: the backend could not be reached
//! - [`ClientError::Unauthorized`]: the ambient session was rejected
//! - [`ClientError::NotFound`]: model or record does not exist
//! - [`ClientError::Api`]: any other non-success status
//!
//! Nothing is retried automatically.

mod error;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export core trait
pub use traits::AdminBackend;

// Re-export the HTTP implementation
pub use rest::RestBackend;

// Re-export types
pub use types::{
    CREATED_AT_FIELD, FieldDescriptor, FieldType, FieldsResponse, ID_FIELD, ModelName, Page,
    Payload, Record, RecordId, RecordsResponse, UPDATED_AT_FIELD,
};

// Re-export utils module
pub use utils::log_sanitizer;

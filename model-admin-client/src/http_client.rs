//! Generic HTTP client tools
//!
//! Shared request/response handling for the REST backend: sending a
//! prepared `RequestBuilder`, logging, mapping HTTP status codes onto
//! [`ClientError`] and decoding JSON bodies.
//!
//! There is deliberately no retry loop here: a failed call is terminal for
//! that attempt and the user re-triggers the action.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and body text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `backend_name` - backend identifier (for logging)
    /// * `method_name` - HTTP method (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// Only transport failures are errors here; status handling is left to
    /// [`check_status`](Self::check_status).
    pub async fn execute_request(
        request_builder: RequestBuilder,
        backend_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[{backend_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ClientError::Network {
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[{backend_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{backend_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Map a non-2xx status onto the error taxonomy.
    ///
    /// `resource` names what was addressed (`Lesson/7`) and is used for
    /// [`ClientError::NotFound`].
    pub fn check_status(status: u16, body: &str, resource: &str) -> Result<(), ClientError> {
        match status {
            200..=299 => Ok(()),
            401 | 403 => Err(ClientError::Unauthorized {
                status,
                raw_message: extract_message(body),
            }),
            404 => Err(ClientError::NotFound {
                resource: resource.to_string(),
            }),
            _ => Err(ClientError::Api {
                status,
                message: extract_message(body),
            }),
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str, backend_name: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{backend_name}] JSON parse failed: {e}");
            log::error!(
                "[{backend_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks for `message` then `error` (string or `{ message }`), falling back
/// to the truncated raw body.
fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let candidate = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .or_else(|| value.get("error").and_then(serde_json::Value::as_str))
            .or_else(|| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(serde_json::Value::as_str)
            });
        if let Some(message) = candidate {
            return message.to_string();
        }
    }

    truncate_for_log(trimmed)
}

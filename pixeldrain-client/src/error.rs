//! Client error types and remote error translation
//!
//! Common error enum used by all resource clients, plus the translation
//! of pixeldrain error responses into fixed human-readable messages.

use thiserror::Error;

use crate::types::StatusMessage;

/// Maximum size for response bodies buffered in memory (16 MB).
/// Prevents OOM from a malicious or misconfigured server. Streamed
/// downloads are written to disk and are not subject to this limit.
pub const MAX_RESPONSE_SIZE: usize = 16 * 1024 * 1024;

/// Common error type for all pixeldrain API operations.
#[derive(Debug, Error)]
pub enum PixeldrainError {
    /// An argument failed local validation. No request was dispatched.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the request, or the transport failed outright.
    /// `value` holds the server's error token when the response body
    /// carried one.
    #[error("{message}")]
    Remote {
        value: Option<String>,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Local file I/O failed while staging an upload or persisting a
    /// download.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation exists in the remote API but is not supported by
    /// this client yet.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Response too large ({size} bytes, max {MAX_RESPONSE_SIZE})")]
    ResponseTooLarge { size: u64 },
}

/// Fixed message for a server error token, if the token is known.
///
/// The server ships its own `message` field next to the token, but its
/// wording changes between deployments. Callers that match on error text
/// get a stable string per token instead.
pub fn status_message(value: &str) -> Option<&'static str> {
    let message = match value {
        "authentication_required" => {
            "This method requires authentication, please include a valid API key."
        }
        "authentication_failed" => "The username or password you entered is invalid.",
        "permission_denied" => "You don't have permission to perform this action.",
        "not_found" => "The entity you requested could not be found.",
        "file_not_found" => "The file you requested could not be found.",
        "list_not_found" => "The list you requested could not be found.",
        "no_file" => "The request did not contain a file to upload.",
        "multiple_files" => "Only one file can be uploaded per request.",
        "file_too_large" => "The file you tried to upload is too large.",
        "name_too_long" => "The file name is too long, it is limited to 255 characters.",
        "title_too_long" => "The list title is too long.",
        "too_many_files" => "The list contains too many files.",
        "user_out_of_space" => {
            "Your account does not have enough storage space to upload this file."
        }
        "file_rate_limited_captcha_required" => {
            "This file is using too much bandwidth, a captcha has to be solved on the file's download page first."
        }
        "virus_detected_captcha_required" => {
            "A virus has been detected in this file, a captcha has to be solved on the file's download page first."
        }
        "internal_server_error" => "An internal server error occurred, please try again later.",
        _ => return None,
    };
    Some(message)
}

/// Translate an error-status response into a [`PixeldrainError::Remote`].
///
/// Resolution order: the fixed message for the body's error token, then a
/// generic transport description. The server's own `message` field is
/// never surfaced. Never fails; a body that cannot be read or decoded
/// falls back to the transport description.
pub(crate) async fn translate_error_response(response: reqwest::Response) -> PixeldrainError {
    let status = response.status();
    let url = response.url().to_string();
    let transport_message = format!("HTTP error {status} for {url}");

    let Ok(bytes) = response.bytes().await else {
        return PixeldrainError::Remote {
            value: None,
            message: transport_message,
        };
    };
    match serde_json::from_slice::<StatusMessage>(&bytes) {
        Ok(body) if !body.value.is_empty() => match status_message(&body.value) {
            Some(message) => PixeldrainError::Remote {
                value: Some(body.value),
                message: message.to_string(),
            },
            None => {
                tracing::warn!(%status, value = %body.value, "unmapped error token");
                PixeldrainError::Remote {
                    value: Some(body.value),
                    message: transport_message,
                }
            }
        },
        _ => PixeldrainError::Remote {
            value: None,
            message: transport_message,
        },
    }
}

/// Check HTTP response status before processing body.
pub(crate) async fn check_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, PixeldrainError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(translate_error_response(response).await);
    }
    Ok(response)
}

/// Read a response body while enforcing the size limit.
///
/// Checks the `Content-Length` hint first (if available), then enforces
/// the limit on the actual body bytes.
pub(crate) async fn bytes_with_limit(
    response: reqwest::Response,
) -> Result<bytes::Bytes, PixeldrainError> {
    if let Some(cl) = response.content_length() {
        if cl as usize > MAX_RESPONSE_SIZE {
            return Err(PixeldrainError::ResponseTooLarge { size: cl });
        }
    }
    let bytes = response.bytes().await?;
    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(PixeldrainError::ResponseTooLarge {
            size: bytes.len() as u64,
        });
    }
    Ok(bytes)
}

/// Read a response body with size limit and deserialize as JSON.
pub(crate) async fn json_with_limit<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, PixeldrainError> {
    let bytes = bytes_with_limit(response).await?;
    serde_json::from_slice(&bytes).map_err(Into::into)
}

impl From<reqwest::Error> for PixeldrainError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote {
            value: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PixeldrainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

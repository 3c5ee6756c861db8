//! Error taxonomy of every backend call.
//!
//! Two families matter to the operator: the request never got a usable
//! answer (`Network`, `Http`, `Decode`), or the server answered with
//! `{success: false}` (`Api`). `Unauthorized` ends the session.

use contracts::shared::ApiResponse;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Shown when an error carries no text of its own.
pub const GENERIC_ERROR: &str = "Something went wrong";

const MAX_BODY_IN_MESSAGE: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Session expired, please sign in again")]
    Unauthorized,
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Text for the toast notification.
    pub fn toast_message(&self) -> String {
        let text = match self {
            ApiError::Api(message) => message.trim().to_string(),
            ApiError::Http { status, message } if message.trim().is_empty() => {
                format!("Server error {}", status)
            }
            other => other.to_string(),
        };
        if text.is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            text
        }
    }

    /// The server understood the request and refused it.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, ApiError::Api(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_qs::Error> for ApiError {
    fn from(e: serde_qs::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

/// Decode a response body into the standard envelope.
///
/// A 2xx body that is not an envelope is a `Decode` error; a non-2xx body
/// that is not an envelope is an `Http` error. A non-2xx envelope is kept
/// so its `{success:false, message}` reaches the operator.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiResponse<T>, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let is_ok = (200..300).contains(&status);
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) if !is_ok && envelope.success => Err(ApiError::Http {
            status,
            message: envelope.message,
        }),
        Ok(envelope) => Ok(envelope),
        Err(e) if is_ok => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Http {
            status,
            message: body_excerpt(body),
        }),
    }
}

/// Unwrap a read endpoint.
pub fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode_envelope::<T>(status, body)?
        .into_result()
        .map_err(ApiError::Api)
}

/// Unwrap a write endpoint whose payload is ignored.
pub fn decode_unit(status: u16, body: &str) -> Result<(), ApiError> {
    decode_envelope::<serde_json::Value>(status, body)?
        .into_unit()
        .map_err(ApiError::Api)
}

fn body_excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_BODY_IN_MESSAGE {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(MAX_BODY_IN_MESSAGE).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_success() {
        let v: Vec<u32> =
            decode_data(200, r#"{"success":true,"message":"","data":[1,2,3]}"#).unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_api_failure_keeps_server_message() {
        let err = decode_data::<u32>(
            400,
            r#"{"success":false,"message":"Store is already verified","data":null}"#,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::Api("Store is already verified".into()));
        assert!(err.is_api_failure());
        assert_eq!(err.toast_message(), "Store is already verified");
    }

    #[test]
    fn test_failure_with_ok_status() {
        let err = decode_unit(200, r#"{"success":false,"message":""}"#).unwrap_err();
        assert_eq!(err, ApiError::Api("Request failed".into()));
    }

    #[test]
    fn test_unauthorized() {
        let err = decode_unit(401, "").unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
    }

    #[test]
    fn test_non_envelope_error_body() {
        let err = decode_unit(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: "Bad Gateway".into()
            }
        );
        let err = decode_unit(500, "   ").unwrap_err();
        assert_eq!(err.toast_message(), "Server error 500");
    }

    #[test]
    fn test_non_envelope_success_body_is_decode_error() {
        let err = decode_data::<Vec<u32>>(200, "[1,2,3]").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(500);
        match decode_unit(500, &body).unwrap_err() {
            ApiError::Http { message, .. } => assert_eq!(message.chars().count(), 201),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_write_endpoint_ignores_payload() {
        assert!(decode_unit(200, r#"{"success":true,"message":"Deleted","data":{"id":1}}"#).is_ok());
        assert!(decode_unit(200, r#"{"success":true,"message":"Deleted"}"#).is_ok());
    }
}

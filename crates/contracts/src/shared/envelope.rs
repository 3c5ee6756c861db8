//! Standard response envelope `{success, message, data}`.
//!
//! Every endpoint answers with exactly one envelope shape. Paged endpoints
//! carry a [`PagedResult`](super::PagedResult) in `data`, plain lists carry a
//! `Vec<T>`. Nothing else is accepted.

use serde::{Deserialize, Deserializer, Serialize};

/// Fallback text used when the server reports a failure without a message.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Text used when `success` is true but `data` is missing.
pub const MISSING_DATA: &str = "Response contained no data";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    pub data: Option<T>,
}

/// `"message": null` reads as an empty message.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Server message, or the generic fallback when it is blank.
    pub fn message_or_default(&self) -> String {
        if self.message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            self.message.clone()
        }
    }

    /// Unwrap the payload of a read endpoint.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self.message_or_default());
        }
        self.data.ok_or_else(|| MISSING_DATA.to_string())
    }

    /// Unwrap a write endpoint whose payload is irrelevant.
    pub fn into_unit(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.message_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_data() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"success": true, "message": "", "data": [1, 2]}))
                .unwrap();
        assert_eq!(resp.into_result().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_failure_uses_server_message() {
        let resp: ApiResponse<i32> = serde_json::from_value(
            json!({"success": false, "message": "Product not found", "data": null}),
        )
        .unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "Product not found");
    }

    #[test]
    fn test_failure_without_message_falls_back() {
        let resp: ApiResponse<i32> =
            serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(resp.clone().into_result().unwrap_err(), GENERIC_FAILURE);
        assert_eq!(resp.into_unit().unwrap_err(), GENERIC_FAILURE);
    }

    #[test]
    fn test_null_message_falls_back() {
        let resp: ApiResponse<i32> =
            serde_json::from_value(json!({"success": false, "message": null, "data": null}))
                .unwrap();
        assert_eq!(resp.message, "");
        assert_eq!(resp.into_result().unwrap_err(), GENERIC_FAILURE);

        let ok: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"success": true, "message": null, "data": [4]}))
                .unwrap();
        assert_eq!(ok.into_result().unwrap(), vec![4]);
    }

    #[test]
    fn test_success_without_data() {
        let resp: ApiResponse<i32> =
            serde_json::from_value(json!({"success": true, "message": "ok"})).unwrap();
        assert_eq!(resp.clone().into_result().unwrap_err(), MISSING_DATA);
        assert!(resp.into_unit().is_ok());
    }

    #[test]
    fn test_nested_shape_is_rejected() {
        // `data.data` wrapping is not a valid list envelope
        let parsed = serde_json::from_value::<ApiResponse<Vec<i32>>>(
            json!({"success": true, "message": "", "data": {"data": [1]}}),
        );
        assert!(parsed.is_err());
    }
}

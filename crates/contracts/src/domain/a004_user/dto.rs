use crate::enums::UserRole;
use crate::shared::paging::DEFAULT_PAGE_SIZE;
use crate::shared::record_state::{HasRecordState, RecordState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserListDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl HasRecordState for UserListDto {
    fn record_state(&self) -> RecordState {
        RecordState::from_flags(self.is_active, self.is_deleted)
    }
}

/// Paging parameters for `/api/users` plus the role filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub page_number: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_deleted: bool,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            role: None,
            include_deleted: false,
        }
    }
}

/// `?IsActive=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserActiveQuery {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_user() {
        let u: UserListDto = serde_json::from_value(json!({
            "id": "1e2d3c4b-5a69-4788-9a0b-c1d2e3f4a5b6",
            "fullName": "Ari Moss",
            "email": "ari@example.com",
            "phoneNumber": null,
            "role": "DeliveryAgent",
            "isActive": true,
            "isDeleted": true,
            "createdAt": "2025-01-02T03:04:05Z",
            "lastLoginAt": null
        }))
        .unwrap();
        assert_eq!(u.role, UserRole::DeliveryAgent);
        assert_eq!(u.record_state(), RecordState::Deleted);
        assert!(u.last_login_at.is_none());
    }
}

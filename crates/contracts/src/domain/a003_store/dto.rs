use crate::shared::record_state::{HasRecordState, RecordState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreDto {
    pub id: Uuid,
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub product_count: u64,
    pub created_at: DateTime<Utc>,
}

impl HasRecordState for StoreDto {
    fn record_state(&self) -> RecordState {
        RecordState::from_flags(self.is_active, self.is_deleted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreForm {
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
}

impl From<&StoreDto> for StoreForm {
    fn from(s: &StoreDto) -> Self {
        Self {
            name: s.name.clone(),
            owner_name: s.owner_name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            address: s.address.clone(),
            is_active: s.is_active,
        }
    }
}

/// `?IsVerified=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyStoreQuery {
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_store_with_missing_counters() {
        let s: StoreDto = serde_json::from_value(json!({
            "id": "0b6e8d4a-2c1f-4e3d-8a9b-7c6d5e4f3a2b",
            "name": "North Store",
            "ownerName": "Sam Lee",
            "email": "north@example.com",
            "isActive": false,
            "isDeleted": false,
            "createdAt": "2024-12-31T23:59:59Z"
        }))
        .unwrap();
        assert_eq!(s.product_count, 0);
        assert!(!s.is_verified);
        assert_eq!(s.record_state(), RecordState::Inactive);
    }
}

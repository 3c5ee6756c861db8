use crate::shared::record_state::{HasRecordState, RecordState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product row as returned by `/api/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: i64,
    pub category_name: Option<String>,
    pub store_id: Uuid,
    pub store_name: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductDto {
    /// Price the customer pays right now.
    pub fn effective_price(&self) -> f64 {
        match self.discount_price {
            Some(p) if p > 0.0 && p < self.price => p,
            _ => self.price,
        }
    }
}

impl HasRecordState for ProductDto {
    fn record_state(&self) -> RecordState {
        RecordState::from_flags(self.is_active, self.is_deleted)
    }
}

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub stock_quantity: i64,
    pub category_name: Option<String>,
    pub store_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl From<&ProductDto> for ProductForm {
    fn from(p: &ProductDto) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            sku: p.sku.clone(),
            price: p.price,
            discount_price: p.discount_price,
            stock_quantity: p.stock_quantity,
            category_name: p.category_name.clone(),
            store_id: Some(p.store_id),
            image_url: p.image_url.clone(),
            is_active: p.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": "5f1c2a9e-7d3b-4c1a-9e2f-1a2b3c4d5e6f",
            "name": "Linen shirt",
            "description": null,
            "sku": "LS-001",
            "price": 40.0,
            "discountPrice": 32.5,
            "stockQuantity": 12,
            "categoryName": "Shirts",
            "storeId": "0b6e8d4a-2c1f-4e3d-8a9b-7c6d5e4f3a2b",
            "storeName": "North Store",
            "imageUrl": null,
            "isActive": true,
            "isDeleted": false,
            "createdAt": "2025-03-15T14:02:26Z"
        })
    }

    #[test]
    fn test_decode_product() {
        let p: ProductDto = serde_json::from_value(sample()).unwrap();
        assert_eq!(p.sku, "LS-001");
        assert_eq!(p.stock_quantity, 12);
        assert_eq!(p.record_state(), RecordState::Active);
        assert_eq!(p.effective_price(), 32.5);
    }

    #[test]
    fn test_effective_price_ignores_bogus_discount() {
        let mut p: ProductDto = serde_json::from_value(sample()).unwrap();
        p.discount_price = Some(50.0);
        assert_eq!(p.effective_price(), 40.0);
        p.discount_price = None;
        assert_eq!(p.effective_price(), 40.0);
    }

    #[test]
    fn test_form_from_dto_uses_camel_case() {
        let p: ProductDto = serde_json::from_value(sample()).unwrap();
        let form = ProductForm::from(&p);
        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v["stockQuantity"], 12);
        assert_eq!(v["storeId"], "0b6e8d4a-2c1f-4e3d-8a9b-7c6d5e4f3a2b");
    }
}

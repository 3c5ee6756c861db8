use crate::enums::{OrderStatus, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderItemDto {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub store_name: Option<String>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub is_confirmed: bool,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
}

impl OrderDto {
    /// Case-insensitive match on order number and customer name.
    pub fn matches_search(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.order_number.to_lowercase().contains(&needle)
            || self.customer_name.to_lowercase().contains(&needle)
    }
}

/// `?OrderId=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OrderIdQuery {
    pub order_id: Uuid,
}

/// `?OrderId=&IsConfirmed=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmOrderQuery {
    pub order_id: Uuid,
    pub is_confirmed: bool,
}

/// `?OrderId=&Status=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOrderStatusQuery {
    pub order_id: Uuid,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_order_with_items() {
        let o: OrderDto = serde_json::from_value(json!({
            "id": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
            "orderNumber": "ORD-1001",
            "customerName": "Dana Reyes",
            "customerEmail": null,
            "storeName": "North Store",
            "totalAmount": 85.0,
            "status": "Processing",
            "isConfirmed": true,
            "paymentMethod": "COD",
            "createdAt": "2025-03-15T14:02:26Z",
            "items": [
                {"productId": "5f1c2a9e-7d3b-4c1a-9e2f-1a2b3c4d5e6f", "productName": "Shirt", "quantity": 2, "unitPrice": 42.5}
            ]
        }))
        .unwrap();
        assert_eq!(o.status, OrderStatus::Processing);
        assert!(o.payment_method.is_cod());
        assert_eq!(o.items[0].line_total(), 85.0);
    }

    #[test]
    fn test_matches_search() {
        let o: OrderDto = serde_json::from_value(json!({
            "id": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
            "orderNumber": "ORD-1001",
            "customerName": "Dana Reyes",
            "totalAmount": 1.0,
            "status": "Pending",
            "paymentMethod": "Online",
            "createdAt": "2025-03-15T14:02:26Z"
        }))
        .unwrap();
        assert!(o.matches_search("ord-10"));
        assert!(o.matches_search("reyes"));
        assert!(o.matches_search("  "));
        assert!(!o.matches_search("smith"));
        assert!(o.items.is_empty());
    }

    #[test]
    fn test_query_field_names() {
        let q = ConfirmOrderQuery {
            order_id: Uuid::nil(),
            is_confirmed: true,
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["IsConfirmed"], true);
        assert!(v.get("OrderId").is_some());
    }
}

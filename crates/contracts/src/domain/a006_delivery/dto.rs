use crate::enums::{DeliveryStatus, PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub company_info_id: Uuid,
    pub company_name: String,
    pub tracking_number: Option<String>,
    pub delivery_status: DeliveryStatus,
    #[serde(default)]
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Payment request joined with its delivery record (if one was assigned).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestWithDelivery {
    pub payment_request_id: Uuid,
    pub order_id: Uuid,
    pub order_number: Option<String>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub delivery: Option<DeliveryInfo>,
    pub collected_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl PaymentRequestWithDelivery {
    /// Rows without a delivery record are still pending.
    pub fn delivery_status(&self) -> DeliveryStatus {
        self.delivery
            .as_ref()
            .map(|d| d.delivery_status)
            .unwrap_or(DeliveryStatus::Pending)
    }

    pub fn is_delivered(&self) -> bool {
        self.delivery.as_ref().map(|d| d.is_delivered).unwrap_or(false)
    }

    pub fn company_info_id(&self) -> Option<Uuid> {
        self.delivery.as_ref().map(|d| d.company_info_id)
    }

    /// COD cash still to be collected from the courier.
    pub fn is_cod_outstanding(&self) -> bool {
        self.payment_method.is_cod() && self.payment_status != PaymentStatus::CodCollected
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCompany {
    pub id: Uuid,
    pub name: String,
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// `?PaymentRequestId=&CompanyInfoId=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AssignDeliveryQuery {
    pub payment_request_id: Uuid,
    pub company_info_id: Uuid,
}

/// `?PaymentRequestId=&CompanyInfoId=&IsDelivered=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveredQuery {
    pub payment_request_id: Uuid,
    pub company_info_id: Uuid,
    pub is_delivered: bool,
}

/// `?PaymentRequestId=&DeliveryStatus=&Notes=&CollectedAmount=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CollectCodPaymentQuery {
    pub payment_request_id: Uuid,
    pub delivery_status: DeliveryStatus,
    pub notes: String,
    pub collected_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(payment_method: &str, payment_status: &str, delivery: serde_json::Value) -> PaymentRequestWithDelivery {
        serde_json::from_value(json!({
            "paymentRequestId": "aa0e8400-e29b-41d4-a716-446655440000",
            "orderId": "bb0e8400-e29b-41d4-a716-446655440000",
            "orderNumber": "ORD-7",
            "customerName": "Kim Park",
            "amount": 120.0,
            "paymentMethod": payment_method,
            "paymentStatus": payment_status,
            "delivery": delivery,
            "createdAt": "2025-02-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_delivery_is_pending() {
        let r = row("COD", "CodPending", serde_json::Value::Null);
        assert_eq!(r.delivery_status(), DeliveryStatus::Pending);
        assert!(!r.is_delivered());
        assert!(r.company_info_id().is_none());
        assert!(r.is_cod_outstanding());
    }

    #[test]
    fn test_delivery_record_is_used() {
        let r = row(
            "Online",
            "Paid",
            json!({
                "companyInfoId": "cc0e8400-e29b-41d4-a716-446655440000",
                "companyName": "FastShip",
                "deliveryStatus": "InTransit",
                "isDelivered": false
            }),
        );
        assert_eq!(r.delivery_status(), DeliveryStatus::InTransit);
        assert!(r.company_info_id().is_some());
        assert!(!r.is_cod_outstanding());
    }

    #[test]
    fn test_collected_cod_is_not_outstanding() {
        let r = row("COD", "CodCollected", serde_json::Value::Null);
        assert!(!r.is_cod_outstanding());
    }
}

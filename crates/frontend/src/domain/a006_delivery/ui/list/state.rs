use crate::shared::config::config;
use contracts::domain::a006_delivery::{DeliveryCompany, PaymentRequestWithDelivery};
use contracts::enums::DeliveryStatus;
use leptos::prelude::*;

/// The delivery endpoint returns every payment request; filtering and paging are local.
#[derive(Clone, Debug)]
pub struct DeliveryListState {
    pub items: Vec<PaymentRequestWithDelivery>,
    pub companies: Vec<DeliveryCompany>,
    pub search: String,
    pub delivery_status: Option<DeliveryStatus>,
    pub cod_only: bool,
    pub page: u32,
    pub page_size: u32,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for DeliveryListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            companies: Vec::new(),
            search: String::new(),
            delivery_status: None,
            cod_only: false,
            page: 1,
            page_size: config().ui.page_size,
            sort_field: "created_at".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

impl DeliveryListState {
    pub fn filtered(&self) -> Vec<PaymentRequestWithDelivery> {
        filter_rows(&self.items, &self.search, self.delivery_status, self.cod_only)
    }

    pub fn active_companies(&self) -> Vec<DeliveryCompany> {
        self.companies.iter().filter(|c| c.is_active).cloned().collect()
    }
}

pub fn create_state() -> RwSignal<DeliveryListState> {
    RwSignal::new(DeliveryListState::default())
}

fn matches_search(row: &PaymentRequestWithDelivery, needle: &str) -> bool {
    let fields = [
        Some(row.customer_name.as_str()),
        row.order_number.as_deref(),
        row.customer_phone.as_deref(),
        row.delivery.as_ref().and_then(|d| d.tracking_number.as_deref()),
        row.delivery.as_ref().map(|d| d.company_name.as_str()),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(needle))
}

pub fn filter_rows(
    items: &[PaymentRequestWithDelivery],
    search: &str,
    delivery_status: Option<DeliveryStatus>,
    cod_only: bool,
) -> Vec<PaymentRequestWithDelivery> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|r| delivery_status.map_or(true, |s| r.delivery_status() == s))
        .filter(|r| !cod_only || r.is_cod_outstanding())
        .filter(|r| needle.is_empty() || matches_search(r, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(customer: &str, method: &str, status: &str, delivery: serde_json::Value) -> PaymentRequestWithDelivery {
        serde_json::from_value(json!({
            "paymentRequestId": uuid::Uuid::new_v4(),
            "orderId": uuid::Uuid::new_v4(),
            "customerName": customer,
            "amount": 42.0,
            "paymentMethod": method,
            "paymentStatus": status,
            "delivery": delivery,
            "createdAt": "2025-02-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_rows() {
        let items = vec![
            row("Kim Park", "COD", "CodPending", serde_json::Value::Null),
            row(
                "Lee Moss",
                "Online",
                "Paid",
                json!({
                    "companyInfoId": uuid::Uuid::new_v4(),
                    "companyName": "FastShip",
                    "trackingNumber": "TRK-991",
                    "deliveryStatus": "InTransit"
                }),
            ),
            row("Kim Lee", "COD", "CodCollected", serde_json::Value::Null),
        ];

        assert_eq!(filter_rows(&items, "", None, false).len(), 3);
        assert_eq!(filter_rows(&items, "kim", None, false).len(), 2);
        assert_eq!(filter_rows(&items, "trk-991", None, false).len(), 1);
        assert_eq!(filter_rows(&items, "", Some(DeliveryStatus::Pending), false).len(), 2);

        let cod = filter_rows(&items, "", None, true);
        assert_eq!(cod.len(), 1);
        assert_eq!(cod[0].customer_name, "Kim Park");
    }
}

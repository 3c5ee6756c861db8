use crate::shared::config::config;
use contracts::domain::a002_order::OrderDto;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// The order endpoint returns every order; filtering and paging are local.
#[derive(Clone, Debug)]
pub struct OrderListState {
    pub items: Vec<OrderDto>,
    pub search: String,
    pub status: Option<OrderStatus>,
    pub page: u32,
    pub page_size: u32,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            status: None,
            page: 1,
            page_size: config().ui.page_size,
            sort_field: "created_at".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

impl OrderListState {
    pub fn filtered(&self) -> Vec<OrderDto> {
        filter_orders(&self.items, &self.search, self.status)
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

pub fn filter_orders(items: &[OrderDto], search: &str, status: Option<OrderStatus>) -> Vec<OrderDto> {
    items
        .iter()
        .filter(|o| status.map_or(true, |s| o.status == s))
        .filter(|o| o.matches_search(search))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(number: &str, customer: &str, status: &str) -> OrderDto {
        serde_json::from_value(json!({
            "id": uuid::Uuid::new_v4(),
            "orderNumber": number,
            "customerName": customer,
            "totalAmount": 10.0,
            "status": status,
            "paymentMethod": "Online",
            "createdAt": "2025-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let items = vec![
            order("ORD-1", "Dana Reyes", "Pending"),
            order("ORD-2", "Lee Park", "Shipped"),
            order("ORD-3", "Dana Cole", "Shipped"),
        ];
        assert_eq!(filter_orders(&items, "", None).len(), 3);
        assert_eq!(filter_orders(&items, "dana", None).len(), 2);

        let shipped = filter_orders(&items, "dana", Some(OrderStatus::Shipped));
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].order_number, "ORD-3");

        assert!(filter_orders(&items, "", Some(OrderStatus::Cancelled)).is_empty());
    }

    #[test]
    fn test_default_sort_newest_first() {
        let s = OrderListState::default();
        assert_eq!(s.sort_field, "created_at");
        assert!(!s.sort_ascending);
        assert_eq!(s.page, 1);
    }
}

use serde::{Deserialize, Serialize};

/// Order status as stored by the backend.
///
/// The client writes any value the operator picks; legality of the
/// transition is the server's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Returned,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "success",
            OrderStatus::Confirmed | OrderStatus::Processing | OrderStatus::Shipped => "primary",
            OrderStatus::Pending => "warning",
            OrderStatus::Cancelled | OrderStatus::Returned => "error",
            OrderStatus::Unknown => "neutral",
        }
    }

    /// Orders in these states do not count towards revenue.
    pub fn is_revenue_excluded(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Returned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&OrderStatus::Shipped).unwrap(), "\"Shipped\"");
        let s: OrderStatus = serde_json::from_str("\"Returned\"").unwrap();
        assert_eq!(s, OrderStatus::Returned);
    }

    #[test]
    fn test_unknown_value_does_not_fail() {
        let s: OrderStatus = serde_json::from_str("\"OnHold\"").unwrap();
        assert_eq!(s, OrderStatus::Unknown);
    }

    #[test]
    fn test_from_code_roundtrip_for_all() {
        for s in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(OrderStatus::from_code("Unknown"), None);
    }
}

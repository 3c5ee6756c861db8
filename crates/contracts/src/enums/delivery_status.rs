use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Assigned,
    PickedUp,
    InTransit,
    Delivered,
    Failed,
    Returned,
    #[serde(other)]
    Unknown,
}

impl DeliveryStatus {
    pub fn all() -> Vec<DeliveryStatus> {
        vec![
            DeliveryStatus::Pending,
            DeliveryStatus::Assigned,
            DeliveryStatus::PickedUp,
            DeliveryStatus::InTransit,
            DeliveryStatus::Delivered,
            DeliveryStatus::Failed,
            DeliveryStatus::Returned,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Assigned => "Assigned",
            DeliveryStatus::PickedUp => "PickedUp",
            DeliveryStatus::InTransit => "InTransit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Failed => "Failed",
            DeliveryStatus::Returned => "Returned",
            DeliveryStatus::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::PickedUp => "Picked up",
            DeliveryStatus::InTransit => "In transit",
            other => other.code(),
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "success",
            DeliveryStatus::Assigned | DeliveryStatus::PickedUp | DeliveryStatus::InTransit => {
                "primary"
            }
            DeliveryStatus::Pending => "warning",
            DeliveryStatus::Failed | DeliveryStatus::Returned => "error",
            DeliveryStatus::Unknown => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::InTransit).unwrap(),
            "\"InTransit\""
        );
        let s: DeliveryStatus = serde_json::from_str("\"PickedUp\"").unwrap();
        assert_eq!(s, DeliveryStatus::PickedUp);
        let s: DeliveryStatus = serde_json::from_str("\"Lost\"").unwrap();
        assert_eq!(s, DeliveryStatus::Unknown);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(DeliveryStatus::InTransit.display_name(), "In transit");
        assert_eq!(DeliveryStatus::Delivered.display_name(), "Delivered");
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BannerEventStatus {
    Draft,
    Scheduled,
    Active,
    Paused,
    Expired,
    #[serde(other)]
    Unknown,
}

impl BannerEventStatus {
    pub fn all() -> Vec<BannerEventStatus> {
        vec![
            BannerEventStatus::Draft,
            BannerEventStatus::Scheduled,
            BannerEventStatus::Active,
            BannerEventStatus::Paused,
            BannerEventStatus::Expired,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            BannerEventStatus::Draft => "Draft",
            BannerEventStatus::Scheduled => "Scheduled",
            BannerEventStatus::Active => "Active",
            BannerEventStatus::Paused => "Paused",
            BannerEventStatus::Expired => "Expired",
            BannerEventStatus::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            BannerEventStatus::Active => "success",
            BannerEventStatus::Scheduled => "primary",
            BannerEventStatus::Paused | BannerEventStatus::Draft => "warning",
            BannerEventStatus::Expired => "error",
            BannerEventStatus::Unknown => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BannerEventType {
    FlashSale,
    Seasonal,
    Clearance,
    NewArrival,
    Holiday,
    Promotional,
    #[serde(other)]
    Unknown,
}

impl BannerEventType {
    pub fn all() -> Vec<BannerEventType> {
        vec![
            BannerEventType::FlashSale,
            BannerEventType::Seasonal,
            BannerEventType::Clearance,
            BannerEventType::NewArrival,
            BannerEventType::Holiday,
            BannerEventType::Promotional,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            BannerEventType::FlashSale => "FlashSale",
            BannerEventType::Seasonal => "Seasonal",
            BannerEventType::Clearance => "Clearance",
            BannerEventType::NewArrival => "NewArrival",
            BannerEventType::Holiday => "Holiday",
            BannerEventType::Promotional => "Promotional",
            BannerEventType::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BannerEventType::FlashSale => "Flash sale",
            BannerEventType::NewArrival => "New arrival",
            other => other.code(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DiscountType {
    #[default]
    Percentage,
    FixedAmount,
}

impl DiscountType {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::FixedAmount => "FixedAmount",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Percentage" => Some(DiscountType::Percentage),
            "FixedAmount" => Some(DiscountType::FixedAmount),
            _ => None,
        }
    }

    /// "15%" or "15.00" depending on the type.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            DiscountType::Percentage => format!("{}%", value),
            DiscountType::FixedAmount => format!("{:.2}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for s in BannerEventStatus::all() {
            assert_eq!(BannerEventStatus::from_code(s.code()), Some(s));
        }
        let s: BannerEventStatus = serde_json::from_str("\"Archived\"").unwrap();
        assert_eq!(s, BannerEventStatus::Unknown);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(BannerEventType::FlashSale.display_name(), "Flash sale");
        assert_eq!(BannerEventType::Holiday.display_name(), "Holiday");
    }

    #[test]
    fn test_discount_format() {
        assert_eq!(DiscountType::Percentage.format_value(15.0), "15%");
        assert_eq!(DiscountType::FixedAmount.format_value(15.0), "15.00");
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingStatus {
    Pending,
    Paid,
    Overdue,
    #[serde(other)]
    Unknown,
}

impl BillingStatus {
    pub fn all() -> Vec<BillingStatus> {
        vec![BillingStatus::Pending, BillingStatus::Paid, BillingStatus::Overdue]
    }

    pub fn code(&self) -> &'static str {
        match self {
            BillingStatus::Pending => "Pending",
            BillingStatus::Paid => "Paid",
            BillingStatus::Overdue => "Overdue",
            BillingStatus::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            BillingStatus::Paid => "success",
            BillingStatus::Pending => "warning",
            BillingStatus::Overdue => "error",
            BillingStatus::Unknown => "neutral",
        }
    }
}

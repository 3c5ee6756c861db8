use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Seller,
    Customer,
    DeliveryAgent,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::Seller,
            UserRole::Customer,
            UserRole::DeliveryAgent,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Seller => "Seller",
            UserRole::Customer => "Customer",
            UserRole::DeliveryAgent => "DeliveryAgent",
            UserRole::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::DeliveryAgent => "Delivery agent",
            other => other.code(),
        }
    }
}

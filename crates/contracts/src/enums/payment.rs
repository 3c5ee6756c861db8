use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "COD")]
    Cod,
    Online,
    #[serde(other)]
    Unknown,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on delivery",
            PaymentMethod::Online => "Online",
            PaymentMethod::Unknown => "Unknown",
        }
    }

    pub fn is_cod(&self) -> bool {
        matches!(self, PaymentMethod::Cod)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
    CodPending,
    CodCollected,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::CodPending => "COD pending",
            PaymentStatus::CodCollected => "COD collected",
            PaymentStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PaymentStatus::Paid | PaymentStatus::CodCollected => "success",
            PaymentStatus::Pending | PaymentStatus::CodPending => "warning",
            PaymentStatus::Failed => "error",
            PaymentStatus::Refunded | PaymentStatus::Unknown => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cod_wire_name() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"COD\"");
        let m: PaymentMethod = serde_json::from_str("\"COD\"").unwrap();
        assert!(m.is_cod());
        let m: PaymentMethod = serde_json::from_str("\"Wallet\"").unwrap();
        assert_eq!(m, PaymentMethod::Unknown);
    }

    #[test]
    fn test_payment_status_decode() {
        let s: PaymentStatus = serde_json::from_str("\"CodCollected\"").unwrap();
        assert_eq!(s, PaymentStatus::CodCollected);
        assert_eq!(s.badge_variant(), "success");
    }
}

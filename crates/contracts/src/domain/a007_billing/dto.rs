use crate::enums::BillingStatus;
use crate::shared::paging::DEFAULT_PAGE_SIZE;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Commission statement of one store for one billing period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatement {
    pub id: Uuid,
    pub store_id: Uuid,
    pub store_name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub gross_sales: f64,
    /// Percent, e.g. `12.5`
    #[serde(default)]
    pub commission_rate: f64,
    #[serde(default)]
    pub commission_amount: f64,
    #[serde(default)]
    pub net_payout: f64,
    pub status: BillingStatus,
    pub paid_at: Option<DateTime<Utc>>,
}

impl BillingStatement {
    pub fn period_label(&self) -> String {
        format!(
            "{} – {}",
            self.period_start.format("%d.%m.%Y"),
            self.period_end.format("%d.%m.%Y")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingQuery {
    pub page_number: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BillingStatus>,
}

impl Default for BillingQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_statement() {
        let s: BillingStatement = serde_json::from_value(json!({
            "id": "dd0e8400-e29b-41d4-a716-446655440000",
            "storeId": "ee0e8400-e29b-41d4-a716-446655440000",
            "storeName": "North Store",
            "periodStart": "2025-01-01",
            "periodEnd": "2025-01-31",
            "grossSales": 1000.0,
            "commissionRate": 10.0,
            "commissionAmount": 100.0,
            "netPayout": 900.0,
            "status": "Overdue",
            "paidAt": null
        }))
        .unwrap();
        assert_eq!(s.status, BillingStatus::Overdue);
        assert_eq!(s.period_label(), "01.01.2025 – 31.01.2025");
    }
}

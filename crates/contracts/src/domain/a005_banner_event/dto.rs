use crate::enums::{BannerEventStatus, BannerEventType, DiscountType};
use crate::shared::paging::DEFAULT_PAGE_SIZE;
use crate::shared::record_state::{HasRecordState, RecordState};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-computed discount totals of a banner event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSummary {
    #[serde(default)]
    pub total_discount_given: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub average_discount: f64,
}

/// Promotional campaign as returned by `/api/banner-events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannerEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub banner_image_url: Option<String>,
    pub event_type: BannerEventType,
    pub status: BannerEventStatus,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    pub max_discount_amount: Option<f64>,
    pub min_order_amount: Option<f64>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub usage_limit: Option<u64>,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub product_count: u64,
    pub discount_summary: Option<DiscountSummary>,
}

impl BannerEvent {
    /// Totals, with an absent summary read as all zeros.
    pub fn summary_or_default(&self) -> DiscountSummary {
        self.discount_summary.unwrap_or_default()
    }

    /// `"12 / 100"` or `"12 / Unlimited"`.
    pub fn usage_label(&self) -> String {
        match self.usage_limit {
            Some(limit) => format!("{} / {}", self.usage_count, limit),
            None => format!("{} / Unlimited", self.usage_count),
        }
    }
}

impl HasRecordState for BannerEvent {
    fn record_state(&self) -> RecordState {
        RecordState::from_flags(self.is_active, self.is_deleted)
    }
}

/// Body of create/update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannerEventForm {
    pub title: String,
    pub description: Option<String>,
    pub banner_image_url: Option<String>,
    pub event_type: BannerEventType,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub max_discount_amount: Option<f64>,
    pub min_order_amount: Option<f64>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub usage_limit: Option<u64>,
    pub priority: i32,
    pub is_active: bool,
}

impl Default for BannerEventForm {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: String::new(),
            description: None,
            banner_image_url: None,
            event_type: BannerEventType::Promotional,
            discount_type: DiscountType::Percentage,
            discount_value: 0.0,
            max_discount_amount: None,
            min_order_amount: None,
            start_date: now,
            end_date: now + chrono::Duration::days(7),
            usage_limit: None,
            priority: 0,
            is_active: true,
        }
    }
}

impl From<&BannerEvent> for BannerEventForm {
    fn from(e: &BannerEvent) -> Self {
        Self {
            title: e.title.clone(),
            description: e.description.clone(),
            banner_image_url: e.banner_image_url.clone(),
            event_type: e.event_type,
            discount_type: e.discount_type,
            discount_value: e.discount_value,
            max_discount_amount: e.max_discount_amount,
            min_order_amount: e.min_order_amount,
            start_date: e.start_date,
            end_date: e.end_date,
            usage_limit: e.usage_limit,
            priority: e.priority,
            is_active: e.is_active,
        }
    }
}

/// Paging and filters of `GET /api/banner-events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannerEventQuery {
    pub page_number: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BannerEventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<BannerEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_deleted: bool,
}

impl Default for BannerEventQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            status: None,
            event_type: None,
            start_date: None,
            end_date: None,
            include_deleted: false,
        }
    }
}

impl BannerEventQuery {
    /// Number of filters beyond paging that are currently set.
    pub fn active_filter_count(&self) -> usize {
        [
            self.search.is_some(),
            self.status.is_some(),
            self.event_type.is_some(),
            self.start_date.is_some(),
            self.end_date.is_some(),
            self.include_deleted,
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// `?Status=`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BannerEventStatusQuery {
    pub status: BannerEventStatus,
}

/// Body of `PUT /api/banner-events/{id}/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssignProductsRequest {
    pub product_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_json() -> serde_json::Value {
        json!({
            "id": "3c2b1a09-8f7e-4d6c-b5a4-392817065f4e",
            "title": "Spring Flash Sale",
            "description": "Up to 30% off",
            "bannerImageUrl": null,
            "eventType": "FlashSale",
            "status": "Active",
            "discountType": "Percentage",
            "discountValue": 30.0,
            "maxDiscountAmount": 50.0,
            "minOrderAmount": null,
            "startDate": "2025-03-01T00:00:00Z",
            "endDate": "2025-03-31T23:59:59Z",
            "usageLimit": 200,
            "usageCount": 50,
            "priority": 2,
            "isActive": true,
            "isDeleted": false,
            "productCount": 14,
            "discountSummary": {
                "totalDiscountGiven": 1250.5,
                "totalOrders": 48,
                "averageDiscount": 26.05
            }
        })
    }

    #[test]
    fn test_decode_banner_event() {
        let e: BannerEvent = serde_json::from_value(event_json()).unwrap();
        assert_eq!(e.event_type, BannerEventType::FlashSale);
        assert_eq!(e.status, BannerEventStatus::Active);
        assert_eq!(e.summary_or_default().total_orders, 48);
        assert_eq!(e.usage_label(), "50 / 200");
    }

    #[test]
    fn test_missing_summary_reads_as_zero() {
        let mut v = event_json();
        v.as_object_mut().unwrap().remove("discountSummary");
        v["usageLimit"] = serde_json::Value::Null;
        let e: BannerEvent = serde_json::from_value(v).unwrap();
        let s = e.summary_or_default();
        assert_eq!(s.total_discount_given, 0.0);
        assert_eq!(s.total_orders, 0);
        assert_eq!(e.usage_label(), "50 / Unlimited");
    }

    #[test]
    fn test_partial_summary_fields_default() {
        let mut v = event_json();
        v["discountSummary"] = json!({"totalOrders": 3});
        let e: BannerEvent = serde_json::from_value(v).unwrap();
        let s = e.summary_or_default();
        assert_eq!(s.total_orders, 3);
        assert_eq!(s.average_discount, 0.0);
    }

    #[test]
    fn test_active_filter_count() {
        let mut q = BannerEventQuery::default();
        assert_eq!(q.active_filter_count(), 0);
        q.status = Some(BannerEventStatus::Paused);
        q.start_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        q.include_deleted = true;
        assert_eq!(q.active_filter_count(), 3);
    }

    #[test]
    fn test_form_roundtrips_event_fields() {
        let e: BannerEvent = serde_json::from_value(event_json()).unwrap();
        let form = BannerEventForm::from(&e);
        assert_eq!(form.discount_value, 30.0);
        assert_eq!(form.usage_limit, Some(200));
        let v = serde_json::to_value(&form).unwrap();
        assert_eq!(v["eventType"], "FlashSale");
        assert_eq!(v["discountType"], "Percentage");
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Headline numbers of the analytics dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BannerEventSummary {
    pub total_events: usize,
    pub active_events: usize,
    pub scheduled_events: usize,
    pub total_usage: u64,
    pub total_discount_given: f64,
    pub total_orders: u64,
    /// Mean usage percent over events that have a usage cap
    pub average_usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageRow {
    pub id: Uuid,
    pub title: String,
    pub usage_count: u64,
    pub usage_limit: Option<u64>,
    pub usage_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountRow {
    pub id: Uuid,
    pub title: String,
    pub total_discount_given: f64,
    pub total_orders: u64,
    pub average_discount: f64,
}

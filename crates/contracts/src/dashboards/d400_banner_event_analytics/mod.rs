//! Banner event analytics: chart-ready rows computed from one fetched page of events.

pub mod analytics;
pub mod dto;

pub use analytics::*;
pub use dto::{BannerEventSummary, DiscountRow, UsageRow};

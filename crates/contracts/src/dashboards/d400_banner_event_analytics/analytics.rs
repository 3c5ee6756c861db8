use super::dto::{BannerEventSummary, DiscountRow, UsageRow};
use crate::dashboards::chart::{count_by, ChartSlice};
use crate::domain::a005_banner_event::BannerEvent;
use crate::enums::{BannerEventStatus, BannerEventType};
use std::cmp::Ordering;

/// `usage_count / usage_limit * 100`, capped at 100. `None` without a cap.
pub fn usage_percent(event: &BannerEvent) -> Option<f64> {
    match event.usage_limit {
        Some(limit) if limit > 0 => {
            Some((event.usage_count as f64 / limit as f64 * 100.0).min(100.0))
        }
        _ => None,
    }
}

pub fn summarize(events: &[BannerEvent]) -> BannerEventSummary {
    let percents: Vec<f64> = events.iter().filter_map(usage_percent).collect();
    let average_usage_percent = if percents.is_empty() {
        0.0
    } else {
        percents.iter().sum::<f64>() / percents.len() as f64
    };

    BannerEventSummary {
        total_events: events.len(),
        active_events: events
            .iter()
            .filter(|e| e.status == BannerEventStatus::Active)
            .count(),
        scheduled_events: events
            .iter()
            .filter(|e| e.status == BannerEventStatus::Scheduled)
            .count(),
        total_usage: events.iter().map(|e| e.usage_count).sum(),
        total_discount_given: events
            .iter()
            .map(|e| e.summary_or_default().total_discount_given)
            .sum(),
        total_orders: events
            .iter()
            .map(|e| e.summary_or_default().total_orders)
            .sum(),
        average_usage_percent,
    }
}

pub fn status_distribution(events: &[BannerEvent]) -> Vec<ChartSlice> {
    count_by(
        events,
        &BannerEventStatus::all(),
        |s| s.code().to_string(),
        |e| e.status,
    )
}

pub fn type_distribution(events: &[BannerEvent]) -> Vec<ChartSlice> {
    count_by(
        events,
        &BannerEventType::all(),
        |t| t.display_name().to_string(),
        |e| e.event_type,
    )
}

/// One row per event, most used first.
pub fn usage_rows(events: &[BannerEvent]) -> Vec<UsageRow> {
    let mut rows: Vec<UsageRow> = events
        .iter()
        .map(|e| UsageRow {
            id: e.id,
            title: e.title.clone(),
            usage_count: e.usage_count,
            usage_limit: e.usage_limit,
            usage_percent: usage_percent(e),
        })
        .collect();
    rows.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    rows
}

/// One row per event, largest total discount first.
pub fn discount_rows(events: &[BannerEvent]) -> Vec<DiscountRow> {
    let mut rows: Vec<DiscountRow> = events
        .iter()
        .map(|e| {
            let s = e.summary_or_default();
            DiscountRow {
                id: e.id,
                title: e.title.clone(),
                total_discount_given: s.total_discount_given,
                total_orders: s.total_orders,
                average_discount: s.average_discount,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_discount_given
            .partial_cmp(&a.total_discount_given)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

pub fn top_by_usage(events: &[BannerEvent], n: usize) -> Vec<UsageRow> {
    usage_rows(events).into_iter().take(n).collect()
}

/// Bar series of the usage percentage of capped events.
pub fn usage_percent_series(events: &[BannerEvent], n: usize) -> Vec<ChartSlice> {
    usage_rows(events)
        .into_iter()
        .filter_map(|r| r.usage_percent.map(|p| ChartSlice::new(r.title, p)))
        .take(n)
        .collect()
}

/// Bar series of the total discount per event.
pub fn discount_series(events: &[BannerEvent], n: usize) -> Vec<ChartSlice> {
    discount_rows(events)
        .into_iter()
        .filter(|r| r.total_discount_given > 0.0)
        .take(n)
        .map(|r| ChartSlice::new(r.title, r.total_discount_given))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_banner_event::DiscountSummary;
    use crate::enums::DiscountType;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn event(
        title: &str,
        status: BannerEventStatus,
        event_type: BannerEventType,
        usage_count: u64,
        usage_limit: Option<u64>,
        discount: Option<f64>,
    ) -> BannerEvent {
        BannerEvent {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            banner_image_url: None,
            event_type,
            status,
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            max_discount_amount: None,
            min_order_amount: None,
            start_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            usage_limit,
            usage_count,
            priority: 0,
            is_active: true,
            is_deleted: false,
            product_count: 0,
            discount_summary: discount.map(|d| DiscountSummary {
                total_discount_given: d,
                total_orders: 4,
                average_discount: d / 4.0,
            }),
        }
    }

    fn sample() -> Vec<BannerEvent> {
        vec![
            event("A", BannerEventStatus::Active, BannerEventType::FlashSale, 50, Some(100), Some(200.0)),
            event("B", BannerEventStatus::Active, BannerEventType::Holiday, 30, Some(20), None),
            event("C", BannerEventStatus::Scheduled, BannerEventType::FlashSale, 5, None, Some(40.0)),
            event("D", BannerEventStatus::Expired, BannerEventType::Clearance, 0, Some(0), Some(0.0)),
        ]
    }

    #[test]
    fn test_usage_percent() {
        let events = sample();
        assert_eq!(usage_percent(&events[0]), Some(50.0));
        // over the cap is clamped
        assert_eq!(usage_percent(&events[1]), Some(100.0));
        assert_eq!(usage_percent(&events[2]), None);
        // zero cap means no cap
        assert_eq!(usage_percent(&events[3]), None);
    }

    #[test]
    fn test_summarize() {
        let s = summarize(&sample());
        assert_eq!(s.total_events, 4);
        assert_eq!(s.active_events, 2);
        assert_eq!(s.scheduled_events, 1);
        assert_eq!(s.total_usage, 85);
        assert_eq!(s.total_discount_given, 240.0);
        // B has no summary, so 3 events contribute 4 orders each
        assert_eq!(s.total_orders, 12);
        assert_eq!(s.average_usage_percent, 75.0);
    }

    #[test]
    fn test_summarize_empty() {
        let s = summarize(&[]);
        assert_eq!(s, BannerEventSummary::default());
    }

    #[test]
    fn test_distributions() {
        let events = sample();
        assert_eq!(
            status_distribution(&events),
            vec![
                ChartSlice::new("Scheduled", 1.0),
                ChartSlice::new("Active", 2.0),
                ChartSlice::new("Expired", 1.0),
            ]
        );
        assert_eq!(
            type_distribution(&events),
            vec![
                ChartSlice::new("Flash sale", 2.0),
                ChartSlice::new("Clearance", 1.0),
                ChartSlice::new("Holiday", 1.0),
            ]
        );
        assert!(status_distribution(&[]).is_empty());
    }

    #[test]
    fn test_usage_rows_sorted_desc() {
        let rows = usage_rows(&sample());
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
        assert_eq!(top_by_usage(&sample(), 2).len(), 2);
    }

    #[test]
    fn test_discount_rows_and_series() {
        let rows = discount_rows(&sample());
        assert_eq!(rows[0].title, "A");
        assert_eq!(rows[1].title, "C");
        assert_eq!(rows[0].average_discount, 50.0);
        let series = discount_series(&sample(), 10);
        assert_eq!(
            series,
            vec![ChartSlice::new("A", 200.0), ChartSlice::new("C", 40.0)]
        );
    }

    #[test]
    fn test_usage_percent_series_skips_uncapped() {
        let series = usage_percent_series(&sample(), 10);
        assert_eq!(
            series,
            vec![ChartSlice::new("A", 50.0), ChartSlice::new("B", 100.0)]
        );
    }
}

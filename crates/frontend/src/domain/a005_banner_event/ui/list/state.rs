use crate::shared::config::config;
use crate::shared::date_utils::parse_input_date;
use contracts::domain::a005_banner_event::{BannerEvent, BannerEventQuery};
use contracts::enums::{BannerEventStatus, BannerEventType};
use contracts::shared::PagedResult;
use leptos::prelude::*;

/// Raw filter inputs as typed into the filter panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerEventFilters {
    pub search: String,
    pub status: Option<BannerEventStatus>,
    pub event_type: Option<BannerEventType>,
    pub start_date: String,
    pub end_date: String,
    pub include_deleted: bool,
}

#[derive(Clone, Debug)]
pub struct BannerEventListState {
    pub query: BannerEventQuery,
    pub page: PagedResult<BannerEvent>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for BannerEventListState {
    fn default() -> Self {
        let page_size = config().ui.page_size;
        Self {
            query: BannerEventQuery {
                page_size,
                ..BannerEventQuery::default()
            },
            page: PagedResult::empty(page_size),
            sort_field: "priority".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

impl BannerEventListState {
    /// Copies the panel inputs into the query; unparsable dates are dropped.
    pub fn apply_filters(&mut self, filters: &BannerEventFilters) {
        let search = filters.search.trim();
        self.query.search = (!search.is_empty()).then(|| search.to_string());
        self.query.status = filters.status;
        self.query.event_type = filters.event_type;
        self.query.start_date = parse_input_date(&filters.start_date);
        self.query.end_date = parse_input_date(&filters.end_date);
        self.query.include_deleted = filters.include_deleted;
        self.query.page_number = 1;
    }

    pub fn reset_filters(&mut self) {
        let page_size = self.query.page_size;
        self.query = BannerEventQuery {
            page_size,
            ..BannerEventQuery::default()
        };
    }
}

pub fn create_state() -> RwSignal<BannerEventListState> {
    RwSignal::new(BannerEventListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_apply_filters() {
        let mut s = BannerEventListState::default();
        s.query.page_number = 4;
        s.apply_filters(&BannerEventFilters {
            search: " flash ".to_string(),
            status: Some(BannerEventStatus::Active),
            event_type: None,
            start_date: "2025-03-01".to_string(),
            end_date: "not a date".to_string(),
            include_deleted: false,
        });
        assert_eq!(s.query.search.as_deref(), Some("flash"));
        assert_eq!(s.query.start_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert!(s.query.end_date.is_none());
        assert_eq!(s.query.page_number, 1);
        assert_eq!(s.query.active_filter_count(), 3);
    }

    #[test]
    fn test_reset_keeps_page_size() {
        let mut s = BannerEventListState::default();
        s.query.page_size = 50;
        s.query.status = Some(BannerEventStatus::Paused);
        s.reset_filters();
        assert_eq!(s.query.page_size, 50);
        assert_eq!(s.query.active_filter_count(), 0);
    }
}

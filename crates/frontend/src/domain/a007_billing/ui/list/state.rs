use crate::shared::config::config;
use contracts::domain::a007_billing::{BillingQuery, BillingStatement};
use contracts::enums::BillingStatus;
use contracts::shared::PagedResult;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct BillingListState {
    pub query: BillingQuery,
    pub page: PagedResult<BillingStatement>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for BillingListState {
    fn default() -> Self {
        let page_size = config().ui.page_size;
        Self {
            query: BillingQuery {
                page_size,
                ..BillingQuery::default()
            },
            page: PagedResult::empty(page_size),
            sort_field: "period".to_string(),
            sort_ascending: false,
            is_loaded: false,
        }
    }
}

impl BillingListState {
    pub fn set_filters(&mut self, search: &str, status: Option<BillingStatus>) {
        let trimmed = search.trim();
        self.query.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.query.status = status;
        self.query.page_number = 1;
    }
}

pub fn create_state() -> RwSignal<BillingListState> {
    RwSignal::new(BillingListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_filters() {
        let mut s = BillingListState::default();
        s.query.page_number = 2;
        s.set_filters("north", Some(BillingStatus::Overdue));
        assert_eq!(s.query.search.as_deref(), Some("north"));
        assert_eq!(s.query.status, Some(BillingStatus::Overdue));
        assert_eq!(s.query.page_number, 1);
    }
}

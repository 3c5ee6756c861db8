use crate::shared::config::config;
use contracts::domain::a001_product::ProductDto;
use contracts::shared::{PageQuery, PagedResult};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub query: PageQuery,
    pub page: PagedResult<ProductDto>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        let page_size = config().ui.page_size;
        Self {
            query: PageQuery::with_page_size(page_size),
            page: PagedResult::empty(page_size),
            sort_field: "name".to_string(),
            sort_ascending: true,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

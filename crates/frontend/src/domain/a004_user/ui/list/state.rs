use crate::shared::config::config;
use contracts::domain::a004_user::{UserListDto, UserQuery};
use contracts::enums::UserRole;
use contracts::shared::PagedResult;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UserListState {
    pub query: UserQuery,
    pub page: PagedResult<UserListDto>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for UserListState {
    fn default() -> Self {
        let page_size = config().ui.page_size;
        Self {
            query: UserQuery {
                page_size,
                ..UserQuery::default()
            },
            page: PagedResult::empty(page_size),
            sort_field: "full_name".to_string(),
            sort_ascending: true,
            is_loaded: false,
        }
    }
}

impl UserListState {
    /// New search, role or deleted filter; paging restarts at page 1.
    pub fn set_filters(&mut self, search: &str, role: Option<UserRole>, include_deleted: bool) {
        let trimmed = search.trim();
        self.query.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.query.role = role;
        self.query.include_deleted = include_deleted;
        self.query.page_number = 1;
    }
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_filters_resets_page() {
        let mut s = UserListState::default();
        s.query.page_number = 3;
        s.set_filters("  ari ", Some(UserRole::DeliveryAgent), true);
        assert_eq!(s.query.search.as_deref(), Some("ari"));
        assert_eq!(s.query.role, Some(UserRole::DeliveryAgent));
        assert!(s.query.include_deleted);
        assert_eq!(s.query.page_number, 1);

        s.set_filters("", None, false);
        assert!(s.query.search.is_none());
        assert!(s.query.role.is_none());
    }
}

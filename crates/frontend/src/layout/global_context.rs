use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs, the active tab and sidebar visibility, shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Bumped after a record is saved; list pages reload when it changes.
    pub revision: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            revision: RwSignal::new(0),
        }
    }

    /// Opens the tab named by `?active=` and keeps the parameter in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_search(&search) {
            self.open_tab(&active_key, &tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = search_for_active(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| push_tab(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| rename_tab(tabs, key, new_title));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = remove_tab(tabs, key);
        });
        if was_active {
            self.active.set(next_active);
        }
    }

    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn bump_revision(&self) {
        self.revision.update(|rev| *rev = next_revision(*rev));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

pub fn next_revision(rev: u64) -> u64 {
    rev.wrapping_add(1)
}

/// The first run of a list's revision effect sees no previous value and must not reload.
pub fn revision_changed(prev: Option<u64>, current: u64) -> bool {
    prev.is_some_and(|p| p != current)
}

pub fn rename_tab(tabs: &mut [Tab], key: &str, title: &str) {
    if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
        tab.title = title.to_string();
    }
}

/// Appends a tab unless one with the same key is already open.
pub fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|t| t.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}

/// Removes `key`; returns the tab that should become active, the right
/// neighbour of the closed one or else its left neighbour.
pub fn remove_tab(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    let pos = tabs.iter().position(|t| t.key == key)?;
    tabs.remove(pos);
    tabs.get(pos)
        .or_else(|| pos.checked_sub(1).and_then(|p| tabs.get(p)))
        .map(|t| t.key.clone())
}

pub fn active_key_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

pub fn search_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn test_push_tab_is_idempotent() {
        let mut tabs = vec![];
        push_tab(&mut tabs, "a001_product", "Products");
        push_tab(&mut tabs, "a001_product", "Products again");
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "Products");
    }

    #[test]
    fn test_rename_tab_keeps_key_and_order() {
        let mut tabs = vec![];
        push_tab(&mut tabs, "a001_product", "Products");
        push_tab(&mut tabs, "a001_product_detail_7", "Product");
        rename_tab(&mut tabs, "a001_product_detail_7", "Product Desk lamp");
        rename_tab(&mut tabs, "missing", "Ignored");
        assert_eq!(keys(&tabs), vec!["a001_product", "a001_product_detail_7"]);
        assert_eq!(tabs[1].title, "Product Desk lamp");
        assert_eq!(tabs[0].title, "Products");
    }

    #[test]
    fn test_remove_tab_picks_neighbour() {
        let mut tabs = vec![];
        for k in ["a", "b", "c"] {
            push_tab(&mut tabs, k, k);
        }
        assert_eq!(remove_tab(&mut tabs, "b").as_deref(), Some("c"));
        assert_eq!(keys(&tabs), vec!["a", "c"]);
        assert_eq!(remove_tab(&mut tabs, "c").as_deref(), Some("a"));
        assert_eq!(remove_tab(&mut tabs, "a"), None);
        assert!(tabs.is_empty());
        assert_eq!(remove_tab(&mut tabs, "missing"), None);
    }

    #[test]
    fn test_revision_bump_triggers_reload_only_after_first_run() {
        let first = 0;
        assert!(!revision_changed(None, first));
        assert!(!revision_changed(Some(first), first));
        let bumped = next_revision(first);
        assert_eq!(bumped, 1);
        assert!(revision_changed(Some(first), bumped));
        assert_eq!(next_revision(u64::MAX), 0);
    }

    #[test]
    fn test_active_query_round_trip() {
        let search = search_for_active("a002_order_detail_42");
        assert_eq!(search, "?active=a002_order_detail_42");
        assert_eq!(
            active_key_from_search(&search).as_deref(),
            Some("a002_order_detail_42")
        );
        assert_eq!(active_key_from_search(""), None);
        assert_eq!(active_key_from_search("?active="), None);
    }
}

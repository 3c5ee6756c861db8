//! Page categories of tab pages.
//!
//! Every page rendered inside a tab carries an `id` of the form
//! `{module}--{category}` (e.g. `"a001_product--list"`) and a
//! `data-page-category` attribute with one of these values.

pub const PAGE_CAT_LIST: &str = "list";

pub const PAGE_CAT_DETAIL: &str = "detail";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

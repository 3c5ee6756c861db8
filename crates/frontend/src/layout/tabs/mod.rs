//! Tab management.
//!
//! - `page`: TabPage wraps one tab's content and hides inactive tabs
//! - `registry`: tab key to view mapping
//! - `tab_labels`: titles for tab keys

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;

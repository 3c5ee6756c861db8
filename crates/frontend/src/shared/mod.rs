pub mod api_client;
pub mod api_error;
pub mod api_service;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod date_utils;
pub mod form_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod page_standard;
pub mod record_lifecycle;
pub mod toast;

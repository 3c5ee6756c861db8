pub mod chart;
pub mod pagination_controls;
pub mod record_actions;
pub mod stat_card;
pub mod table;
pub mod ui;

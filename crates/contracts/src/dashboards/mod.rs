pub mod chart;
pub mod d400_banner_event_analytics;
pub mod d401_overview;

pub use chart::ChartSlice;

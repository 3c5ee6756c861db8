pub mod ui;

pub use ui::OverviewDashboard;

pub mod bar_chart;
pub mod geometry;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use pie_chart::PieChart;

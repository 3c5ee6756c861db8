pub mod dashboard;

pub use dashboard::BannerEventAnalytics;

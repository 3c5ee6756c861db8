//! Operational overview computed from orders, deliveries and billing statements.

pub mod analytics;

pub use analytics::*;

pub mod dto;

pub use dto::{BillingQuery, BillingStatement};

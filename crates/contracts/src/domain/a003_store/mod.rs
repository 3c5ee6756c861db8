pub mod dto;

pub use dto::{StoreDto, StoreForm, VerifyStoreQuery};

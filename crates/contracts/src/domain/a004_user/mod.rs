pub mod dto;

pub use dto::{UserActiveQuery, UserListDto, UserQuery};

pub mod dto;

pub use dto::{ConfirmOrderQuery, OrderDto, OrderIdQuery, OrderItemDto, UpdateOrderStatusQuery};

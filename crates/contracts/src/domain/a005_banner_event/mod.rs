pub mod dto;

pub use dto::{
    AssignProductsRequest, BannerEvent, BannerEventForm, BannerEventQuery, BannerEventStatusQuery,
    DiscountSummary,
};

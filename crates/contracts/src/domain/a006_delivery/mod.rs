pub mod dto;

pub use dto::{
    AssignDeliveryQuery, CollectCodPaymentQuery, DeliveredQuery, DeliveryCompany, DeliveryInfo,
    PaymentRequestWithDelivery,
};

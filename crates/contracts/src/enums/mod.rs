pub mod banner_event;
pub mod billing_status;
pub mod delivery_status;
pub mod order_status;
pub mod payment;
pub mod user_role;

pub use banner_event::{BannerEventStatus, BannerEventType, DiscountType};
pub use billing_status::BillingStatus;
pub use delivery_status::DeliveryStatus;
pub use order_status::OrderStatus;
pub use payment::{PaymentMethod, PaymentStatus};
pub use user_role::UserRole;

pub mod a001_product;
pub mod a002_order;
pub mod a003_store;
pub mod a004_user;
pub mod a005_banner_event;
pub mod a006_delivery;
pub mod a007_billing;

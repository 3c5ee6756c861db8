//! One entry point to every backend service.

use super::api_client::ApiClient;
use crate::domain::a001_product::api::ProductService;
use crate::domain::a002_order::api::OrderService;
use crate::domain::a003_store::api::StoreService;
use crate::domain::a004_user::api::UserService;
use crate::domain::a005_banner_event::api::BannerEventService;
use crate::domain::a006_delivery::api::DeliveryService;
use crate::domain::a007_billing::api::BillingService;
use crate::system::auth::api::AuthService;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ApiService {
    pub products: ProductService,
    pub orders: OrderService,
    pub stores: StoreService,
    pub users: UserService,
    pub banner_events: BannerEventService,
    pub delivery: DeliveryService,
    pub billing: BillingService,
    pub auth: AuthService,
}

impl ApiService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            products: ProductService::new(client),
            orders: OrderService::new(client),
            stores: StoreService::new(client),
            users: UserService::new(client),
            banner_events: BannerEventService::new(client),
            delivery: DeliveryService::new(client),
            billing: BillingService::new(client),
            auth: AuthService::new(client),
        }
    }
}

pub fn use_api() -> ApiService {
    use_context::<ApiService>().expect("ApiService not provided in context (provide it in app root)")
}

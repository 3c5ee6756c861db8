//! Tab key to view mapping. Every tab key the app knows about is listed here.

use crate::dashboards::d400_banner_event_analytics::BannerEventAnalytics;
use crate::dashboards::d401_overview::OverviewDashboard;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::details::OrderDetails;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a003_store::ui::details::StoreDetails;
use crate::domain::a003_store::ui::list::StoreList;
use crate::domain::a004_user::ui::details::UserDetails;
use crate::domain::a004_user::ui::list::UserList;
use crate::domain::a005_banner_event::ui::details::BannerEventDetails;
use crate::domain::a005_banner_event::ui::list::BannerEventList;
use crate::domain::a006_delivery::ui::list::DeliveryList;
use crate::domain::a007_billing::ui::list::BillingList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;
use uuid::Uuid;

/// Id part of `<prefix><uuid>` keys such as `a001_product_detail_<uuid>`.
pub fn parse_detail_key(key: &str, prefix: &str) -> Option<Uuid> {
    key.strip_prefix(prefix)
        .and_then(|id| Uuid::parse_str(id).ok())
}

fn bad_key(key: &str) -> AnyView {
    log!("bad tab key: {}", key);
    view! { <div class="placeholder">{format!("Cannot open \"{}\"", key)}</div> }.into_any()
}

/// Renders the content of a tab by its key.
///
/// Detail views receive callbacks that close their own tab. A saved form
/// bumps the shared revision first so open lists reload.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));
    let key_for_saved = key.to_string();
    let saved = Callback::new(move |_: ()| {
        tabs_store.bump_revision();
        tabs_store.close_tab(&key_for_saved);
    });

    match key {
        // Dashboards
        "d400_banner_event_analytics" => view! { <BannerEventAnalytics /> }.into_any(),
        "d401_overview" => view! { <OverviewDashboard /> }.into_any(),

        // a001: Products
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a001_product_new" => {
            view! { <ProductDetails id=None on_saved=saved on_cancel=close /> }.into_any()
        }
        k if k.starts_with("a001_product_detail_") => {
            match parse_detail_key(k, "a001_product_detail_") {
                Some(id) => view! { <ProductDetails id=Some(id) on_saved=saved on_cancel=close /> }
                    .into_any(),
                None => bad_key(k),
            }
        }

        // a002: Orders
        "a002_order" => view! { <OrderList /> }.into_any(),
        k if k.starts_with("a002_order_detail_") => {
            match parse_detail_key(k, "a002_order_detail_") {
                Some(id) => view! { <OrderDetails id=id on_close=close /> }.into_any(),
                None => bad_key(k),
            }
        }

        // a003: Stores
        "a003_store" => view! { <StoreList /> }.into_any(),
        "a003_store_new" => {
            view! { <StoreDetails id=None on_saved=saved on_cancel=close /> }.into_any()
        }
        k if k.starts_with("a003_store_detail_") => {
            match parse_detail_key(k, "a003_store_detail_") {
                Some(id) => view! { <StoreDetails id=Some(id) on_saved=saved on_cancel=close /> }
                    .into_any(),
                None => bad_key(k),
            }
        }

        // a004: Users
        "a004_user" => view! { <UserList /> }.into_any(),
        k if k.starts_with("a004_user_detail_") => {
            match parse_detail_key(k, "a004_user_detail_") {
                Some(id) => view! { <UserDetails id=id on_close=close /> }.into_any(),
                None => bad_key(k),
            }
        }

        // a005: Banner events
        "a005_banner_event" => view! { <BannerEventList /> }.into_any(),
        "a005_banner_event_new" => {
            view! { <BannerEventDetails id=None on_saved=saved on_cancel=close /> }.into_any()
        }
        k if k.starts_with("a005_banner_event_detail_") => {
            match parse_detail_key(k, "a005_banner_event_detail_") {
                Some(id) => view! {
                    <BannerEventDetails id=Some(id) on_saved=saved on_cancel=close />
                }
                .into_any(),
                None => bad_key(k),
            }
        }

        // a006 / a007
        "a006_delivery" => view! { <DeliveryList /> }.into_any(),
        "a007_billing" => view! { <BillingList /> }.into_any(),

        _ => {
            log!("unknown tab key: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_key() {
        let id = Uuid::new_v4();
        let key = format!("a001_product_detail_{}", id);
        assert_eq!(parse_detail_key(&key, "a001_product_detail_"), Some(id));
        assert_eq!(parse_detail_key("a001_product_detail_42", "a001_product_detail_"), None);
        assert_eq!(parse_detail_key(&key, "a003_store_detail_"), None);
    }
}

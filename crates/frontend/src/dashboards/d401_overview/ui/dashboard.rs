use crate::shared::api_service::use_api;
use crate::shared::components::chart::PieChart;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_count, format_money};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;
use contracts::dashboards::d401_overview::{
    billing_totals, cod_outstanding, delivery_status_counts, order_status_counts, revenue_total,
    unconfirmed_orders,
};
use contracts::domain::a002_order::OrderDto;
use contracts::domain::a006_delivery::PaymentRequestWithDelivery;
use contracts::domain::a007_billing::{BillingQuery, BillingStatement};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Orders, deliveries and billing at a glance.
///
/// The three sources load independently; a failing one leaves its cards at zero.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();

    let orders = RwSignal::new(Vec::<OrderDto>::new());
    let deliveries = RwSignal::new(Vec::<PaymentRequestWithDelivery>::new());
    let statements = RwSignal::new(Vec::<BillingStatement>::new());
    let pending = RwSignal::new(0u8);

    let load = move || {
        pending.set(3);

        spawn_local(async move {
            match api.orders.get_all().await {
                Ok(data) => orders.set(data),
                Err(e) => {
                    log::error!("d401: orders: {}", e);
                    toast.api_error(&e);
                }
            }
            pending.update(|n| *n = n.saturating_sub(1));
        });

        spawn_local(async move {
            match api.delivery.list().await {
                Ok(data) => deliveries.set(data),
                Err(e) => {
                    log::error!("d401: deliveries: {}", e);
                    toast.api_error(&e);
                }
            }
            pending.update(|n| *n = n.saturating_sub(1));
        });

        spawn_local(async move {
            let query = BillingQuery {
                page_size: config().ui.analytics_page_size,
                ..Default::default()
            };
            match api.billing.list(&query).await {
                Ok(page) => statements.set(page.data),
                Err(e) => {
                    log::error!("d401: billing: {}", e);
                    toast.api_error(&e);
                }
            }
            pending.update(|n| *n = n.saturating_sub(1));
        });
    };

    Effect::new(move |_| load());

    let loading = Signal::derive(move || pending.get() > 0);
    let revenue = Memo::new(move |_| orders.with(|o| revenue_total(o)));
    let unconfirmed = Memo::new(move |_| orders.with(|o| unconfirmed_orders(o)));
    let cod = Memo::new(move |_| deliveries.with(|d| cod_outstanding(d)));
    let billing = Memo::new(move |_| statements.with(|s| billing_totals(s)));
    let by_order_status = Signal::derive(move || orders.with(|o| order_status_counts(o)));
    let by_delivery_status = Signal::derive(move || deliveries.with(|d| delivery_status_counts(d)));

    view! {
        <PageFrame page_id="d401_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Revenue"
                        icon_name="dollar-sign"
                        variant="success"
                        value=Signal::derive(move || format_money(revenue.get()))
                        subtitle=Signal::derive(move || {
                            Some(format!("{} orders", format_count(orders.with(|o| o.len() as u64))))
                        })
                    />
                    <StatCard
                        label="Unconfirmed orders"
                        icon_name="shopping-cart"
                        variant="warning"
                        value=Signal::derive(move || format_count(unconfirmed.get() as u64))
                    />
                    <StatCard
                        label="COD outstanding"
                        icon_name="truck"
                        value=Signal::derive(move || format_money(cod.get()))
                    />
                    <StatCard
                        label="Net payout"
                        icon_name="receipt"
                        value=Signal::derive(move || format_money(billing.with(|b| b.net_payout)))
                        subtitle=Signal::derive(move || {
                            billing.with(|b| {
                                Some(format!(
                                    "gross {}, commission {}",
                                    format_money(b.gross_sales),
                                    format_money(b.commission_amount)
                                ))
                            })
                        })
                    />
                    <StatCard
                        label="Overdue statements"
                        icon_name="alert"
                        variant="error"
                        value=Signal::derive(move || format_count(billing.with(|b| b.overdue_count as u64)))
                    />
                </div>

                <div class="dashboard__charts">
                    <PieChart title="Orders by status" series=by_order_status empty_text="No orders yet" />
                    <PieChart title="Deliveries by status" series=by_delivery_status empty_text="No deliveries yet" />
                </div>
            </div>
        </PageFrame>
    }
}

use crate::shared::api_error::ApiError;
use crate::shared::api_service::use_api;
use crate::shared::components::chart::{BarChart, PieChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_count, format_money, format_percent};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::toast::use_toast;
use contracts::dashboards::d400_banner_event_analytics::{
    discount_series, status_distribution, summarize, top_by_usage, type_distribution,
    usage_percent_series, UsageRow,
};
use contracts::domain::a005_banner_event::{BannerEvent, BannerEventQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TOP_N: usize = 10;

fn format_usage(row: &UsageRow) -> String {
    match row.usage_limit {
        Some(limit) => format!("{} / {}", row.usage_count, limit),
        None => row.usage_count.to_string(),
    }
}

/// Inline alert for a failed load; the toast carries the bare message.
fn load_error_text(e: &ApiError) -> String {
    format!("Could not load banner events: {}", e.toast_message())
}

/// Banner event analytics over the first page of events.
#[component]
pub fn BannerEventAnalytics() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let events = RwSignal::new(Vec::<BannerEvent>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (loaded, set_loaded) = signal(false);

    let load = move || {
        let query = BannerEventQuery {
            page_size: config().ui.analytics_page_size,
            ..Default::default()
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api.banner_events.list(&query).await {
                Ok(page) => {
                    log::info!("d400: loaded {} banner events", page.data.len());
                    events.set(page.data);
                    set_loaded.set(true);
                }
                Err(e) => {
                    log::error!("d400: failed to load banner events: {}", e);
                    toast.api_error(&e);
                    set_error.set(Some(load_error_text(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let summary = Memo::new(move |_| events.with(|e| summarize(e)));
    let by_status = Signal::derive(move || events.with(|e| status_distribution(e)));
    let by_type = Signal::derive(move || events.with(|e| type_distribution(e)));
    let usage = Signal::derive(move || events.with(|e| usage_percent_series(e, TOP_N)));
    let discounts = Signal::derive(move || events.with(|e| discount_series(e, TOP_N)));
    let top_rows = Memo::new(move |_| events.with(|e| top_by_usage(e, TOP_N)));

    view! {
        <PageFrame page_id="d400_banner_event_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Banner Event Analytics"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert")}
                        <span>{e}</span>
                    </div>
                })}

                <Show when=move || loaded.get() && events.with(|e| e.is_empty())>
                    <div class="dashboard__empty">"No banner events yet"</div>
                </Show>

                <div class="stat-cards">
                    <StatCard
                        label="Events"
                        icon_name="tag"
                        value=Signal::derive(move || format_count(summary.with(|s| s.total_events as u64)))
                        subtitle=Signal::derive(move || {
                            Some(summary.with(|s| format!("{} active, {} scheduled", s.active_events, s.scheduled_events)))
                        })
                    />
                    <StatCard
                        label="Total usage"
                        icon_name="activity"
                        value=Signal::derive(move || format_count(summary.with(|s| s.total_usage)))
                        subtitle=Signal::derive(move || {
                            Some(format!("avg {} of limit", format_percent(summary.with(|s| s.average_usage_percent))))
                        })
                    />
                    <StatCard
                        label="Orders"
                        icon_name="shopping-cart"
                        value=Signal::derive(move || format_count(summary.with(|s| s.total_orders)))
                    />
                    <StatCard
                        label="Discount given"
                        icon_name="percent"
                        variant="warning"
                        value=Signal::derive(move || format_money(summary.with(|s| s.total_discount_given)))
                    />
                </div>

                <div class="dashboard__charts">
                    <PieChart title="By status" series=by_status />
                    <PieChart title="By type" series=by_type />
                    <BarChart
                        title="Usage of limit"
                        series=usage
                        format_value=format_percent
                        empty_text="No events with a usage limit"
                    />
                    <BarChart
                        title="Discount given"
                        series=discounts
                        format_value=format_money
                        empty_text="No discounts given yet"
                    />
                </div>

                <h2 class="dashboard__section-title">"Top events by usage"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=240.0>"Event"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Usage"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Of limit"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || top_rows.get()
                                key=|r| r.id
                                children=move |r: UsageRow| {
                                    let usage = format_usage(&r);
                                    let percent = r.usage_percent.map(format_percent).unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{r.title}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{usage}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{percent}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(usage_count: u64, usage_limit: Option<u64>) -> UsageRow {
        UsageRow {
            id: Uuid::new_v4(),
            title: "Spring sale".into(),
            usage_count,
            usage_limit,
            usage_percent: None,
        }
    }

    #[test]
    fn test_format_usage_with_limit() {
        assert_eq!(format_usage(&row(3, Some(10))), "3 / 10");
    }

    #[test]
    fn test_load_error_text() {
        let refused = ApiError::Api("Banner service is paused".into());
        assert_eq!(
            load_error_text(&refused),
            "Could not load banner events: Banner service is paused"
        );
        let bare = ApiError::Http {
            status: 503,
            message: String::new(),
        };
        assert_eq!(load_error_text(&bare), "Could not load banner events: Server error 503");
    }

    #[test]
    fn test_format_usage_without_limit() {
        assert_eq!(format_usage(&row(7, None)), "7");
    }
}

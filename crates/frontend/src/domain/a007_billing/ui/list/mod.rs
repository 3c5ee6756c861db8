pub mod state;

use self::state::create_state;
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_money, format_percent, SortableHeaderCell};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::confirm::confirm;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::dashboards::d401_overview::billing_totals;
use contracts::domain::a007_billing::BillingStatement;
use contracts::enums::BillingStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for BillingStatement {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "store" => cmp_text(&self.store_name, &other.store_name),
            "period" => self.period_start.cmp(&other.period_start),
            "gross" => cmp_f64(self.gross_sales, other.gross_sales),
            "commission" => cmp_f64(self.commission_amount, other.commission_amount),
            "net" => cmp_f64(self.net_payout, other.net_payout),
            "status" => self.status.code().cmp(other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

pub fn mark_paid_prompt(statement: &BillingStatement) -> String {
    format!(
        "Mark the {} statement of \"{}\" ({}) as paid?",
        statement.period_label(),
        statement.store_name,
        format_money(statement.net_payout)
    )
}

#[component]
pub fn BillingList() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(None::<BillingStatus>);

    let load_items = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        spawn_local(async move {
            match api.billing.list(&query).await {
                Ok(page) => state.update(|s| {
                    s.page = page;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    toast.api_error(&e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let apply_filters = move || {
        let text = search.get_untracked();
        let selected = status.get_untracked();
        state.update(|s| s.set_filters(&text, selected));
        load_items();
    };

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            let (f, asc) = toggle_sort_state(&s.sort_field, s.sort_ascending, field);
            s.sort_field = f;
            s.sort_ascending = asc;
        });
    };

    let rows = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = s.page.data.clone();
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            rows
        })
    });

    // totals of the loaded page
    let totals = Memo::new(move |_| state.with(|s| billing_totals(&s.page.data)));

    let mark_paid = move |statement: BillingStatement| {
        if !confirm(&mark_paid_prompt(&statement)) {
            return;
        }
        let id = statement.id;
        toast.track(
            async move { api.billing.mark_paid(id).await },
            format!("Statement of \"{}\" marked as paid", statement.store_name),
            load_items,
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a007_billing--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Billing"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.page.total_count.to_string())}
                    </UiBadge>
                    <Show when=move || totals.with(|t| t.overdue_count > 0)>
                        <UiBadge variant="error".to_string()>
                            {move || format!("{} overdue", totals.with(|t| t.overdue_count))}
                        </UiBadge>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Input value=search placeholder="Store..." />
                                <select
                                    class="filter-select"
                                    on:change=move |ev| {
                                        status.set(BillingStatus::from_code(&event_target_value(&ev)));
                                        apply_filters();
                                    }
                                >
                                    <option value="">"All statuses"</option>
                                    {BillingStatus::all()
                                        .into_iter()
                                        .map(|st| view! { <option value=st.code()>{st.code()}</option> })
                                        .collect_view()}
                                </select>
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_filters()>
                                    {icon("search")}
                                    "Search"
                                </Button>
                            </Flex>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page.page_number.max(1)))
                                total_pages=Signal::derive(move || state.with(|s| s.page.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.page.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                                on_page_change=Callback::new(move |page: u32| {
                                    state.update(|s| s.query.page_number = page.max(1));
                                    load_items();
                                })
                                on_page_size_change=Callback::new(move |size| {
                                    state.update(|s| {
                                        s.query.page_size = size;
                                        s.query.page_number = 1;
                                    });
                                    load_items();
                                })
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Store" sort_field="store" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=180.0 />
                                <SortableHeaderCell label="Period" sort_field="period" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=180.0 />
                                <SortableHeaderCell label="Gross sales" sort_field="gross" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=80.0>"Rate"</TableHeaderCell>
                                <SortableHeaderCell label="Commission" sort_field="commission" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Net payout" sort_field="net" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=140.0>"Paid at"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|b| (b.id, b.status)
                                children=move |b: BillingStatement| {
                                    let payable = b.status != BillingStatus::Paid;
                                    let store_name = b.store_name.clone();
                                    let period = b.period_label();
                                    let gross = format_money(b.gross_sales);
                                    let rate = format_percent(b.commission_rate);
                                    let commission = format_money(b.commission_amount);
                                    let net = format_money(b.net_payout);
                                    let status = b.status;
                                    let paid_at = format_datetime_opt(b.paid_at.as_ref());
                                    let b_pay = b;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{period}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{gross}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{rate}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{commission}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{net}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=status.badge_variant().to_string()>{status.code()}</UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{paid_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {payable.then(|| view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        on_click=move |_| mark_paid(b_pay.clone())
                                                    >
                                                        {icon("check")}
                                                        "Mark paid"
                                                    </Button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.page.is_empty())>
                        <div class="table__empty">"No billing statements found"</div>
                    </Show>
                    <div class="table__totals">
                        <span>"Gross: " {move || format_money(totals.with(|t| t.gross_sales))}</span>
                        <span>"Commission: " {move || format_money(totals.with(|t| t.commission_amount))}</span>
                        <span>"Net payout: " {move || format_money(totals.with(|t| t.net_payout))}</span>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statement(store: &str, start: &str, status: &str) -> BillingStatement {
        serde_json::from_value(json!({
            "id": uuid::Uuid::new_v4(),
            "storeId": uuid::Uuid::new_v4(),
            "storeName": store,
            "periodStart": start,
            "periodEnd": "2025-12-31",
            "netPayout": 900.0,
            "status": status
        }))
        .unwrap()
    }

    #[test]
    fn test_mark_paid_prompt_names_store_and_period() {
        let prompt = mark_paid_prompt(&statement("North", "2025-01-01", "Pending"));
        assert!(prompt.contains("\"North\""));
        assert!(prompt.contains("01.01.2025"));
    }

    #[test]
    fn test_sort_by_period_newest_first() {
        let mut rows = vec![
            statement("a", "2025-01-01", "Paid"),
            statement("b", "2025-03-01", "Pending"),
            statement("c", "2025-02-01", "Overdue"),
        ];
        sort_list(&mut rows, "period", false);
        let stores: Vec<&str> = rows.iter().map(|b| b.store_name.as_str()).collect();
        assert_eq!(stores, vec!["b", "c", "a"]);
    }
}

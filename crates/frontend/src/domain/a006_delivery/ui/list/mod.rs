mod dialogs;
pub mod state;

use self::dialogs::{AssignCompanyDialog, CollectCodDialog};
use self::state::create_state;
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::{paginate, total_pages, PaginationControls};
use crate::shared::components::table::{format_money, format_money_opt, SortableHeaderCell};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::confirm::confirm;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_opt, cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::modal_stack::use_modals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a006_delivery::PaymentRequestWithDelivery;
use contracts::enums::DeliveryStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for PaymentRequestWithDelivery {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => cmp_opt(self.order_number.as_deref(), other.order_number.as_deref()),
            "customer" => cmp_text(&self.customer_name, &other.customer_name),
            "amount" => cmp_f64(self.amount, other.amount),
            "payment_status" => self
                .payment_status
                .display_name()
                .cmp(other.payment_status.display_name()),
            "company" => cmp_opt(
                self.delivery.as_ref().map(|d| d.company_name.as_str()),
                other.delivery.as_ref().map(|d| d.company_name.as_str()),
            ),
            "delivery_status" => self.delivery_status().code().cmp(other.delivery_status().code()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

pub fn delivered_prompt(row: &PaymentRequestWithDelivery) -> String {
    format!(
        "Mark order {} for {} as delivered?",
        row.order_number.as_deref().unwrap_or("—"),
        row.customer_name
    )
}

/// Delivery can be confirmed once a company is assigned and it is not delivered yet.
pub fn can_mark_delivered(row: &PaymentRequestWithDelivery) -> bool {
    row.company_info_id().is_some() && !row.is_delivered()
}

#[component]
pub fn DeliveryList() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let modals = use_modals();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());

    let load_items = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api.delivery.list().await {
                Ok(items) => state.update(|s| {
                    s.items = items;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    toast.api_error(&e);
                }
            }
            set_loading.set(false);
        });
    };
    let reload = Callback::new(move |_: ()| load_items());

    let load_companies = move || {
        spawn_local(async move {
            match api.delivery.companies().await {
                Ok(companies) => state.update(|s| s.companies = companies),
                Err(e) => {
                    toast.api_error(&e);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
            load_companies();
        }
    });

    Effect::new(move |_| {
        let text = search.get();
        untrack(move || {
            state.update(|s| {
                s.search = text;
                s.page = 1;
            })
        });
    });

    let filtered = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = s.filtered();
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            rows
        })
    });

    let page_rows = Memo::new(move |_| {
        let (page, page_size) = state.with(|s| (s.page, s.page_size));
        filtered.with(|rows| paginate(rows, page, page_size))
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            let (f, asc) = toggle_sort_state(&s.sort_field, s.sort_ascending, field);
            s.sort_field = f;
            s.sort_ascending = asc;
        });
    };

    let open_assign = move |row: PaymentRequestWithDelivery| {
        let companies = state.with_untracked(|s| s.active_companies());
        modals.push(
            format!("Assign delivery · {}", row.customer_name),
            move |handle| {
                view! {
                    <AssignCompanyDialog
                        row=row.clone()
                        companies=companies.clone()
                        on_saved=Callback::new(move |_| {
                            handle.close();
                            reload.run(());
                        })
                        on_close=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    let open_collect = move |row: PaymentRequestWithDelivery| {
        modals.push(
            format!("Collect COD payment · {}", row.customer_name),
            move |handle| {
                view! {
                    <CollectCodDialog
                        row=row.clone()
                        on_saved=Callback::new(move |_| {
                            handle.close();
                            reload.run(());
                        })
                        on_close=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    let mark_delivered = move |row: PaymentRequestWithDelivery| {
        let Some(company_info_id) = row.company_info_id() else {
            return;
        };
        if !confirm(&delivered_prompt(&row)) {
            return;
        }
        let payment_request_id = row.payment_request_id;
        toast.track(
            async move {
                api.delivery
                    .mark_delivered(payment_request_id, company_info_id, true)
                    .await
            },
            "Marked as delivered",
            load_items,
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a006_delivery--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Deliveries"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || filtered.with(|r| r.len().to_string())}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_items();
                            load_companies();
                        }
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
                                <Input value=search placeholder="Customer, order, tracking..." />
                                <select
                                    class="filter-select"
                                    on:change=move |ev| {
                                        let status = DeliveryStatus::from_code(&event_target_value(&ev));
                                        state.update(|s| {
                                            s.delivery_status = status;
                                            s.page = 1;
                                        });
                                    }
                                >
                                    <option value="">"All delivery statuses"</option>
                                    {DeliveryStatus::all()
                                        .into_iter()
                                        .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                                        .collect_view()}
                                </select>
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.cod_only)
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            state.update(|s| {
                                                s.cod_only = checked;
                                                s.page = 1;
                                            });
                                        }
                                    />
                                    "Uncollected COD only"
                                </label>
                            </Flex>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || {
                                    let page_size = state.with(|s| s.page_size);
                                    filtered.with(|r| total_pages(r.len(), page_size))
                                })
                                total_count=Signal::derive(move || filtered.with(|r| r.len() as u64))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                                on_page_size_change=Callback::new(move |size| state.update(|s| {
                                    s.page_size = size;
                                    s.page = 1;
                                }))
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Order" sort_field="order_number" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=110.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=170.0 />
                                <SortableHeaderCell label="Amount" sort_field="amount" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=90.0>"Method"</TableHeaderCell>
                                <SortableHeaderCell label="Payment" sort_field="payment_status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=120.0 />
                                <SortableHeaderCell label="Company" sort_field="company" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=140.0 />
                                <SortableHeaderCell label="Delivery" sort_field="delivery_status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=110.0 />
                                <TableHeaderCell min_width=100.0>"Collected"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=140.0 />
                                <TableHeaderCell min_width=260.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_rows.get()
                                key=|r| (r.payment_request_id, r.payment_status, r.delivery_status(), r.company_info_id())
                                children=move |r: PaymentRequestWithDelivery| {
                                    let delivery_status = r.delivery_status();
                                    let can_deliver = can_mark_delivered(&r);
                                    let can_assign = !r.is_delivered();
                                    let cod_outstanding = r.is_cod_outstanding();
                                    let assign_label = if r.delivery.is_some() { "Reassign" } else { "Assign" };
                                    let order_number = r.order_number.clone().unwrap_or_else(|| "—".to_string());
                                    let address = r.shipping_address.clone().unwrap_or_default();
                                    let customer = r.customer_name.clone();
                                    let amount = format_money(r.amount);
                                    let payment_method = r.payment_method.display_name();
                                    let payment_status = r.payment_status;
                                    let company = r
                                        .delivery
                                        .as_ref()
                                        .map(|d| d.company_name.clone())
                                        .unwrap_or_else(|| "—".to_string());
                                    let collected = format_money_opt(r.collected_amount);
                                    let created = format_datetime(&r.created_at);
                                    let r_assign = r.clone();
                                    let r_deliver = r.clone();
                                    let r_collect = r;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{order_number}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span title=address>{customer}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{amount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{payment_method}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=payment_status.badge_variant().to_string()>
                                                        {payment_status.display_name()}
                                                    </UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{company}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=delivery_status.badge_variant().to_string()>
                                                        {delivery_status.display_name()}
                                                    </UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{collected}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    {can_assign.then(|| view! {
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| open_assign(r_assign.clone())
                                                        >
                                                            {icon("truck")}
                                                            {assign_label}
                                                        </Button>
                                                    })}
                                                    {can_deliver.then(|| view! {
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| mark_delivered(r_deliver.clone())
                                                        >
                                                            {icon("check")}
                                                            "Delivered"
                                                        </Button>
                                                    })}
                                                    {cod_outstanding.then(|| view! {
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Primary
                                                            on_click=move |_| open_collect(r_collect.clone())
                                                        >
                                                            {icon("dollar-sign")}
                                                            "Collect COD"
                                                        </Button>
                                                    })}
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && filtered.with(|r| r.is_empty())>
                        <div class="table__empty">"No payment requests match the filters"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(delivery: serde_json::Value) -> PaymentRequestWithDelivery {
        serde_json::from_value(json!({
            "paymentRequestId": uuid::Uuid::new_v4(),
            "orderId": uuid::Uuid::new_v4(),
            "orderNumber": "ORD-12",
            "customerName": "Kim Park",
            "amount": 99.5,
            "paymentMethod": "COD",
            "paymentStatus": "CodPending",
            "delivery": delivery,
            "createdAt": "2025-02-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_can_mark_delivered_needs_company() {
        assert!(!can_mark_delivered(&row(serde_json::Value::Null)));

        let assigned = row(json!({
            "companyInfoId": uuid::Uuid::new_v4(),
            "companyName": "FastShip",
            "deliveryStatus": "InTransit",
            "isDelivered": false
        }));
        assert!(can_mark_delivered(&assigned));

        let delivered = row(json!({
            "companyInfoId": uuid::Uuid::new_v4(),
            "companyName": "FastShip",
            "deliveryStatus": "Delivered",
            "isDelivered": true
        }));
        assert!(!can_mark_delivered(&delivered));
    }

    #[test]
    fn test_delivered_prompt() {
        assert_eq!(
            delivered_prompt(&row(serde_json::Value::Null)),
            "Mark order ORD-12 for Kim Park as delivered?"
        );
    }
}

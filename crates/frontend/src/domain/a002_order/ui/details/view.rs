use super::view_model::OrderDetailsViewModel;
use crate::shared::api_service::use_api;
use crate::shared::components::table::format_money;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a002_order::OrderItemDto;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn OrderDetails(id: Uuid, on_close: Callback<()>) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(id, use_api(), use_toast());
    vm.load();

    let busy = Signal::derive(move || vm.busy.get());

    view! {
        <PageFrame page_id="a002_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || vm.order.with(|o| {
                            o.as_ref()
                                .map(|o| format!("Order {}", o.order_number))
                                .unwrap_or_else(|| "Order".to_string())
                        })}
                    </h1>
                    {move || vm.order.with(|o| o.as_ref().map(|o| o.status)).map(|status| view! {
                        <UiBadge variant=status.badge_variant().to_string()>{status.display_name()}</UiBadge>
                    })}
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.load()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        "Close"
                    </Button>
                </div>
            </div>

            <Show when=move || vm.loading.get() && vm.order.with(|o| o.is_none())>
                <div class="page__loading">"Loading..."</div>
            </Show>

            {move || vm.order.get().map(|o| {
                let is_confirmed = o.is_confirmed;
                let items = o.items.clone();
                view! {
                    <div class="details-grid">
                        <div class="details-field">
                            <span class="details-field__label">"Customer"</span>
                            <span>{o.customer_name.clone()}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Email"</span>
                            <span>{o.customer_email.clone().unwrap_or_else(|| "—".to_string())}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Store"</span>
                            <span>{o.store_name.clone().unwrap_or_else(|| "—".to_string())}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Payment"</span>
                            <span>{o.payment_method.display_name()}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Total"</span>
                            <strong>{format_money(o.total_amount)}</strong>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Created"</span>
                            <span>{format_datetime(&o.created_at)}</span>
                        </div>
                    </div>

                    <div class="details-actions">
                        {if is_confirmed {
                            view! {
                                <Button appearance=ButtonAppearance::Secondary disabled=busy on_click=move |_| vm.set_confirmed(false)>
                                    {icon("x")}
                                    "Withdraw confirmation"
                                </Button>
                            }.into_any()
                        } else {
                            view! {
                                <Button appearance=ButtonAppearance::Primary disabled=busy on_click=move |_| vm.set_confirmed(true)>
                                    {icon("check")}
                                    "Confirm order"
                                </Button>
                            }.into_any()
                        }}

                        <select
                            class="filter-select"
                            prop:value=move || vm.pending_status.get().map(|s| s.code()).unwrap_or_default()
                            on:change=move |ev| vm.pending_status.set(OrderStatus::from_code(&event_target_value(&ev)))
                        >
                            {OrderStatus::all()
                                .into_iter()
                                .map(|st| view! {
                                    <option value=st.code() selected=move || vm.pending_status.get() == Some(st)>
                                        {st.display_name()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.busy.get() || !vm.status_changed())
                            on_click=move |_| vm.apply_status()
                        >
                            "Change status"
                        </Button>
                    </div>

                    <h3 class="section-title">"Items"</h3>
                    <OrderItemsTable items=items />
                }
            })}
        </PageFrame>
    }
}

#[component]
fn OrderItemsTable(items: Vec<OrderItemDto>) -> impl IntoView {
    if items.is_empty() {
        return view! { <div class="table__empty">"No items"</div> }.into_any();
    }
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=240.0>"Product"</TableHeaderCell>
                    <TableHeaderCell min_width=80.0>"Qty"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Unit price"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Line total"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {items
                    .into_iter()
                    .map(|item| {
                        let line_total = format_money(item.line_total());
                        let unit_price = format_money(item.unit_price);
                        let quantity = item.quantity;
                        let product_name = item.product_name;
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout truncate=true>{product_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{unit_price}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{line_total}</TableCellLayout></TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}

pub mod state;

use self::state::create_state;
use crate::layout::global_context::{revision_changed, AppGlobalContext};
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::{paginate, total_pages, PaginationControls};
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_opt, cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a002_order::OrderDto;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for OrderDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => cmp_text(&self.order_number, &other.order_number),
            "customer" => cmp_text(&self.customer_name, &other.customer_name),
            "store" => cmp_opt(self.store_name.as_deref(), other.store_name.as_deref()),
            "total" => cmp_f64(self.total_amount, other.total_amount),
            "status" => self.status.code().cmp(other.status.code()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

pub fn detail_tab_key(order: &OrderDto) -> String {
    format!("a002_order_detail_{}", order.id)
}

#[component]
pub fn OrderList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());

    let load_items = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api.orders.get_all().await {
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

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    Effect::new(move |prev: Option<u64>| {
        let rev = tabs_store.revision.get();
        if revision_changed(prev, rev) {
            load_items();
        }
        rev
    });

    // Filtering is local, so the search box applies as the operator types.
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

    let open_detail = move |o: &OrderDto| {
        tabs_store.open_tab(&detail_tab_key(o), &format!("Order {}", o.order_number));
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a002_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || filtered.with(|r| r.len().to_string())}
                    </UiBadge>
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
                                <Input value=search placeholder="Order number or customer..." />
                                <select
                                    class="filter-select"
                                    on:change=move |ev| {
                                        let status = OrderStatus::from_code(&event_target_value(&ev));
                                        state.update(|s| {
                                            s.status = status;
                                            s.page = 1;
                                        });
                                    }
                                >
                                    <option value="">"All statuses"</option>
                                    {OrderStatus::all()
                                        .into_iter()
                                        .map(|st| view! { <option value=st.code()>{st.display_name()}</option> })
                                        .collect_view()}
                                </select>
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
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Order" sort_field="order_number" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=120.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=180.0 />
                                <SortableHeaderCell label="Store" sort_field="store" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=150.0 />
                                <SortableHeaderCell label="Total" sort_field="total" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=110.0>"Payment"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=100.0>"Confirmed"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=140.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_rows.get()
                                key=|o| (o.id, o.status, o.is_confirmed)
                                children=move |o: OrderDto| {
                                    let o_link = o.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(&o_link);
                                                        }
                                                    >
                                                        {o.order_number.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{o.customer_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {o.store_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(o.total_amount)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{o.payment_method.display_name()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=o.status.badge_variant().to_string()>
                                                        {o.status.display_name()}
                                                    </UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if o.is_confirmed {
                                                        view! { <UiBadge variant="success".to_string()>"Yes"</UiBadge> }.into_any()
                                                    } else {
                                                        view! { <UiBadge variant="warning".to_string()>"No"</UiBadge> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&o.created_at)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded) && filtered.with(|r| r.is_empty())>
                        <div class="table__empty">"No orders match the filters"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

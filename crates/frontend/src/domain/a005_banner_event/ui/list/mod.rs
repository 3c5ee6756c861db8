mod assign_products;
pub mod state;

use self::assign_products::AssignProductsDialog;
use self::state::{create_state, BannerEventFilters};
use crate::layout::global_context::{revision_changed, AppGlobalContext};
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::record_actions::RecordActions;
use crate::shared::components::table::{format_count, format_money, SortableHeaderCell};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::confirm::{confirm, hard_delete_prompt, soft_delete_prompt};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::modal_stack::use_modals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::record_lifecycle::RecordLifecycle;
use crate::shared::toast::use_toast;
use contracts::domain::a005_banner_event::BannerEvent;
use contracts::enums::{BannerEventStatus, BannerEventType};
use contracts::shared::record_state::HasRecordState;
use contracts::shared::RecordState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for BannerEvent {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "type" => self.event_type.code().cmp(other.event_type.code()),
            "status" => self.status.code().cmp(other.status.code()),
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => self.end_date.cmp(&other.end_date),
            "usage" => self.usage_count.cmp(&other.usage_count),
            "products" => self.product_count.cmp(&other.product_count),
            "priority" => self.priority.cmp(&other.priority),
            "discount_given" => self
                .summary_or_default()
                .total_discount_given
                .total_cmp(&other.summary_or_default().total_discount_given),
            _ => Ordering::Equal,
        }
    }
}

pub fn detail_tab_key(event: &BannerEvent) -> String {
    format!("a005_banner_event_detail_{}", event.id)
}

pub fn status_change_prompt(event: &BannerEvent, status: BannerEventStatus) -> String {
    format!(
        "Change status of \"{}\" from {} to {}?",
        event.title,
        event.status.code(),
        status.code()
    )
}

/// "30% (max 50.00)" style discount cell.
pub fn discount_label(event: &BannerEvent) -> String {
    let value = event.discount_type.format_value(event.discount_value);
    match event.max_discount_amount {
        Some(max) => format!("{} (max {})", value, format_money(max)),
        None => value,
    }
}

#[component]
pub fn BannerEventList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let toast = use_toast();
    let modals = use_modals();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let filters = RwSignal::new(BannerEventFilters::default());

    let load_items = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        spawn_local(async move {
            match api.banner_events.list(&query).await {
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
    let reload = Callback::new(move |_: ()| load_items());

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

    let apply_filters = move || {
        let current = filters.get_untracked();
        state.update(|s| s.apply_filters(&current));
        load_items();
    };

    let reset_filters = move || {
        filters.set(BannerEventFilters::default());
        state.update(|s| s.reset_filters());
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

    let open_new = move || tabs_store.open_tab("a005_banner_event_new", "New banner event");
    let open_detail = move |e: &BannerEvent| {
        tabs_store.open_tab(&detail_tab_key(e), &format!("Event {}", e.title));
    };

    let change_status = move |e: BannerEvent, status: BannerEventStatus| {
        if status == e.status {
            return;
        }
        if !confirm(&status_change_prompt(&e, status)) {
            // select snaps back to the stored status
            state.update(|_| {});
            return;
        }
        toast.track(
            async move { api.banner_events.set_status(e.id, status).await },
            format!("Status set to {}", status.code()),
            load_items,
        );
    };

    let open_products = move |e: BannerEvent| {
        let event_id = e.id;
        modals.push_sized(
            format!("Products of \"{}\"", e.title),
            Some("min(720px, 95vw)"),
            move |handle| {
                view! {
                    <AssignProductsDialog
                        event_id=event_id
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

    let soft_delete = move |e: BannerEvent| {
        if !confirm(&soft_delete_prompt("banner event", &e.title)) {
            return;
        }
        toast.track(
            async move { api.banner_events.soft_delete(e.id).await },
            "Banner event deleted",
            load_items,
        );
    };

    let restore = move |e: BannerEvent| {
        toast.track(
            async move { api.banner_events.restore(e.id).await },
            "Banner event restored",
            load_items,
        );
    };

    let hard_delete = move |e: BannerEvent| {
        if !confirm(&hard_delete_prompt("banner event", &e.title)) {
            return;
        }
        toast.track(
            async move { api.banner_events.hard_delete(e.id).await },
            "Banner event permanently deleted",
            load_items,
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let active_filters = Signal::derive(move || state.with(|s| s.query.active_filter_count()));

    view! {
        <PageFrame page_id="a005_banner_event--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Banner events"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.page.total_count.to_string())}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                        {icon("plus")}
                        "New event"
                    </Button>
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
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            <Show when={move || active_filters.get() > 0}>
                                <UiBadge variant="primary".to_string()>
                                    {move || active_filters.get().to_string()}
                                </UiBadge>
                            </Show>
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
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form-group">
                                <label>"Search"</label>
                                <input
                                    type="text"
                                    placeholder="Title..."
                                    prop:value=move || filters.with(|f| f.search.clone())
                                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Status"</label>
                                <select
                                    class="filter-select"
                                    prop:value=move || filters.with(|f| f.status.map(|s| s.code()).unwrap_or(""))
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        filters.update(|f| f.status = BannerEventStatus::from_code(&value));
                                    }
                                >
                                    <option value="">"All"</option>
                                    {BannerEventStatus::all()
                                        .into_iter()
                                        .map(|s| view! { <option value=s.code()>{s.code()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Type"</label>
                                <select
                                    class="filter-select"
                                    prop:value=move || filters.with(|f| f.event_type.map(|t| t.code()).unwrap_or(""))
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        filters.update(|f| f.event_type = BannerEventType::from_code(&value));
                                    }
                                >
                                    <option value="">"All"</option>
                                    {BannerEventType::all()
                                        .into_iter()
                                        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"From"</label>
                                <input
                                    type="date"
                                    prop:value=move || filters.with(|f| f.start_date.clone())
                                    on:change=move |ev| filters.update(|f| f.start_date = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"To"</label>
                                <input
                                    type="date"
                                    prop:value=move || filters.with(|f| f.end_date.clone())
                                    on:change=move |ev| filters.update(|f| f.end_date = event_target_value(&ev))
                                />
                            </div>
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.with(|f| f.include_deleted)
                                    on:change=move |ev| filters.update(|f| f.include_deleted = event_target_checked(&ev))
                                />
                                "Show deleted"
                            </label>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                                {icon("search")}
                                "Apply"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset_filters()>
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1200px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Title" sort_field="title" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=200.0 />
                                <SortableHeaderCell label="Type" sort_field="type" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=130.0 />
                                <TableHeaderCell min_width=120.0>"Discount"</TableHeaderCell>
                                <SortableHeaderCell label="Start" sort_field="start_date" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="End" sort_field="end_date" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Usage" sort_field="usage" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Given" sort_field="discount_given" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Products" sort_field="products" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Priority" sort_field="priority" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=220.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|e| (e.id, e.status, e.is_active, e.is_deleted, e.product_count)
                                children=move |e: BannerEvent| {
                                    let record_state = e.record_state();
                                    let summary = e.summary_or_default();
                                    let current_status = e.status;
                                    let e_link = e.clone();
                                    let e_edit = e.clone();
                                    let e_status = e.clone();
                                    let e_products = e.clone();
                                    let e_del = e.clone();
                                    let e_restore = e.clone();
                                    let e_hard = e.clone();
                                    let is_deleted = record_state == RecordState::Deleted;
                                    let title = e.title.clone();
                                    let event_type = e.event_type.display_name();
                                    let discount = discount_label(&e);
                                    let start = format_date(&e.start_date);
                                    let end = format_date(&e.end_date);
                                    let usage = e.usage_label();
                                    let orders_title = format!("{} orders", format_count(summary.total_orders));
                                    let discount_given = format_money(summary.total_discount_given);
                                    let product_count = e.product_count.to_string();
                                    let priority = e.priority;
                                    let status_class = format!("status-select status-select--{}", current_status.badge_variant());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            open_detail(&e_link);
                                                        }
                                                    >
                                                        {title}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{event_type}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <select
                                                        class=status_class
                                                        disabled=is_deleted
                                                        prop:value=move || {
                                                            state.track();
                                                            current_status.code()
                                                        }
                                                        on:change=move |ev| {
                                                            if let Some(status) = BannerEventStatus::from_code(&event_target_value(&ev)) {
                                                                change_status(e_status.clone(), status);
                                                            }
                                                        }
                                                    >
                                                        {BannerEventStatus::all()
                                                            .into_iter()
                                                            .map(|s| view! { <option value=s.code() selected={s == current_status}>{s.code()}</option> })
                                                            .collect_view()}
                                                    </select>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{discount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{start}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{end}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{usage}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span title=orders_title>
                                                        {discount_given}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="badge-button"
                                                        title="Assign products"
                                                        disabled=is_deleted
                                                        on:click=move |_| open_products(e_products.clone())
                                                    >
                                                        <UiBadge variant="neutral".to_string()>{product_count}</UiBadge>
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{priority}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RecordActions
                                                    state=record_state
                                                    on_edit=Callback::new(move |_| open_detail(&e_edit))
                                                    on_soft_delete=Callback::new(move |_| soft_delete(e_del.clone()))
                                                    on_restore=Callback::new(move |_| restore(e_restore.clone()))
                                                    on_hard_delete=Callback::new(move |_| hard_delete(e_hard.clone()))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.page.is_empty())>
                        <div class="table__empty">"No banner events found"</div>
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

    fn event(title: &str, usage: u64, given: Option<f64>) -> BannerEvent {
        let mut v = json!({
            "id": uuid::Uuid::new_v4(),
            "title": title,
            "eventType": "Seasonal",
            "status": "Active",
            "discountType": "Percentage",
            "discountValue": 15.0,
            "startDate": "2025-06-01T00:00:00Z",
            "endDate": "2025-06-30T00:00:00Z",
            "usageCount": usage,
            "priority": 1
        });
        if let Some(total) = given {
            v["discountSummary"] = json!({ "totalDiscountGiven": total });
        }
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_discount_label() {
        let mut e = event("Summer", 0, None);
        assert_eq!(discount_label(&e), "15%");
        e.max_discount_amount = Some(50.0);
        assert!(discount_label(&e).starts_with("15% (max "));
    }

    #[test]
    fn test_status_change_prompt() {
        let e = event("Summer", 0, None);
        assert_eq!(
            status_change_prompt(&e, BannerEventStatus::Paused),
            "Change status of \"Summer\" from Active to Paused?"
        );
    }

    #[test]
    fn test_missing_summary_sorts_as_zero() {
        let mut rows = vec![event("a", 1, Some(20.0)), event("b", 2, None), event("c", 3, Some(5.0))];
        sort_list(&mut rows, "discount_given", true);
        let titles: Vec<&str> = rows.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c", "a"]);
    }
}

pub mod state;

use self::state::create_state;
use crate::layout::global_context::{revision_changed, AppGlobalContext};
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::record_actions::RecordActions;
use crate::shared::components::table::{format_money, format_money_opt, SortableHeaderCell};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::confirm::{confirm, hard_delete_prompt, soft_delete_prompt};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_opt, cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::record_lifecycle::RecordLifecycle;
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::ProductDto;
use contracts::shared::record_state::HasRecordState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for ProductDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "sku" => cmp_text(&self.sku, &other.sku),
            "price" => cmp_f64(self.effective_price(), other.effective_price()),
            "stock" => self.stock_quantity.cmp(&other.stock_quantity),
            "store" => cmp_opt(self.store_name.as_deref(), other.store_name.as_deref()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

pub fn detail_tab_key(product: &ProductDto) -> String {
    format!("a001_product_detail_{}", product.id)
}

#[component]
pub fn ProductList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let show_deleted = RwSignal::new(false);

    let load_items = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        spawn_local(async move {
            match api.products.list(&query).await {
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

    Effect::new(move |prev: Option<u64>| {
        let rev = tabs_store.revision.get();
        if revision_changed(prev, rev) {
            load_items();
        }
        rev
    });

    let apply_filters = move || {
        let text = search.get_untracked();
        let include_deleted = show_deleted.get_untracked();
        state.update(|s| {
            s.query.set_search(&text);
            s.query.include_deleted = include_deleted;
        });
        load_items();
    };

    let go_to_page = move |page: u32| {
        state.update(|s| s.query.go_to(page));
        load_items();
    };

    let change_page_size = move |size: u32| {
        state.update(|s| {
            s.query.page_size = size;
            s.query.go_to(1);
        });
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

    let open_new = move || tabs_store.open_tab("a001_product_new", "New product");
    let open_detail = move |p: &ProductDto| {
        tabs_store.open_tab(&detail_tab_key(p), &format!("Product {}", p.name));
    };

    let soft_delete = move |p: ProductDto| {
        if !confirm(&soft_delete_prompt("product", &p.name)) {
            return;
        }
        toast.track(
            async move { api.products.soft_delete(p.id).await },
            "Product deleted",
            load_items,
        );
    };

    let restore = move |p: ProductDto| {
        toast.track(
            async move { api.products.restore(p.id).await },
            "Product restored",
            load_items,
        );
    };

    let hard_delete = move |p: ProductDto| {
        if !confirm(&hard_delete_prompt("product", &p.name)) {
            return;
        }
        toast.track(
            async move { api.products.hard_delete(p.id).await },
            "Product permanently deleted",
            load_items,
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.page.total_count.to_string())}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                        {icon("plus")}
                        "New product"
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
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Input value=search placeholder="Name or SKU..." />
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_filters()>
                                    {icon("search")}
                                    "Search"
                                </Button>
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || show_deleted.get()
                                        on:change=move |ev| {
                                            show_deleted.set(event_target_checked(&ev));
                                            apply_filters();
                                        }
                                    />
                                    "Show deleted"
                                </label>
                            </Flex>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page.page_number.max(1)))
                                total_pages=Signal::derive(move || state.with(|s| s.page.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.page.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=220.0 />
                                <SortableHeaderCell label="SKU" sort_field="sku" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Price" sort_field="price" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <SortableHeaderCell label="Stock" sort_field="stock" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=80.0 />
                                <SortableHeaderCell label="Store" sort_field="store" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=160.0 />
                                <TableHeaderCell min_width=100.0>"State"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=180.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|p| (p.id, p.is_deleted, p.is_active)
                                children=move |p: ProductDto| {
                                    let record_state = p.record_state();
                                    let p_link = p.clone();
                                    let p_edit = p.clone();
                                    let p_del = p.clone();
                                    let p_restore = p.clone();
                                    let p_hard = p.clone();
                                    let discounted = p.effective_price() < p.price;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(&p_link);
                                                        }
                                                    >
                                                        {p.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-family: monospace;">{p.sku.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if discounted {
                                                        view! {
                                                            <span>
                                                                <s class="text-muted">{format_money(p.price)}</s>
                                                                " "
                                                                {format_money_opt(p.discount_price)}
                                                            </span>
                                                        }.into_any()
                                                    } else {
                                                        view! { <span>{format_money(p.price)}</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{p.stock_quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {p.store_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=record_state.badge_variant().to_string()>
                                                        {record_state.display_name()}
                                                    </UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&p.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RecordActions
                                                    state=record_state
                                                    on_edit=Callback::new(move |_| open_detail(&p_edit))
                                                    on_soft_delete=Callback::new(move |_| soft_delete(p_del.clone()))
                                                    on_restore=Callback::new(move |_| restore(p_restore.clone()))
                                                    on_hard_delete=Callback::new(move |_| hard_delete(p_hard.clone()))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.page.is_empty())>
                        <div class="table__empty">"No products found"</div>
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

    fn product(name: &str, price: f64, discount: Option<f64>) -> ProductDto {
        serde_json::from_value(json!({
            "id": "6f1c2a34-58e1-4b8a-9a59-0d2b5e1f7c10",
            "name": name,
            "sku": format!("SKU-{}", name),
            "price": price,
            "discountPrice": discount,
            "storeId": "a3c1d7e2-9b4f-4e10-8d2a-5c6b7e8f9a01",
            "createdAt": "2025-02-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_sort_by_effective_price() {
        let mut rows = vec![
            product("lamp", 50.0, Some(10.0)),
            product("desk", 30.0, None),
            product("chair", 20.0, None),
        ];
        sort_list(&mut rows, "price", true);
        let names: Vec<_> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["lamp", "chair", "desk"]);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let mut rows = vec![product("b", 1.0, None), product("A", 1.0, None), product("c", 1.0, None)];
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0].name, "c");
        assert_eq!(rows[2].name, "A");
    }

    #[test]
    fn test_detail_tab_key() {
        let p = product("lamp", 1.0, None);
        assert_eq!(
            detail_tab_key(&p),
            "a001_product_detail_6f1c2a34-58e1-4b8a-9a59-0d2b5e1f7c10"
        );
    }
}

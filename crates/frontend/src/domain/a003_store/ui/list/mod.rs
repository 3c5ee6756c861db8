pub mod state;

use self::state::create_state;
use crate::layout::global_context::{revision_changed, AppGlobalContext};
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::record_actions::RecordActions;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::confirm::{confirm, hard_delete_prompt, soft_delete_prompt};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::record_lifecycle::RecordLifecycle;
use crate::shared::toast::use_toast;
use contracts::domain::a003_store::StoreDto;
use contracts::shared::record_state::HasRecordState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for StoreDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "owner" => cmp_text(&self.owner_name, &other.owner_name),
            "email" => cmp_text(&self.email, &other.email),
            "products" => self.product_count.cmp(&other.product_count),
            "verified" => self.is_verified.cmp(&other.is_verified),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

pub fn detail_tab_key(store: &StoreDto) -> String {
    format!("a003_store_detail_{}", store.id)
}

pub fn verify_prompt(store: &StoreDto) -> String {
    if store.is_verified {
        format!("Revoke verification of store \"{}\"?", store.name)
    } else {
        format!("Mark store \"{}\" as verified?", store.name)
    }
}

#[component]
pub fn StoreList() -> impl IntoView {
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
            match api.stores.list(&query).await {
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

    let open_new = move || tabs_store.open_tab("a003_store_new", "New store");
    let open_detail = move |s: &StoreDto| {
        tabs_store.open_tab(&detail_tab_key(s), &format!("Store {}", s.name));
    };

    let toggle_verified = move |s: StoreDto| {
        if !confirm(&verify_prompt(&s)) {
            return;
        }
        let verified = !s.is_verified;
        toast.track(
            async move { api.stores.set_verified(s.id, verified).await },
            if verified { "Store verified" } else { "Store verification revoked" },
            load_items,
        );
    };

    let soft_delete = move |s: StoreDto| {
        if !confirm(&soft_delete_prompt("store", &s.name)) {
            return;
        }
        toast.track(
            async move { api.stores.soft_delete(s.id).await },
            "Store deleted",
            load_items,
        );
    };

    let restore = move |s: StoreDto| {
        toast.track(
            async move { api.stores.restore(s.id).await },
            "Store restored",
            load_items,
        );
    };

    let hard_delete = move |s: StoreDto| {
        if !confirm(&hard_delete_prompt("store", &s.name)) {
            return;
        }
        toast.track(
            async move { api.stores.hard_delete(s.id).await },
            "Store permanently deleted",
            load_items,
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a003_store--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stores"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.page.total_count.to_string())}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                        {icon("plus")}
                        "New store"
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
                                <Input value=search placeholder="Name, owner or email..." />
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
                                on_page_change=Callback::new(move |page| {
                                    state.update(|s| s.query.go_to(page));
                                    load_items();
                                })
                                on_page_size_change=Callback::new(move |size| {
                                    state.update(|s| {
                                        s.query.page_size = size;
                                        s.query.go_to(1);
                                    });
                                    load_items();
                                })
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=200.0 />
                                <SortableHeaderCell label="Owner" sort_field="owner" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=160.0 />
                                <SortableHeaderCell label="Email" sort_field="email" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=180.0 />
                                <SortableHeaderCell label="Products" sort_field="products" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=90.0 />
                                <SortableHeaderCell label="Verified" sort_field="verified" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=110.0 />
                                <TableHeaderCell min_width=100.0>"State"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=180.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|s| (s.id, s.is_verified, s.is_active, s.is_deleted)
                                children=move |s: StoreDto| {
                                    let record_state = s.record_state();
                                    let s_link = s.clone();
                                    let s_edit = s.clone();
                                    let s_verify = s.clone();
                                    let s_del = s.clone();
                                    let s_restore = s.clone();
                                    let s_hard = s.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(&s_link);
                                                        }
                                                    >
                                                        {s.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{s.owner_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{s.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{s.product_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="badge-button"
                                                        title="Toggle verification"
                                                        disabled=record_state == contracts::shared::RecordState::Deleted
                                                        on:click=move |_| toggle_verified(s_verify.clone())
                                                    >
                                                        {if s.is_verified {
                                                            view! { <UiBadge variant="success".to_string()>"Verified"</UiBadge> }.into_any()
                                                        } else {
                                                            view! { <UiBadge variant="warning".to_string()>"Unverified"</UiBadge> }.into_any()
                                                        }}
                                                    </button>
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
                                                <TableCellLayout>{format_date(&s.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RecordActions
                                                    state=record_state
                                                    on_edit=Callback::new(move |_| open_detail(&s_edit))
                                                    on_soft_delete=Callback::new(move |_| soft_delete(s_del.clone()))
                                                    on_restore=Callback::new(move |_| restore(s_restore.clone()))
                                                    on_hard_delete=Callback::new(move |_| hard_delete(s_hard.clone()))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.page.is_empty())>
                        <div class="table__empty">"No stores found"</div>
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

    fn store(name: &str, verified: bool, products: u64) -> StoreDto {
        serde_json::from_value(json!({
            "id": uuid::Uuid::new_v4(),
            "name": name,
            "ownerName": "Owner",
            "email": "shop@example.com",
            "isVerified": verified,
            "isActive": true,
            "productCount": products,
            "createdAt": "2025-01-10T08:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_verify_prompt_follows_current_flag() {
        assert_eq!(
            verify_prompt(&store("North", false, 0)),
            "Mark store \"North\" as verified?"
        );
        assert!(verify_prompt(&store("North", true, 0)).starts_with("Revoke"));
    }

    #[test]
    fn test_sort_by_product_count() {
        let mut rows = vec![store("a", false, 5), store("b", true, 12), store("c", false, 1)];
        sort_list(&mut rows, "products", false);
        let counts: Vec<u64> = rows.iter().map(|s| s.product_count).collect();
        assert_eq!(counts, vec![12, 5, 1]);
    }
}

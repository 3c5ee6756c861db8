pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_service::use_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::record_actions::RecordActions;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::confirm::{confirm, hard_delete_prompt, soft_delete_prompt};
use crate::shared::date_utils::{format_date, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_opt, cmp_text, sort_list, toggle_sort_state, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::record_lifecycle::RecordLifecycle;
use crate::shared::toast::use_toast;
use contracts::domain::a004_user::UserListDto;
use contracts::enums::UserRole;
use contracts::shared::record_state::HasRecordState;
use contracts::shared::RecordState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for UserListDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "full_name" => cmp_text(&self.full_name, &other.full_name),
            "email" => cmp_text(&self.email, &other.email),
            "role" => self.role.code().cmp(other.role.code()),
            "created_at" => self.created_at.cmp(&other.created_at),
            "last_login_at" => cmp_opt(self.last_login_at, other.last_login_at),
            _ => Ordering::Equal,
        }
    }
}

pub fn detail_tab_key(user: &UserListDto) -> String {
    format!("a004_user_detail_{}", user.id)
}

pub fn activation_prompt(user: &UserListDto) -> String {
    if user.is_active {
        format!("Deactivate user \"{}\"? They will not be able to sign in.", user.full_name)
    } else {
        format!("Activate user \"{}\"?", user.full_name)
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let role = RwSignal::new(None::<UserRole>);
    let show_deleted = RwSignal::new(false);

    let load_items = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        spawn_local(async move {
            match api.users.list(&query).await {
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
        let selected_role = role.get_untracked();
        let include_deleted = show_deleted.get_untracked();
        state.update(|s| s.set_filters(&text, selected_role, include_deleted));
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

    let open_detail = move |u: &UserListDto| {
        tabs_store.open_tab(&detail_tab_key(u), &format!("User {}", u.full_name));
    };

    let toggle_active = move |u: UserListDto| {
        if !confirm(&activation_prompt(&u)) {
            return;
        }
        let active = !u.is_active;
        toast.track(
            async move { api.users.set_active(u.id, active).await },
            if active { "User activated" } else { "User deactivated" },
            load_items,
        );
    };

    let soft_delete = move |u: UserListDto| {
        if !confirm(&soft_delete_prompt("user", &u.full_name)) {
            return;
        }
        toast.track(async move { api.users.soft_delete(u.id).await }, "User deleted", load_items);
    };

    let restore = move |u: UserListDto| {
        toast.track(async move { api.users.restore(u.id).await }, "User restored", load_items);
    };

    let hard_delete = move |u: UserListDto| {
        if !confirm(&hard_delete_prompt("user", &u.full_name)) {
            return;
        }
        toast.track(
            async move { api.users.hard_delete(u.id).await },
            "User permanently deleted",
            load_items,
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a004_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.page.total_count.to_string())}
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
                                <Input value=search placeholder="Name or email..." />
                                <select
                                    class="filter-select"
                                    on:change=move |ev| {
                                        role.set(UserRole::from_code(&event_target_value(&ev)));
                                        apply_filters();
                                    }
                                >
                                    <option value="">"All roles"</option>
                                    {UserRole::all()
                                        .into_iter()
                                        .map(|r| view! { <option value=r.code()>{r.display_name()}</option> })
                                        .collect_view()}
                                </select>
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
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="full_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=200.0 />
                                <SortableHeaderCell label="Email" sort_field="email" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=200.0 />
                                <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                                <SortableHeaderCell label="Role" sort_field="role" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=100.0>"State"</TableHeaderCell>
                                <SortableHeaderCell label="Last login" sort_field="last_login_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=140.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) />
                                <TableHeaderCell min_width=240.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|u| (u.id, u.is_active, u.is_deleted)
                                children=move |u: UserListDto| {
                                    let record_state = u.record_state();
                                    let u_link = u.clone();
                                    let u_toggle = u.clone();
                                    let u_del = u.clone();
                                    let u_restore = u.clone();
                                    let u_hard = u.clone();
                                    let is_active = u.is_active;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(&u_link);
                                                        }
                                                    >
                                                        {u.full_name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{u.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{u.phone_number.clone().unwrap_or_else(|| "—".to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=if u.role == UserRole::Admin { "primary" } else { "neutral" }.to_string()>
                                                        {u.role.display_name()}
                                                    </UiBadge>
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
                                                <TableCellLayout>{format_datetime_opt(u.last_login_at.as_ref())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&u.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    {(record_state != RecordState::Deleted).then(|| view! {
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| toggle_active(u_toggle.clone())
                                                        >
                                                            {if is_active { "Deactivate" } else { "Activate" }}
                                                        </Button>
                                                    })}
                                                    <RecordActions
                                                        state=record_state
                                                        on_soft_delete=Callback::new(move |_| soft_delete(u_del.clone()))
                                                        on_restore=Callback::new(move |_| restore(u_restore.clone()))
                                                        on_hard_delete=Callback::new(move |_| hard_delete(u_hard.clone()))
                                                    />
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.page.is_empty())>
                        <div class="table__empty">"No users found"</div>
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

    fn user(name: &str, active: bool) -> UserListDto {
        serde_json::from_value(json!({
            "id": uuid::Uuid::new_v4(),
            "fullName": name,
            "email": "u@example.com",
            "role": "Seller",
            "isActive": active,
            "createdAt": "2025-01-02T03:04:05Z",
            "lastLoginAt": null
        }))
        .unwrap()
    }

    #[test]
    fn test_activation_prompt() {
        assert!(activation_prompt(&user("Ari Moss", true)).starts_with("Deactivate user \"Ari Moss\""));
        assert_eq!(activation_prompt(&user("Ari Moss", false)), "Activate user \"Ari Moss\"?");
    }

    #[test]
    fn test_never_logged_in_sorts_last() {
        let mut rows = vec![user("a", true), user("b", true)];
        rows[1].last_login_at = Some(chrono::Utc::now());
        sort_list(&mut rows, "last_login_at", true);
        assert_eq!(rows[0].full_name, "b");
    }
}

//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::list_label;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![
                ("d401_overview", "activity"),
                ("d400_banner_event_analytics", "pie-chart"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: vec![("a001_product", "package"), ("a003_store", "store")],
            admin_only: false,
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            items: vec![("a002_order", "shopping-cart"), ("a007_billing", "receipt")],
            admin_only: false,
        },
        MenuGroup {
            id: "marketing",
            label: "Marketing",
            icon: "tag",
            items: vec![("a005_banner_event", "tag")],
            admin_only: false,
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "truck",
            items: vec![("a006_delivery", "truck")],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "users",
            items: vec![("a004_user", "users")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {move || {
                let is_admin = auth_state.with(|s| s.is_admin());
                get_menu_groups()
                    .into_iter()
                    .filter(|group| is_admin || !group.admin_only)
                    .map(|group| {
                        let group_id = group.id.to_string();
                        let group_id_for_click = group_id.clone();
                        let group_id_for_exp = group_id.clone();
                        let items_stored = StoredValue::new(group.items.clone());

                        view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(group.icon)}
                                        <span>{group.label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>

                                <Show when=move || expanded_groups.get().contains(&group_id)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(key, icon_name)| {
                                            let label = list_label(key).unwrap_or(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(key))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| (tab.key.clone(), tab.title.clone())
                    children=move |tab| view! { <TabComponent tab=tab /> }
                />
                <Show when=move || tabs_store.opened.with(|t| t.len() > 1)>
                    <button
                        class="tabs-bar__close-all"
                        title="Close all tabs"
                        on:click=move |_| tabs_store.close_all()
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
                <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                    <div class="tabs__empty">"Pick a section in the sidebar"</div>
                </Show>
            </div>
        </div>
    }
}

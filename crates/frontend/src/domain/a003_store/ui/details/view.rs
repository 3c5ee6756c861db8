use super::view_model::StoreDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_service::use_api;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::form_utils::opt_text;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn StoreDetails(
    id: Option<Uuid>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StoreDetailsViewModel::new(use_api(), use_toast());
    vm.load(id);

    // A tab restored from `?active=` only knows the id; name it once loaded.
    if let (Some(id), Some(tabs_store)) = (id, use_context::<AppGlobalContext>()) {
        Effect::new(move |_| {
            if let Some(name) = vm.record.with(|r| r.as_ref().map(|r| r.name.clone())) {
                tabs_store.update_tab_title(&format!("a003_store_detail_{}", id), &format!("Store {}", name));
            }
        });
    }

    view! {
        <PageFrame page_id="a003_store--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() {
                            format!("Store {}", vm.form.with(|f| f.name.clone()))
                        } else {
                            "New store".to_string()
                        }}
                    </h1>
                    {move || vm.record.with(|r| r.as_ref().map(|s| {
                        if s.is_verified {
                            view! { <UiBadge variant="success".to_string()>"Verified"</UiBadge> }.into_any()
                        } else {
                            view! { <UiBadge variant="warning".to_string()>"Unverified"</UiBadge> }.into_any()
                        }
                    }))}
                </div>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <div class="details-form">
                <div class="form-group">
                    <label for="store-name">"Name"</label>
                    <input
                        type="text"
                        id="store-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="store-owner">"Owner"</label>
                        <input
                            type="text"
                            id="store-owner"
                            prop:value=move || vm.form.with(|f| f.owner_name.clone())
                            on:input=move |ev| vm.form.update(|f| f.owner_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="store-email">"Email"</label>
                        <input
                            type="email"
                            id="store-email"
                            prop:value=move || vm.form.with(|f| f.email.clone())
                            on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="store-phone">"Phone"</label>
                        <input
                            type="tel"
                            id="store-phone"
                            prop:value=move || vm.form.with(|f| f.phone.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.phone = opt_text(&event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="store-address">"Address"</label>
                    <textarea
                        id="store-address"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.address.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.address = opt_text(&event_target_value(&ev)))
                    />
                </div>
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.with(|f| f.is_active)
                        on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "Active"
                </label>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save(on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {icon("check")}
                    {move || if vm.saving.get() { "Saving..." } else if vm.is_edit_mode() { "Save" } else { "Create" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Close"
                </Button>
            </div>
        </PageFrame>
    }
}

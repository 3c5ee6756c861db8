use super::view_model::ProductDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_service::use_api;
use crate::shared::form_utils::{opt_text, opt_to_input, parse_f64_or, parse_i64_or, parse_opt_f64};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn ProductDetails(
    id: Option<Uuid>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(use_api(), use_toast());
    vm.load(id);

    // A tab restored from `?active=` only knows the id; name it once loaded.
    if let (Some(id), Some(tabs_store)) = (id, use_context::<AppGlobalContext>()) {
        Effect::new(move |_| {
            if let Some(name) = vm.record.with(|r| r.as_ref().map(|r| r.name.clone())) {
                tabs_store.update_tab_title(&format!("a001_product_detail_{}", id), &format!("Product {}", name));
            }
        });
    }

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() {
                            format!("Product {}", vm.form.with(|f| f.name.clone()))
                        } else {
                            "New product".to_string()
                        }}
                    </h1>
                </div>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            <div class="details-form">
                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-sku">"SKU"</label>
                    <input
                        type="text"
                        id="product-sku"
                        prop:value=move || vm.form.with(|f| f.sku.clone())
                        on:input=move |ev| vm.form.update(|f| f.sku = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.description = opt_text(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product-price">"Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="product-price"
                            prop:value=move || vm.form.with(|f| f.price.to_string())
                            on:input=move |ev| vm.form.update(|f| f.price = parse_f64_or(&event_target_value(&ev), 0.0))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-discount">"Discount price"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="product-discount"
                            prop:value=move || vm.form.with(|f| opt_to_input(f.discount_price))
                            on:input=move |ev| vm.form.update(|f| f.discount_price = parse_opt_f64(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-stock">"Stock"</label>
                        <input
                            type="number"
                            id="product-stock"
                            prop:value=move || vm.form.with(|f| f.stock_quantity.to_string())
                            on:input=move |ev| vm.form.update(|f| f.stock_quantity = parse_i64_or(&event_target_value(&ev), 0))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product-category">"Category"</label>
                        <input
                            type="text"
                            id="product-category"
                            prop:value=move || vm.form.with(|f| f.category_name.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.category_name = opt_text(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-store">"Store"</label>
                        <select
                            id="product-store"
                            prop:value=move || vm.form.with(|f| opt_to_input(f.store_id))
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.store_id = Uuid::parse_str(&value).ok());
                            }
                        >
                            <option value="">"—"</option>
                            <For
                                each=move || vm.stores.get()
                                key=|s| s.id
                                children=move |s| {
                                    let value = s.id.to_string();
                                    let selected = move || vm.form.with(|f| f.store_id == Some(s.id));
                                    view! { <option value=value selected=selected>{s.name.clone()}</option> }
                                }
                            />
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="product-image">"Image URL"</label>
                    <input
                        type="text"
                        id="product-image"
                        prop:value=move || vm.form.with(|f| f.image_url.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.image_url = opt_text(&event_target_value(&ev)))
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

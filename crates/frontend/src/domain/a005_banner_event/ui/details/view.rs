use super::view_model::BannerEventDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_service::use_api;
use crate::shared::components::table::{format_count, format_money};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{parse_input_datetime, to_input_datetime};
use crate::shared::form_utils::{opt_text, opt_to_input, parse_f64_or, parse_i64_or, parse_opt_f64, parse_opt_u64};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::enums::{BannerEventType, DiscountType};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn BannerEventDetails(
    id: Option<Uuid>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BannerEventDetailsViewModel::new(use_api(), use_toast());
    vm.load(id);

    // A tab restored from `?active=` only knows the id; name it once loaded.
    if let (Some(id), Some(tabs_store)) = (id, use_context::<AppGlobalContext>()) {
        Effect::new(move |_| {
            if let Some(name) = vm.record.with(|r| r.as_ref().map(|r| r.title.clone())) {
                tabs_store.update_tab_title(&format!("a005_banner_event_detail_{}", id), &format!("Event {}", name));
            }
        });
    }

    view! {
        <PageFrame page_id="a005_banner_event--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() {
                            format!("Event {}", vm.form.with(|f| f.title.clone()))
                        } else {
                            "New banner event".to_string()
                        }}
                    </h1>
                    {move || vm.record.get().map(|e| view! {
                        <UiBadge variant=e.status.badge_variant().to_string()>{e.status.code()}</UiBadge>
                    })}
                </div>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="page__loading">"Loading..."</div>
            </Show>

            {move || vm.record.get().map(|e| {
                let summary = e.summary_or_default();
                view! {
                    <div class="details-summary">
                        <span>"Usage: " {e.usage_label()}</span>
                        <span>"Orders: " {format_count(summary.total_orders)}</span>
                        <span>"Discount given: " {format_money(summary.total_discount_given)}</span>
                        <span>"Average discount: " {format_money(summary.average_discount)}</span>
                        <span>"Products: " {e.product_count}</span>
                    </div>
                }
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="event-title">"Title"</label>
                    <input
                        type="text"
                        id="event-title"
                        prop:value=move || vm.form.with(|f| f.title.clone())
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="event-description">"Description"</label>
                    <textarea
                        id="event-description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.description = opt_text(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="event-image">"Banner image URL"</label>
                    <input
                        type="text"
                        id="event-image"
                        prop:value=move || vm.form.with(|f| f.banner_image_url.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.banner_image_url = opt_text(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="event-type">"Type"</label>
                        <select
                            id="event-type"
                            prop:value=move || vm.form.with(|f| f.event_type.code())
                            on:change=move |ev| {
                                if let Some(t) = BannerEventType::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.event_type = t);
                                }
                            }
                        >
                            {BannerEventType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="event-priority">"Priority"</label>
                        <input
                            type="number"
                            id="event-priority"
                            prop:value=move || vm.form.with(|f| f.priority.to_string())
                            on:input=move |ev| {
                                let value = parse_i64_or(&event_target_value(&ev), 0);
                                vm.form.update(|f| f.priority = i32::try_from(value).unwrap_or(0));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="event-discount-type">"Discount type"</label>
                        <select
                            id="event-discount-type"
                            prop:value=move || vm.form.with(|f| f.discount_type.code())
                            on:change=move |ev| {
                                if let Some(t) = DiscountType::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.discount_type = t);
                                }
                            }
                        >
                            <option value=DiscountType::Percentage.code()>"Percentage"</option>
                            <option value=DiscountType::FixedAmount.code()>"Fixed amount"</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="event-discount-value">"Discount value"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="event-discount-value"
                            prop:value=move || vm.form.with(|f| f.discount_value.to_string())
                            on:input=move |ev| vm.form.update(|f| f.discount_value = parse_f64_or(&event_target_value(&ev), 0.0))
                        />
                    </div>
                    <div class="form-group">
                        <label for="event-max-discount">"Max discount"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="event-max-discount"
                            prop:value=move || vm.form.with(|f| opt_to_input(f.max_discount_amount))
                            on:input=move |ev| vm.form.update(|f| f.max_discount_amount = parse_opt_f64(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="event-min-order">"Min order amount"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="event-min-order"
                            prop:value=move || vm.form.with(|f| opt_to_input(f.min_order_amount))
                            on:input=move |ev| vm.form.update(|f| f.min_order_amount = parse_opt_f64(&event_target_value(&ev)))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="event-start">"Starts (UTC)"</label>
                        <input
                            type="datetime-local"
                            id="event-start"
                            prop:value=move || vm.form.with(|f| to_input_datetime(&f.start_date))
                            on:change=move |ev| {
                                if let Some(dt) = parse_input_datetime(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.start_date = dt);
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="event-end">"Ends (UTC)"</label>
                        <input
                            type="datetime-local"
                            id="event-end"
                            prop:value=move || vm.form.with(|f| to_input_datetime(&f.end_date))
                            on:change=move |ev| {
                                if let Some(dt) = parse_input_datetime(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.end_date = dt);
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="event-usage-limit">"Usage limit"</label>
                        <input
                            type="number"
                            id="event-usage-limit"
                            placeholder="Unlimited"
                            prop:value=move || vm.form.with(|f| opt_to_input(f.usage_limit))
                            on:input=move |ev| vm.form.update(|f| f.usage_limit = parse_opt_u64(&event_target_value(&ev)))
                        />
                    </div>
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

use crate::shared::api_service::use_api;
use crate::shared::components::table::format_money;
use crate::shared::form_utils::parse_opt_f64;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a006_delivery::{DeliveryCompany, PaymentRequestWithDelivery};
use contracts::enums::DeliveryStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

/// Pick the delivery company for a payment request.
#[component]
pub fn AssignCompanyDialog(
    row: PaymentRequestWithDelivery,
    companies: Vec<DeliveryCompany>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let payment_request_id = row.payment_request_id;
    let company = RwSignal::new(
        row.company_info_id()
            .or_else(|| companies.first().map(|c| c.id)),
    );
    let saving = RwSignal::new(false);
    let has_companies = !companies.is_empty();

    let save = move || {
        let Some(company_info_id) = company.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = api.delivery.assign(payment_request_id, company_info_id).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("Delivery company assigned");
                    on_saved.run(());
                }
                Err(e) => {
                    toast.api_error(&e);
                }
            }
        });
    };

    view! {
        <div class="details-form">
            <p class="text-muted">
                {format!(
                    "{} · {} · {}",
                    row.order_number.clone().unwrap_or_else(|| "—".to_string()),
                    row.customer_name,
                    format_money(row.amount),
                )}
            </p>
            {if has_companies {
                view! {
                    <div class="form-group">
                        <label for="delivery-company">"Delivery company"</label>
                        <select
                            id="delivery-company"
                            on:change=move |ev| company.set(Uuid::parse_str(&event_target_value(&ev)).ok())
                        >
                            {companies
                                .into_iter()
                                .map(|c| {
                                    let id = c.id;
                                    view! {
                                        <option value=id.to_string() selected=move || company.get() == Some(id)>
                                            {c.name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                }
                .into_any()
            } else {
                view! { <div class="table__empty">"No active delivery companies"</div> }.into_any()
            }}
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get() || company.get().is_none())
                >
                    {icon("truck")}
                    {move || if saving.get() { "Saving..." } else { "Assign" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

/// Amount to post for a COD collection; blank or unparsable input means the order amount.
pub fn collected_amount(input: &str, order_amount: f64) -> f64 {
    parse_opt_f64(input)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(order_amount)
}

/// Record cash collected by the courier for a COD order.
#[component]
pub fn CollectCodDialog(
    row: PaymentRequestWithDelivery,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let payment_request_id = row.payment_request_id;
    let order_amount = row.amount;
    let amount = RwSignal::new(row.amount.to_string());
    let notes = RwSignal::new(String::new());
    let delivery_status = RwSignal::new(DeliveryStatus::Delivered);
    let saving = RwSignal::new(false);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let collected = collected_amount(&amount.get_untracked(), order_amount);
        let status = delivery_status.get_untracked();
        let notes = notes.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let result = api
                .delivery
                .collect_cod(payment_request_id, status, notes, collected)
                .await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(format!("Collected {}", format_money(collected)));
                    on_saved.run(());
                }
                Err(e) => {
                    toast.api_error(&e);
                }
            }
        });
    };

    view! {
        <div class="details-form">
            <p class="text-muted">
                {format!(
                    "{} · {} · order amount {}",
                    row.order_number.clone().unwrap_or_else(|| "—".to_string()),
                    row.customer_name,
                    format_money(row.amount),
                )}
            </p>
            <div class="form-group">
                <label for="cod-amount">"Collected amount"</label>
                <input
                    type="number"
                    step="0.01"
                    id="cod-amount"
                    placeholder=format_money(order_amount)
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="cod-status">"Delivery status"</label>
                <select
                    id="cod-status"
                    prop:value=move || delivery_status.get().code()
                    on:change=move |ev| {
                        if let Some(s) = DeliveryStatus::from_code(&event_target_value(&ev)) {
                            delivery_status.set(s);
                        }
                    }
                >
                    {DeliveryStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="cod-notes">"Notes"</label>
                <textarea
                    id="cod-notes"
                    rows="3"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    {icon("dollar-sign")}
                    {move || if saving.get() { "Saving..." } else { "Collect" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_amount_blank_uses_order_amount() {
        assert_eq!(collected_amount("", 99.5), 99.5);
        assert_eq!(collected_amount("   ", 99.5), 99.5);
    }

    #[test]
    fn test_collected_amount_garbage_uses_order_amount() {
        assert_eq!(collected_amount("abc", 40.0), 40.0);
        assert_eq!(collected_amount("-5", 40.0), 40.0);
    }

    #[test]
    fn test_collected_amount_keeps_entered_value() {
        assert_eq!(collected_amount("35,5", 40.0), 35.5);
        assert_eq!(collected_amount("40", 40.0), 40.0);
    }
}

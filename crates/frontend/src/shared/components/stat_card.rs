use crate::shared::icons::icon;
use leptos::prelude::*;

/// Total with an icon; `value` is already formatted.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    /// `"success"`, `"warning"`, `"error"` or empty.
    #[prop(optional)]
    variant: &'static str,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = match variant {
        "success" => "stat-card stat-card--success",
        "warning" => "stat-card stat-card--warning",
        "error" => "stat-card stat-card--error",
        _ => "stat-card",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

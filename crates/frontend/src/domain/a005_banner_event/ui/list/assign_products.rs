use crate::shared::api_service::use_api;
use crate::shared::components::table::format_money;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_product::ProductDto;
use contracts::shared::PageQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

/// Candidate products offered in the dialog.
const PRODUCT_OPTIONS_LIMIT: u32 = 100;

pub fn toggle_selection(selected: &mut Vec<Uuid>, id: Uuid, checked: bool) {
    if checked {
        if !selected.contains(&id) {
            selected.push(id);
        }
    } else {
        selected.retain(|s| *s != id);
    }
}

/// Replaces the product set of a banner event.
#[component]
pub fn AssignProductsDialog(
    event_id: Uuid,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let candidates = RwSignal::new(Vec::<ProductDto>::new());
    let selected = RwSignal::new(Vec::<Uuid>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let filter = RwSignal::new(String::new());

    spawn_local(async move {
        match api.banner_events.products(event_id).await {
            Ok(assigned) => selected.set(assigned.iter().map(|p| p.id).collect()),
            Err(e) => {
                toast.api_error(&e);
            }
        }
        match api
            .products
            .list(&PageQuery::with_page_size(PRODUCT_OPTIONS_LIMIT))
            .await
        {
            Ok(page) => candidates.set(page.data),
            Err(e) => {
                toast.api_error(&e);
            }
        }
        loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let needle = filter.get().trim().to_lowercase();
        candidates.with(|items| {
            items
                .iter()
                .filter(|p| {
                    needle.is_empty()
                        || p.name.to_lowercase().contains(&needle)
                        || p.sku.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let ids = selected.get_untracked();
        spawn_local(async move {
            let result = api.banner_events.assign_products(event_id, ids).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("Event products updated");
                    on_saved.run(());
                }
                Err(e) => {
                    toast.api_error(&e);
                }
            }
        });
    };

    view! {
        <div class="assign-products">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <Input value=filter placeholder="Filter by name or SKU..." />
                <span class="assign-products__count">
                    {move || format!("{} selected", selected.with(|s| s.len()))}
                </span>
            </Flex>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading..."</div> }
            >
                <div class="assign-products__list">
                    <For
                        each=move || visible.get()
                        key=|p| p.id
                        children=move |p: ProductDto| {
                            let id = p.id;
                            view! {
                                <label class="checkbox-label assign-products__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|s| s.contains(&id))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            selected.update(|s| toggle_selection(s, id, checked));
                                        }
                                    />
                                    <span>{p.name.clone()}</span>
                                    <span class="text-muted">{p.sku.clone()}</span>
                                    <span class="text-muted">{format_money(p.effective_price())}</span>
                                </label>
                            }
                        }
                    />
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No products"</div>
                    </Show>
                </div>
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    {icon("check")}
                    {move || if saving.get() { "Saving..." } else { "Save" }}
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
    fn test_toggle_selection() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut selected = vec![a];
        toggle_selection(&mut selected, a, true);
        assert_eq!(selected, vec![a]);
        toggle_selection(&mut selected, b, true);
        assert_eq!(selected, vec![a, b]);
        toggle_selection(&mut selected, a, false);
        assert_eq!(selected, vec![b]);
    }
}

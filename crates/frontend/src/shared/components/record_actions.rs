use crate::shared::icons::icon;
use contracts::shared::RecordState;
use leptos::prelude::*;
use thaw::*;

/// Row actions allowed by the record's lifecycle state.
///
/// Live rows offer soft delete; deleted rows offer restore and hard delete.
#[component]
pub fn RecordActions(
    state: RecordState,
    #[prop(optional)] on_edit: Option<Callback<()>>,
    on_soft_delete: Callback<()>,
    on_restore: Callback<()>,
    on_hard_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="row-actions">
            {on_edit
                .filter(|_| state != RecordState::Deleted)
                .map(|cb| {
                    view! {
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| cb.run(())>
                            {icon("edit")}
                        </Button>
                    }
                })}
            {state.can_soft_delete().then(|| {
                view! {
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| on_soft_delete.run(())>
                        {icon("delete")}
                    </Button>
                }
            })}
            {state.can_restore().then(|| {
                view! {
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=move |_| on_restore.run(())>
                        {icon("restore")}
                        "Restore"
                    </Button>
                }
            })}
            {state.can_hard_delete().then(|| {
                view! {
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| on_hard_delete.run(())>
                        {icon("x")}
                        "Delete forever"
                    </Button>
                }
            })}
        </div>
    }
}

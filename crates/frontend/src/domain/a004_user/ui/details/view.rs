use crate::shared::api_service::use_api;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a004_user::UserListDto;
use contracts::shared::record_state::HasRecordState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

/// Read-only card; account changes happen from the list.
#[component]
pub fn UserDetails(id: Uuid, on_close: Callback<()>) -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let user = RwSignal::new(None::<UserListDto>);

    spawn_local(async move {
        match api.users.get(id).await {
            Ok(u) => user.set(Some(u)),
            Err(e) => {
                toast.api_error(&e);
            }
        }
    });

    view! {
        <PageFrame page_id="a004_user--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || user.with(|u| u.as_ref().map(|u| u.full_name.clone()).unwrap_or_else(|| "User".to_string()))}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        "Close"
                    </Button>
                </div>
            </div>

            {move || user.get().map(|u| {
                let record_state = u.record_state();
                view! {
                    <div class="details-grid">
                        <div class="details-field">
                            <span class="details-field__label">"Email"</span>
                            <span>{u.email.clone()}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Phone"</span>
                            <span>{u.phone_number.clone().unwrap_or_else(|| "—".to_string())}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Role"</span>
                            <span>{u.role.display_name()}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"State"</span>
                            <UiBadge variant=record_state.badge_variant().to_string()>{record_state.display_name()}</UiBadge>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Registered"</span>
                            <span>{format_datetime(&u.created_at)}</span>
                        </div>
                        <div class="details-field">
                            <span class="details-field__label">"Last login"</span>
                            <span>{format_datetime_opt(u.last_login_at.as_ref())}</span>
                        </div>
                    </div>
                }
            })}
        </PageFrame>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::shared::api_service::ApiService;
use crate::shared::api_utils::api_base;
use crate::shared::config::config;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::{provide_auth, AuthProvider, AuthState};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new(config().ui.toast_timeout_ms));

    // Auth signals come first so a 401 from any call can sign the user out.
    let set_auth_state = provide_auth();
    let client = ApiClient::new(api_base(), config().api.request_timeout_ms)
        .with_unauthorized_handler(Callback::new(move |_: ()| {
            log::warn!("session rejected by the server, signing out");
            set_auth_state.set(AuthState::default());
        }));
    provide_context(ApiService::new(client));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
        <ModalHost />
    }
}

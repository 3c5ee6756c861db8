use contracts::system::auth::{AdminUser, LoginResult};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage;
use crate::shared::api_service::use_api;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<AdminUser>,
    /// A stored token is being validated; neither login page nor shell yet.
    pub restoring: bool,
}

impl AuthState {
    pub fn signed_in(result: LoginResult) -> Self {
        Self {
            access_token: Some(result.token),
            user: Some(result.user),
            restoring: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// Creates the auth signals and puts them in context.
///
/// Called in the app root before the API client is built, so the client's
/// 401 handler can reset the session through the returned setter.
pub fn provide_auth() -> WriteSignal<AuthState> {
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: storage::get_access_token().is_some(),
        ..AuthState::default()
    });
    provide_context(auth_state);
    provide_context(set_auth_state);
    set_auth_state
}

/// Restores a stored session once on mount, then renders children.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let api = use_api();

    Effect::new(move |_| {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        spawn_local(async move {
            match api.auth.me().await {
                Ok(user) => {
                    log::info!("session restored for {}", user.email);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user: Some(user),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::warn!("stored token rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the token of a successful login and switch to the shell.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, result: LoginResult) {
    storage::save_access_token(&result.token);
    set_auth_state.set(AuthState::signed_in(result));
}

/// Logout is local: drop the token and return to the login page.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn login_result(role: &str) -> LoginResult {
        serde_json::from_value(json!({
            "token": "t-1",
            "user": {
                "id": "1e2d3c4b-5a69-4788-9a0b-c1d2e3f4a5b6",
                "fullName": "Root Admin",
                "email": "root@example.com",
                "role": role
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_signed_in_state() {
        let state = AuthState::signed_in(login_result("Admin"));
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert!(!state.restoring);

        let seller = AuthState::signed_in(login_result("Seller"));
        assert!(!seller.is_admin());
    }

    #[test]
    fn test_default_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }
}

use contracts::system::auth::{AuthResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Проверка сохранённого токена ещё идёт
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let token = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: token.is_some(),
        ..AuthState::default()
    });

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        let Some(access_token) = token.clone() else {
            return;
        };
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    if e.is_unauthorized() {
                        storage::clear_tokens();
                    }
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

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

/// Сохранить сессию после входа или регистрации
pub fn start_session(set_auth_state: WriteSignal<AuthState>, response: AuthResponse) {
    storage::save_access_token(&response.jwt);
    set_auth_state.set(AuthState {
        access_token: Some(response.jwt),
        user_info: Some(response.user),
        restoring: false,
    });
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

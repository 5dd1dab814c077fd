//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and brand
//! - User name and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title="Menú"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"ONE ERP"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{user_name}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| do_logout(set_auth_state)
                    title="Cerrar sesión"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

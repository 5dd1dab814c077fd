//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (приветствие, вход, регистрация или MainLayout)
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + страница)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::pages::welcome::WelcomePage;
use crate::system::pages::AuthScreen;
use leptos::prelude::*;
use thaw::*;

/// Инициализирует синхронизацию активной страницы с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! { <Shell /> }
}

/// Экраны без сессии
#[component]
fn Guest() -> impl IntoView {
    let screen = RwSignal::new(AuthScreen::default());

    move || match screen.get() {
        AuthScreen::Welcome => view! { <WelcomePage screen=screen /> }.into_any(),
        AuthScreen::Login => view! { <LoginPage screen=screen /> }.into_any(),
        AuthScreen::Register => view! { <RegisterPage screen=screen /> }.into_any(),
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || {
        let state = auth_state.get();
        if state.restoring {
            view! {
                <div class="app-loading">
                    <Spinner />
                </div>
            }
            .into_any()
        } else if state.is_authenticated() {
            view! { <MainLayout /> }.into_any()
        } else {
            view! { <Guest /> }.into_any()
        }
    }
}

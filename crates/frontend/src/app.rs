use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifications::{NotificationService, ToastHost};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
            <ToastHost />
        </ConfigProvider>
    }
}

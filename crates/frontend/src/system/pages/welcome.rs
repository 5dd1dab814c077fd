use super::AuthScreen;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WelcomePage(screen: RwSignal<AuthScreen>) -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box welcome-box">
                <h1>"ONE ERP"</h1>
                <p class="welcome-box__text">"Administra tus productos, categorías y ventas."</p>
                <div class="welcome-box__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| screen.set(AuthScreen::Login)
                    >
                        "Ingresar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| screen.set(AuthScreen::Register)
                    >
                        "Registrarte"
                    </Button>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::AuthScreen;
use crate::shared::notifications::use_notifications;
use crate::system::auth::api;
use crate::system::auth::context::{start_session, use_auth};
use contracts::shared::validation::FieldErrors;
use contracts::system::auth::LoginForm;

#[component]
pub fn LoginPage(screen: RwSignal<AuthScreen>) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let notifier = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    notifier.success("Ha ingresado correctamente");
                    start_session(set_auth_state, response);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    notifier.error("Credenciales invalidas");
                    set_is_loading.try_set(false);
                }
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| e.get(field).map(str::to_string))
                .map(|e| view! { <div class="field-error">{e}</div> })
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ONE ERP"</h1>
                <h2>"Iniciar sesión"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="m@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                            }
                            disabled=move || is_loading.get()
                        />
                        {field_error("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                            disabled=move || is_loading.get()
                        />
                        {field_error("password")}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"¿No tienes una cuenta? "</span>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        screen.set(AuthScreen::Register);
                    }>
                        "Registrarte"
                    </a>
                </div>
            </div>
        </div>
    }
}

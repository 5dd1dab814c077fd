use leptos::prelude::*;
use leptos::task::spawn_local;

use super::AuthScreen;
use crate::shared::notifications::use_notifications;
use crate::system::auth::api;
use crate::system::auth::context::{start_session, use_auth};
use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{AuthResponse, RegisterForm};

const REGISTER_FAILED: &str = "Error al registrar el usuario";
const SIGN_IN_FAILED: &str = "Error al iniciar sesion, intente iniciar sesion manualmente.";

#[component]
pub fn RegisterPage(screen: RwSignal<AuthScreen>) -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let notifier = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let (request, profile) = match form.with_untracked(|f| f.validate()) {
            Ok(valid) => valid,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_is_loading.set(true);

        spawn_local(async move {
            let registered = match api::register(&request).await {
                Ok(response) => response,
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
                    notifier.error(e.message_or(REGISTER_FAILED));
                    set_is_loading.try_set(false);
                    return;
                }
            };

            match api::update_profile(registered.user.id, &profile, &registered.jwt).await {
                Ok(user) => {
                    start_session(
                        set_auth_state,
                        AuthResponse {
                            jwt: registered.jwt,
                            user,
                        },
                    );
                }
                Err(e) => {
                    log::warn!("Profile update after registration failed: {}", e);
                    notifier.error(SIGN_IN_FAILED);
                    set_is_loading.try_set(false);
                    screen.try_set(AuthScreen::Login);
                }
            }
        });
    };

    let text_input = move |id: &'static str,
                           label: &'static str,
                           input_type: &'static str,
                           get: fn(&RegisterForm) -> String,
                           set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=input_type
                    id=id
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                    disabled=move || is_loading.get()
                />
                {move || {
                    errors.with(|e| e.get(id).map(str::to_string))
                        .map(|e| view! { <div class="field-error">{e}</div> })
                }}
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ONE ERP"</h1>
                <h2>"Crear cuenta"</h2>

                <form on:submit=on_submit>
                    {text_input("first_name", "Nombre", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {text_input("last_name", "Apellido", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {text_input("email", "Correo electrónico", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_input("password", "Contraseña", "password", |f| f.password.clone(), |f, v| f.password = v)}

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registrando..." } else { "Registrarte" }}
                    </button>
                </form>

                <div class="login-info">
                    <span>"¿Ya tienes una cuenta? "</span>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        screen.set(AuthScreen::Login);
                    }>
                        "Ingresar"
                    </a>
                </div>
            </div>
        </div>
    }
}

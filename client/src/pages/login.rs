//! Administrator login with email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leads::LoginRequest;
use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::session::SessionContext;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Correo o contraseña inválidos";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Ingresa tu correo y contraseña.";

/// Build the login body, requiring both fields. The email is trimmed; the
/// password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(token) => {
                        session.login(&token);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set(INVALID_CREDENTIALS_MESSAGE.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, &navigate);
        }
    };

    view! {
        <Header/>
        <main class="login-page">
            <section class="login-card">
                <h2>"Acceso Administrador"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Correo electrónico"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Iniciar sesión"
                    </button>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message">{move || error.get()}</p>
                    </Show>
                </form>
            </section>
        </main>
    }
}

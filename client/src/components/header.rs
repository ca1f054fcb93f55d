//! Site header with section links and the session-dependent nav.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted on every page. It re-reads the stored token on each navigation,
//! which makes it the component that keeps the session context current.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionContext;

/// Landing-page sections reachable from the header, as `(anchor, label)`.
pub const SECTIONS: &[(&str, &str)] = &[
    ("hero", "Inicio"),
    ("sobre-nosotros", "Sobre Nosotros"),
    ("contacto", "Contacto"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let _ = location.pathname.get();
        session.refresh();
    });

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <A href="/" attr:class="site-header__brand">
                    "CRM Leads 💎"
                </A>
                {SECTIONS
                    .iter()
                    .map(|(anchor, label)| {
                        view! {
                            <a class="site-header__link" href=format!("/#{anchor}")>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
                <Show when=move || session.is_authenticated()>
                    <A href="/dashboard" attr:class="site-header__link site-header__link--dashboard">
                        "Dashboard"
                    </A>
                </Show>
            </nav>
            <div class="site-header__session">
                <Show
                    when=move || session.is_authenticated()
                    fallback=move || {
                        view! {
                            <A href="/login" attr:class="site-header__button">
                                "Iniciar sesión"
                            </A>
                        }
                    }
                >
                    <button class="site-header__button" on:click=on_logout.clone()>
                        "Cerrar sesión"
                    </button>
                </Show>
            </div>
        </header>
    }
}

//! Static terms and conditions page linked from the contact form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::Header;

const CLAUSES: &[(&str, &str)] = &[
    (
        "Uso de la información",
        "Los datos que envías a través del formulario de contacto se usan únicamente para responder a tu consulta.",
    ),
    (
        "Conservación",
        "Guardamos tu nombre, correo y mensaje mientras exista una relación comercial o hasta que solicites su eliminación.",
    ),
    (
        "Tus derechos",
        "Puedes pedir acceso, rectificación o eliminación de tus datos escribiéndonos desde el mismo formulario.",
    ),
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Header/>
        <main class="terms-page">
            <h2>"Términos y condiciones"</h2>
            {CLAUSES
                .iter()
                .map(|(title, body)| {
                    view! {
                        <section class="terms-page__clause">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </section>
                    }
                })
                .collect_view()}
            <A href="/#contacto">"Volver al formulario"</A>
        </main>
    }
}

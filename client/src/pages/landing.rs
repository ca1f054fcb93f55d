//! Public landing page: hero, about section and the contact form.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leads::{ContactState, SubmitStatus};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::state::contact::ContactFormState;
use crate::util::config::{VERIFICATION_SCRIPT_URL, contact_gating};
use crate::util::verification::{ON_EXPIRED, ON_VERIFIED, clear_callbacks, install_callbacks};

fn submit_label(status: SubmitStatus) -> &'static str {
    if status == SubmitStatus::Sending { "Enviando..." } else { "Enviar" }
}

fn notice_class(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Success => "contact-notice contact-notice--success",
        SubmitStatus::Error => "contact-notice contact-notice--error",
        SubmitStatus::Idle | SubmitStatus::Sending => "contact-notice",
    }
}

/// Name, email and message inputs. All three are required, so the browser
/// blocks an incomplete form before it reaches local validation.
#[component]
fn ContactFields(state: RwSignal<ContactState>) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder="Nombre"
            required
            prop:value=move || state.get().form.name
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s: &mut ContactState| s.form.name = value);
            }
        />
        <input
            type="email"
            placeholder="Correo electrónico"
            required
            prop:value=move || state.get().form.email
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s: &mut ContactState| s.form.email = value);
            }
        />
        <textarea
            placeholder="Mensaje"
            required
            prop:value=move || state.get().form.message
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s: &mut ContactState| s.form.message = value);
            }
        ></textarea>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let contact = ContactFormState::new();
    let state = contact.state;
    let gating = contact_gating();
    let site_key = gating.site_key.clone();

    if site_key.is_some() {
        Effect::new(move || install_callbacks(move |token| contact.set_verification_token(token)));
        on_cleanup(clear_callbacks);
    }

    let require_terms = gating.require_terms;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        contact.submit(&gating);
    };

    let notice = Signal::derive(move || state.get().notice.unwrap_or_default());
    let on_close = Callback::new(move |()| contact.dismiss_notice());

    view! {
        <Header/>
        <main class="landing">
            <section id="hero" class="landing__hero">
                <h1>"Impulsa tu negocio con nosotros"</h1>
                <p>"Gestionamos tus oportunidades comerciales de principio a fin."</p>
                <a class="landing__cta" href="#contacto">"Contáctanos"</a>
            </section>

            <section id="sobre-nosotros" class="landing__about">
                <h2>"Sobre nosotros"</h2>
                <p>
                    "Somos un equipo dedicado a convertir cada consulta en una relación duradera. "
                    "Respondemos cada mensaje y hacemos seguimiento de cada contacto."
                </p>
            </section>

            <section id="contacto" class="landing__contact">
                <h2>"Contacto"</h2>
                <form class="contact-form" on:submit=on_submit>
                    <ContactFields state=state/>

                    <Show when=move || require_terms>
                        <label class="contact-form__terms">
                            <input
                                type="checkbox"
                                prop:checked=move || state.get().accepted_terms
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| s.accepted_terms = checked);
                                }
                            />
                            " Acepto los "
                            <A href="/terminos">"términos y condiciones"</A>
                        </label>
                    </Show>

                    {site_key.map(|key| {
                        view! {
                            <div
                                class="h-captcha"
                                data-sitekey=key
                                data-callback=ON_VERIFIED
                                data-expired-callback=ON_EXPIRED
                            ></div>
                            <script src=VERIFICATION_SCRIPT_URL defer></script>
                        }
                    })}

                    <button class="contact-form__submit" type="submit" disabled=move || state.get().is_sending()>
                        {move || submit_label(state.get().status)}
                    </button>
                </form>
            </section>

            <Show when=move || state.get().notice.is_some()>
                <div class=move || notice_class(state.get().status)>
                    <Modal message=notice button_label="Cerrar" on_close=on_close/>
                </div>
            </Show>
        </main>
    }
}

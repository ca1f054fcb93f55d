//! Blocking modal with a single acknowledge button.

use leptos::prelude::*;

/// Fullscreen modal. The backdrop does not dismiss it; only the button does.
#[component]
pub fn Modal(
    #[prop(optional, into)] title: Option<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] button_label: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal__backdrop" role="dialog" aria-modal="true">
            <div class="modal">
                {title.map(|title| view! { <h3 class="modal__title">{title}</h3> })}
                <p class="modal__message">{move || message.get()}</p>
                <button class="modal__button" on:click=move |_| on_close.run(())>
                    {button_label}
                </button>
            </div>
        </div>
    }
}

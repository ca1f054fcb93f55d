//! Table of one page of leads with per-row status buttons.

use leads::{Lead, LeadStatus};
use leptos::prelude::*;

const COLUMNS: [&str; 6] = ["Nombre", "Correo", "Mensaje", "Estado", "Fecha", "Acción"];

#[component]
pub fn LeadTable(
    #[prop(into)] leads: Signal<Vec<Lead>>,
    /// Called with `(lead id, requested status)`.
    on_status: Callback<(String, LeadStatus)>,
) -> impl IntoView {
    let rows = move || {
        leads
            .get()
            .into_iter()
            .map(|lead| {
                let current = lead.status;
                let buttons = LeadStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let id = lead.id.clone();
                        let class = if current == status {
                            "lead-table__status lead-table__status--active"
                        } else {
                            "lead-table__status"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_status.run((id.clone(), status))
                            >
                                {status.as_str()}
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <tr class="lead-table__row">
                        <td>{lead.name.clone()}</td>
                        <td>{lead.email.clone()}</td>
                        <td class="lead-table__message">{lead.message.clone()}</td>
                        <td class="lead-table__state">{current.as_str()}</td>
                        <td>{lead.created_date_label()}</td>
                        <td class="lead-table__actions">{buttons}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="lead-table__wrap">
            <table class="lead-table">
                <thead>
                    <tr>{COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

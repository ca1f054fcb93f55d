//! Lead dashboard: filters, summary, status chart, table and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. It fetches the lead collection once the
//! session is known to be authenticated and recomputes every derived view
//! (page slice, counts, chart) from the raw collection on each change.
//! A 403 from any call raises the blocking access-denied modal.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leads::{Lead, LeadStatus, StatusCounts, StatusFilter};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::lead_table::LeadTable;
use crate::components::modal::Modal;
use crate::components::pagination::{PagerState, Pagination};
use crate::components::status_chart::StatusChart;
use crate::state::dashboard::DashboardState;
use crate::state::session::SessionContext;
use crate::util::auth::{install_unauth_redirect, should_redirect_unauth};

/// Summary line entries, `(label, count)`, in display order.
fn summary_entries(counts: StatusCounts) -> [(&'static str, usize); 4] {
    [
        ("Total leads", counts.total()),
        ("Nuevos", counts.new),
        ("Contactados", counts.contacted),
        ("Descartados", counts.discarded),
    ]
}

/// Parse a `<select>` value, falling back to "all" for anything unknown.
fn parse_filter(value: &str) -> StatusFilter {
    value.parse().unwrap_or_default()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let dashboard = DashboardState::new();
    let board = dashboard.board;
    let query = dashboard.query;

    install_unauth_redirect(session, navigate.clone());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || !session.is_authenticated() {
            return;
        }
        requested.set(true);
        dashboard.load(session);
    });

    let visible = Signal::derive(move || {
        let board = board.get();
        let query = query.get();
        board.page(&query).items.into_iter().cloned().collect::<Vec<Lead>>()
    });
    let pager = Signal::derive(move || {
        let board = board.get();
        let view = board.page(&query.get());
        PagerState { page: view.page, page_count: view.page_count }
    });
    let counts = Signal::derive(move || board.get().counts());

    let on_status = Callback::new(move |(id, status): (String, LeadStatus)| dashboard.set_status(session, id, status));
    let on_previous = Callback::new(move |()| dashboard.previous_page());
    let on_next = Callback::new(move |()| dashboard.next_page());
    let on_page = Callback::new(move |page: usize| dashboard.go_to(page));

    let navigate_login = navigate.clone();
    let on_access_denied = Callback::new(move |()| {
        dashboard.acknowledge_access_denied(session);
        navigate_login("/login", NavigateOptions::default());
    });
    let denied_message = Signal::derive(|| leads::ApiError::AuthDenied.user_message());

    view! {
        <Header/>
        <Show when=move || board.get().reauth_required>
            <Modal
                title="Acceso denegado"
                message=denied_message
                button_label="Ir a Login"
                on_close=on_access_denied
            />
        </Show>

        <main class="dashboard-page">
            <section class="dashboard-page__panel">
                <h2 class="dashboard-page__title">"Panel de Leads"</h2>

                <Show when=move || should_redirect_unauth(&session.view.get())>
                    <p class="dashboard-page__notice">"Debes iniciar sesión. Redirigiendo..."</p>
                </Show>

                <Show when=move || board.get().loading && session.is_authenticated()>
                    <p class="dashboard-page__notice">"Cargando leads..."</p>
                </Show>
                <Show when=move || board.get().load_error>
                    <p class="dashboard-page__error">"Error al cargar los leads."</p>
                </Show>

                <Show when=move || board.get().ready()>
                    <div class="dashboard-page__filters">
                        <label>
                            "Filtrar por estado: "
                            <select
                                prop:value=move || query.get().filter.as_str()
                                on:change=move |ev| dashboard.set_filter(parse_filter(&event_target_value(&ev)))
                            >
                                {StatusFilter::OPTIONS
                                    .iter()
                                    .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <input
                            type="text"
                            placeholder="Buscar por nombre o correo..."
                            prop:value=move || query.get().search
                            on:input=move |ev| dashboard.set_search(event_target_value(&ev))
                        />
                    </div>

                    <div class="dashboard-page__summary">
                        {move || {
                            summary_entries(counts.get())
                                .into_iter()
                                .map(|(label, count)| {
                                    view! {
                                        <div>
                                            {label} ": " <span class="dashboard-page__count">{count}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <StatusChart counts=counts/>
                    <LeadTable leads=visible on_status=on_status/>
                    <Pagination pager=pager on_previous=on_previous on_next=on_next on_page=on_page/>
                </Show>
            </section>
        </main>
    }
}

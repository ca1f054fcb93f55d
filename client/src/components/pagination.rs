//! Previous / numbered / next page controls.
//!
//! Out-of-range pages cannot be requested: the edge buttons are disabled at
//! page 1 and at the last page.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Which controls are enabled for `page` of `page_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerState {
    pub page: usize,
    pub page_count: usize,
}

impl PagerState {
    pub fn previous_disabled(self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(self) -> bool {
        self.page >= self.page_count
    }

    /// 1-based numbers of every page button.
    pub fn numbers(self) -> Vec<usize> {
        (1..=self.page_count).collect()
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] pager: Signal<PagerState>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    on_page: Callback<usize>,
) -> impl IntoView {
    let numbers = move || {
        let current = pager.get().page;
        pager
            .get()
            .numbers()
            .into_iter()
            .map(|n| {
                let class = if n == current { "pagination__page pagination__page--current" } else { "pagination__page" };
                view! {
                    <button
                        class=class
                        on:click=move |_| on_page.run(n)
                    >
                        {n}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="pagination">
            <button
                class="pagination__edge"
                disabled=move || pager.get().previous_disabled()
                on:click=move |_| on_previous.run(())
            >
                "Anterior"
            </button>
            {numbers}
            <button
                class="pagination__edge"
                disabled=move || pager.get().next_disabled()
                on:click=move |_| on_next.run(())
            >
                "Siguiente"
            </button>
        </div>
    }
}

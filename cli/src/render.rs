//! Plain-text output for lead listings and summaries.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use leads::{LeadPage, StatusCounts};

/// One line per lead on the page, then a page footer.
pub fn lead_page(page: &LeadPage<'_>) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("No hay leads que coincidan.\n");
    }
    for lead in &page.items {
        let _ = writeln!(
            out,
            "{id}\t{name}\t{email}\t{status}\t{date}",
            id = lead.id,
            name = lead.name,
            email = lead.email,
            status = lead.status.label(),
            date = lead.created_date_label(),
        );
    }
    let _ = writeln!(out, "Página {} de {} ({} coincidencias)", page.page, page.page_count, page.match_count);
    out
}

/// Totals line plus one chart slice label per status.
pub fn summary(counts: &StatusCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total leads: {} | Nuevos: {} | Contactados: {} | Descartados: {}",
        counts.total(),
        counts.new,
        counts.contacted,
        counts.discarded
    );
    for slice in counts.chart_slices() {
        let _ = writeln!(out, "  {} = {}", slice.label(), slice.count);
    }
    out
}

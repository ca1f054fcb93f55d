use leads::{Lead, LeadStatus, ListQuery};

use super::*;

fn lead(id: &str, name: &str, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{}@x.com", name.to_lowercase()),
        message: "hola".to_owned(),
        status,
        created_at: "2025-03-03T10:00:00Z".to_owned(),
    }
}

#[test]
fn lead_page_lists_rows_and_footer() {
    let leads = vec![lead("1", "Ana", LeadStatus::New), lead("2", "Luis", LeadStatus::Contacted)];
    let rendered = lead_page(&ListQuery::default().view(&leads));
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1\tAna\tana@x.com\tNuevo\t3 Mar 2025");
    assert_eq!(lines[2], "Página 1 de 1 (2 coincidencias)");
}

#[test]
fn lead_page_reports_empty_result() {
    let rendered = lead_page(&ListQuery::default().view(&[]));
    assert!(rendered.starts_with("No hay leads"));
    assert!(rendered.ends_with("Página 1 de 0 (0 coincidencias)\n"));
}

#[test]
fn summary_prints_totals_and_slices() {
    let counts = StatusCounts { new: 3, contacted: 2, discarded: 2 };
    let rendered = summary(&counts);
    assert!(rendered.starts_with("Total leads: 7 | Nuevos: 3 | Contactados: 2 | Descartados: 2\n"));
    assert!(rendered.contains("Nuevo (43%) = 3"));
    assert!(rendered.contains("Contactado (29%) = 2"));
}

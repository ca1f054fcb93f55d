use super::*;

#[test]
fn summary_entries_list_total_then_statuses() {
    let counts = StatusCounts { new: 3, contacted: 2, discarded: 2 };
    assert_eq!(
        summary_entries(counts),
        [("Total leads", 7), ("Nuevos", 3), ("Contactados", 2), ("Descartados", 2)]
    );
}

#[test]
fn parse_filter_reads_select_values() {
    assert_eq!(parse_filter("todos"), StatusFilter::All);
    assert_eq!(parse_filter("nuevo"), StatusFilter::Only(LeadStatus::New));
    assert_eq!(parse_filter("descartado"), StatusFilter::Only(LeadStatus::Discarded));
}

#[test]
fn parse_filter_falls_back_to_all() {
    assert_eq!(parse_filter("bogus"), StatusFilter::All);
}

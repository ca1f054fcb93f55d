use super::*;

fn lead_with(status: LeadStatus, id: usize) -> Lead {
    Lead {
        id: id.to_string(),
        name: format!("Lead {id}"),
        email: format!("l{id}@x.com"),
        message: String::new(),
        status,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

fn collection(new: usize, contacted: usize, discarded: usize) -> Vec<Lead> {
    let mut leads = Vec::new();
    for (status, n) in [
        (LeadStatus::New, new),
        (LeadStatus::Contacted, contacted),
        (LeadStatus::Discarded, discarded),
    ] {
        for _ in 0..n {
            let id = leads.len();
            leads.push(lead_with(status, id));
        }
    }
    leads
}

#[test]
fn counts_cover_whole_collection() {
    let leads = collection(3, 2, 2);
    let counts = StatusCounts::from_leads(&leads);
    assert_eq!(counts, StatusCounts { new: 3, contacted: 2, discarded: 2 });
    assert_eq!(counts.total(), leads.len());
}

#[test]
fn counts_sum_to_collection_size_for_many_shapes() {
    for (n, c, d) in [(0, 0, 0), (1, 0, 0), (0, 4, 1), (10, 3, 7)] {
        let leads = collection(n, c, d);
        assert_eq!(StatusCounts::from_leads(&leads).total(), leads.len());
    }
}

#[test]
fn chart_percentages_round_to_whole_numbers() {
    let counts = StatusCounts { new: 3, contacted: 2, discarded: 2 };
    let labels: Vec<String> = counts.chart_slices().iter().map(ChartSlice::label).collect();
    assert_eq!(labels, ["Nuevo (43%)", "Contactado (29%)", "Descartado (29%)"]);
}

#[test]
fn chart_slices_cover_full_circle() {
    let counts = StatusCounts { new: 1, contacted: 1, discarded: 2 };
    let slices = counts.chart_slices();
    assert!((slices[0].start_degrees - 0.0).abs() < f64::EPSILON);
    assert!((slices[2].end_degrees - 360.0).abs() < 1e-9);
    assert!((slices[2].sweep_degrees() - 180.0).abs() < 1e-9);
}

#[test]
fn empty_collection_yields_zero_percent_slices() {
    let slices = StatusCounts::default().chart_slices();
    assert_eq!(slices.len(), 3);
    assert!(slices.iter().all(|s| s.percent == 0 && s.is_empty()));
    assert!(slices.iter().all(|s| s.sweep_degrees().abs() < f64::EPSILON));
}

#[test]
fn single_status_takes_entire_chart() {
    let slices = StatusCounts { new: 0, contacted: 5, discarded: 0 }.chart_slices();
    assert_eq!(slices[1].percent, 100);
    assert!((slices[1].sweep_degrees() - 360.0).abs() < 1e-9);
}

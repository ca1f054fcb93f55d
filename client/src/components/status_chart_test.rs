use super::*;
use leads::LeadStatus;

#[test]
fn empty_wedge_has_no_path() {
    assert_eq!(wedge_path(100.0, 100.0, 50.0, 90.0, 90.0), None);
}

#[test]
fn full_circle_uses_two_half_arcs() {
    let path = wedge_path(100.0, 100.0, 50.0, 0.0, 360.0).expect("path");
    assert_eq!(path, "M 100 50 A 50 50 0 1 1 100 150 A 50 50 0 1 1 100 50 Z");
}

#[test]
fn quarter_wedge_starts_at_twelve_oclock() {
    let path = wedge_path(100.0, 100.0, 50.0, 0.0, 90.0).expect("path");
    assert_eq!(path, "M 100 100 L 100.000 50.000 A 50 50 0 0 1 150.000 100.000 Z");
}

#[test]
fn wedges_over_half_use_large_arc_flag() {
    let path = wedge_path(100.0, 100.0, 50.0, 0.0, 270.0).expect("path");
    assert!(path.contains(" 0 1 1 "), "{path}");
}

#[test]
fn label_anchor_sits_mid_arc() {
    let slice = ChartSlice {
        status: LeadStatus::New,
        count: 1,
        percent: 50,
        start_degrees: 0.0,
        end_degrees: 180.0,
    };
    let (x, y) = label_anchor(&slice);
    assert!((x - (SIZE / 2.0 + LABEL_RADIUS)).abs() < 1e-9);
    assert!((y - SIZE / 2.0).abs() < 1e-9);
}

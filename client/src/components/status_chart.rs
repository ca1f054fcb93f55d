//! SVG pie chart of lead counts per status.
//!
//! Slice geometry comes from `StatusCounts::chart_slices`; this module only
//! turns angles into SVG path data.

#[cfg(test)]
#[path = "status_chart_test.rs"]
mod status_chart_test;

use leads::{ChartSlice, StatusCounts};
use leptos::prelude::*;

const SIZE: f64 = 250.0;
const RADIUS: f64 = 80.0;
const LABEL_RADIUS: f64 = 105.0;

/// Point on a circle at `degrees` clockwise from twelve o'clock.
fn polar(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (cx + radius * radians.sin(), cy - radius * radians.cos())
}

/// SVG path for a pie wedge between two angles.
///
/// Returns `None` for empty wedges. A full-circle wedge is drawn as two half
/// arcs since a single arc cannot start and end on the same point.
pub fn wedge_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Option<String> {
    let sweep = end - start;
    if sweep <= f64::EPSILON {
        return None;
    }
    if sweep >= 360.0 - 1e-9 {
        return Some(format!(
            "M {cx} {top} A {radius} {radius} 0 1 1 {cx} {bottom} A {radius} {radius} 0 1 1 {cx} {top} Z",
            top = cy - radius,
            bottom = cy + radius,
        ));
    }
    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, end);
    let large_arc = u8::from(sweep > 180.0);
    Some(format!(
        "M {cx} {cy} L {x0:.3} {y0:.3} A {radius} {radius} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    ))
}

/// Anchor point for a slice caption, at the middle of its arc.
pub fn label_anchor(slice: &ChartSlice) -> (f64, f64) {
    let mid = slice.start_degrees + slice.sweep_degrees() / 2.0;
    polar(SIZE / 2.0, SIZE / 2.0, LABEL_RADIUS, mid)
}

#[component]
pub fn StatusChart(#[prop(into)] counts: Signal<StatusCounts>) -> impl IntoView {
    let center = SIZE / 2.0;
    let slices = move || {
        counts
            .get()
            .chart_slices()
            .into_iter()
            .filter(|slice| !slice.is_empty())
            .map(|slice| {
                let path = wedge_path(center, center, RADIUS, slice.start_degrees, slice.end_degrees);
                let (lx, ly) = label_anchor(&slice);
                view! {
                    <g class="status-chart__slice">
                        <path d=path fill=slice.status.color()></path>
                        <text x=format!("{lx:.1}") y=format!("{ly:.1}") text-anchor="middle" class="status-chart__label">
                            {slice.label()}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="status-chart">
            <svg viewBox=format!("0 0 {SIZE} {SIZE}") role="img" aria-label="Leads por estado">
                {slices}
            </svg>
        </div>
    }
}

//! Per-status totals and pie-chart slices for the dashboard summary.
//!
//! Totals always cover the entire collection, never the filtered view.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::lead::{Lead, LeadStatus};

/// Lead counts per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub new: usize,
    pub contacted: usize,
    pub discarded: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut counts = Self::default();
        for lead in leads {
            *counts.slot(lead.status) += 1;
        }
        counts
    }

    #[must_use]
    pub fn get(&self, status: LeadStatus) -> usize {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Discarded => self.discarded,
        }
    }

    fn slot(&mut self, status: LeadStatus) -> &mut usize {
        match status {
            LeadStatus::New => &mut self.new,
            LeadStatus::Contacted => &mut self.contacted,
            LeadStatus::Discarded => &mut self.discarded,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.new + self.contacted + self.discarded
    }

    /// One slice per status, in [`LeadStatus::ALL`] order.
    #[must_use]
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        let total = self.total();
        let mut start = 0.0_f64;
        LeadStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self.get(status);
                let fraction = fraction(count, total);
                let end = start + fraction * 360.0;
                let slice = ChartSlice {
                    status,
                    count,
                    percent: rounded_percent(fraction),
                    start_degrees: start,
                    end_degrees: end,
                };
                start = end;
                slice
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

/// A status's share of the pie chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSlice {
    pub status: LeadStatus,
    pub count: usize,
    /// Share of the total rounded to a whole percent.
    pub percent: u32,
    /// Clockwise angle where the slice starts, from twelve o'clock.
    pub start_degrees: f64,
    pub end_degrees: f64,
}

impl ChartSlice {
    /// Slice caption, e.g. `Nuevo (43%)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.status.label(), self.percent)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }
}

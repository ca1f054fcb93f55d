//! Status filter, free-text search and fixed-size pagination over leads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard recomputes its visible page from the full collection on every
//! state change. These are pure functions; the collection is small enough that
//! no memoization is needed.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt;
use std::str::FromStr;

use crate::lead::{Lead, LeadStatus, UnknownStatus};

/// Number of leads shown per dashboard page.
pub const PAGE_SIZE: usize = 5;

/// Status selector of the dashboard filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    /// Every selectable option, in display order.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(LeadStatus::New),
        Self::Only(LeadStatus::Contacted),
        Self::Only(LeadStatus::Discarded),
    ];

    #[must_use]
    pub fn matches(self, status: LeadStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Value used in `<select>` options and CLI flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "todos",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Only(status) => status.label(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todos" | "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

/// Whether `lead` passes both the status filter and the search term.
///
/// The search term matches when empty or when it is a case-insensitive
/// substring of the lead's name or email. No other normalization is applied.
#[must_use]
pub fn lead_matches(lead: &Lead, filter: StatusFilter, search: &str) -> bool {
    if !filter.matches(lead.status) {
        return false;
    }
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    lead.name.to_lowercase().contains(&needle) || lead.email.to_lowercase().contains(&needle)
}

/// Leads passing the filter and search term, in collection order.
#[must_use]
pub fn filter_leads<'a>(leads: &'a [Lead], filter: StatusFilter, search: &str) -> Vec<&'a Lead> {
    leads.iter().filter(|lead| lead_matches(lead, filter, search)).collect()
}

/// Number of pages needed for `match_count` leads.
#[must_use]
pub fn page_count(match_count: usize) -> usize {
    match_count.div_ceil(PAGE_SIZE)
}

/// Slice of `items` shown on 1-based `page`. Empty when `page` is out of range.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Page-local view state of the dashboard list. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: StatusFilter,
    pub search: String,
    /// 1-based page index.
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { filter: StatusFilter::All, search: String::new(), page: 1 }
    }
}

impl ListQuery {
    /// Change the status filter and go back to the first page.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Change the search term and go back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Advance one page; stays put on the last page.
    pub fn next_page(&mut self, leads: &[Lead]) {
        let pages = self.page_count(leads);
        if self.page < pages {
            self.page += 1;
        }
    }

    /// Go back one page; stays put on the first page.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to `page`, clamped to `[1, page_count]`.
    pub fn go_to(&mut self, page: usize, leads: &[Lead]) {
        let pages = self.page_count(leads).max(1);
        self.page = page.clamp(1, pages);
    }

    /// Pull the stored page back into range after the collection changed.
    pub fn settle(&mut self, leads: &[Lead]) {
        self.go_to(self.page, leads);
    }

    #[must_use]
    pub fn page_count(&self, leads: &[Lead]) -> usize {
        page_count(filter_leads(leads, self.filter, &self.search).len())
    }

    /// Derive the visible page of `leads` for this query.
    ///
    /// The stored page is clamped to `[1, page_count]`, so a collection that
    /// shrank under the query still yields its last page rather than an empty one.
    #[must_use]
    pub fn view<'a>(&self, leads: &'a [Lead]) -> LeadPage<'a> {
        let matches = filter_leads(leads, self.filter, &self.search);
        let page_count = page_count(matches.len());
        let page = self.page.clamp(1, page_count.max(1));
        let items = page_slice(&matches, page).to_vec();
        LeadPage {
            items,
            page,
            page_count,
            match_count: matches.len(),
        }
    }
}

/// One rendered page of the filtered lead list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadPage<'a> {
    pub items: Vec<&'a Lead>,
    pub page: usize,
    pub page_count: usize,
    /// Leads matching the query across all pages.
    pub match_count: usize,
}

impl LeadPage<'_> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

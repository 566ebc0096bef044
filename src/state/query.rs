#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Life-status filter options offered by the status selector.
///
/// `All` encodes to the empty string, matching the API's "no status filter"
/// convention; the other three encode to their lowercase names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Alive,
    Dead,
    Unknown,
}

impl StatusFilter {
    /// Query-parameter encoding for this filter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a selector value back into a filter. Unrecognized values fall
    /// back to `All` rather than erroring; the selector only emits the four
    /// known values.
    pub fn from_param(value: &str) -> Self {
        match value {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            "unknown" => Self::Unknown,
            _ => Self::All,
        }
    }

    /// Human-readable label for the selector option.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }

    /// All selectable options, in display order.
    pub const ALL_OPTIONS: [Self; 4] = [Self::All, Self::Alive, Self::Dead, Self::Unknown];
}

/// The query tuple that fully determines the next fetch request.
///
/// Invariant: `page >= 1`. The upper bound is enforced against the last
/// known page count at transition time, not stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub search: String,
    pub status: StatusFilter,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            status: StatusFilter::All,
        }
    }
}

impl QueryState {
    /// Replace the search text. Resets to page 1: the old page number is
    /// meaningless against a different result set.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Replace the status filter. Resets to page 1 for the same reason as
    /// `set_search`.
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, total_pages: u32) -> bool {
        self.page < total_pages
    }

    /// Step back one page. No-op on page 1.
    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    /// Step forward one page. No-op on the last known page.
    pub fn next_page(&mut self, total_pages: u32) {
        if self.can_next(total_pages) {
            self.page += 1;
        }
    }
}

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::types::Character;

/// User-visible message for transport and parse failures. Server-reported
/// "no results" bodies are not failures and never show this.
pub const FETCH_FAILED: &str = "Failed to fetch characters.";

/// The settled result of one fetch cycle. Exactly one of these is produced
/// per request.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Successful page: replaces the result set wholesale and updates the
    /// known page count.
    Page {
        characters: Vec<Character>,
        pages: u32,
    },
    /// The API reported a semantic error (e.g. "There is nothing here"):
    /// a valid empty result, not a failure.
    Empty,
    /// Transport or parse failure, with the underlying detail for logging.
    Failed(String),
}

/// Result-set state: the characters on the current page plus the fetch
/// cycle's loading/error flags.
///
/// `seq` tags the most recently issued request. A response settles only if
/// it carries the current tag; responses from superseded requests are
/// dropped so rapid filter changes cannot land out of order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsState {
    pub characters: Vec<Character>,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            total_pages: 1,
            loading: false,
            error: None,
            seq: 0,
        }
    }
}

impl ResultsState {
    /// Mark a new fetch cycle as issued: raise the loading flag, clear any
    /// previous error, and return the tag the response must present to
    /// `settle`.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Apply a settled outcome for the request tagged `seq`.
    ///
    /// A stale tag (a newer request was issued meanwhile) is a no-op; the
    /// newer request owns the loading flag and the result set.
    pub fn settle(&mut self, seq: u64, outcome: FetchOutcome) {
        if seq != self.seq {
            return;
        }
        match outcome {
            FetchOutcome::Page { characters, pages } => {
                self.characters = characters;
                self.total_pages = pages;
            }
            FetchOutcome::Empty => {
                // Valid empty result: clear the list, keep the old page
                // count, show no error.
                self.characters.clear();
            }
            FetchOutcome::Failed(_) => {
                // Keep the previous page's cards visible under the error
                // line rather than blanking the grid.
                self.error = Some(FETCH_FAILED.to_owned());
            }
        }
        self.loading = false;
    }
}

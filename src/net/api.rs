//! REST helpers for the Rick and Morty character endpoint.
//!
//! URL construction and response classification are pure functions so the
//! fetch cycle's contract is testable off the browser. The actual HTTP call
//! goes through `gloo-net` and is gated behind the `csr` feature, the same
//! split the rest of the browser-only code uses.
//!
//! ERROR HANDLING
//! ==============
//! The API answers no-match queries with a 404 carrying a JSON
//! `{"error": ...}` body. That is a valid empty result, not a failure, so
//! classification looks at the body shape rather than the HTTP status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{ApiError, CharacterPage};
use crate::state::query::QueryState;
use crate::state::results::FetchOutcome;

/// Base URL of the character endpoint.
pub const API_URL: &str = "https://rickandmortyapi.com/api/character";

/// Build the request URL for a query. All three parameters are always
/// present, empty or not, matching the shape the original endpoint expects.
pub fn character_url(query: &QueryState) -> String {
    format!(
        "{API_URL}?page={}&name={}&status={}",
        query.page,
        urlencoding::encode(&query.search),
        query.status.as_param(),
    )
}

/// Classify a response body into the settled outcome of one fetch cycle.
pub fn classify_response(body: &str) -> FetchOutcome {
    if let Ok(page) = serde_json::from_str::<CharacterPage>(body) {
        return FetchOutcome::Page {
            characters: page.results,
            pages: page.info.pages,
        };
    }
    if serde_json::from_str::<ApiError>(body).is_ok() {
        return FetchOutcome::Empty;
    }
    FetchOutcome::Failed("unrecognized response body".to_owned())
}

/// Perform one read request for the given query and settle it into exactly
/// one `FetchOutcome`. Never panics; transport errors come back as
/// `FetchOutcome::Failed`.
pub async fn fetch_characters(query: &QueryState) -> FetchOutcome {
    #[cfg(feature = "csr")]
    {
        let url = character_url(query);
        let resp = match gloo_net::http::Request::get(&url).send().await {
            Ok(resp) => resp,
            Err(err) => return FetchOutcome::Failed(err.to_string()),
        };
        match resp.text().await {
            Ok(body) => classify_response(&body),
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        FetchOutcome::Failed("not available outside the browser".to_owned())
    }
}

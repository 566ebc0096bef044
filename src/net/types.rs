//! Wire types for the Rick and Morty REST API.
//!
//! These shapes mirror the `GET /api/character` response exactly. Characters
//! arrive fully formed from the API and are never constructed or mutated
//! locally outside of tests.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A single character record as returned by the API.
///
/// Unknown fields (species, gender, url, created, ...) are ignored on
/// deserialization; only the fields the UI renders are kept.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    /// Life status as reported by the API: "Alive", "Dead", or "unknown".
    pub status: String,
    /// Portrait image URL.
    pub image: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    /// Episode URLs the character appears in. The UI only shows the count.
    pub episode: Vec<String>,
}

/// A named reference to a location (origin or current).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocationRef {
    pub name: String,
}

/// Pagination metadata from the `info` envelope.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    pub pages: u32,
}

/// Successful response envelope: one page of characters plus page count.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Semantic-error body the API returns for queries with no matches,
/// e.g. `{"error": "There is nothing here"}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

//! API wire types and REST helpers for the character endpoint.

pub mod api;
pub mod types;

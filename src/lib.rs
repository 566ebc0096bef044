//! # citadel
//!
//! Client-side rendered Leptos browser for the Rick and Morty character API.
//!
//! The crate contains the single browse page, its components, the shared
//! query/results/selection state, and the REST helpers for the character
//! endpoint. Browser-only dependencies are gated behind the `csr` feature
//! so the state and net layers compile and test on a native target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

//! Top-level pages. There is exactly one: the character browser.

pub mod browse;

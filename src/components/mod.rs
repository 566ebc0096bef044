//! UI components, from presentational primitives up to the result grid.

pub mod character_card;
pub mod controls;
pub mod detail_panel;
pub mod filter_bar;
pub mod pagination;

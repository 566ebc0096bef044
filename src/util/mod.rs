//! Browser utility helpers.

pub mod dark_mode;

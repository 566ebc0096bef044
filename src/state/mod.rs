//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`query`, `results`, `selection`) so individual
//! components can depend on small focused models. All instances are owned by
//! the root `App` component as `RwSignal`s provided via context.

pub mod query;
pub mod results;
pub mod selection;

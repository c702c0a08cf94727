//! Cross-reference resolution over auxiliary datasets
//!
//! Lookups are built once at the start of an extraction run from raw
//! datasets that may be entirely absent (the variables dataset, for one,
//! is restricted by plan tier upstream). Absence degrades to an empty
//! lookup, never a failure, and an identifier with no entry resolves to
//! null fields rather than an error.

mod components;
mod styles;
mod variables;

pub use components::{ComponentIndex, ResolvedComponent};
pub use styles::{StyleRegistry, FILL_STYLE, TEXT_STYLE};
pub use variables::{ResolvedVariable, VariableIndex};

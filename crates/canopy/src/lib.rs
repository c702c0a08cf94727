//! # Canopy
//!
//! Design-document tree extraction, enrichment, and design-token
//! resolution.
//!
//! Canopy ingests a design tool's hierarchical document tree (nodes with
//! layout, fill, stroke, effect, and typography attributes, plus
//! cross-references to shared variables and components) and produces a
//! normalized, flattened representation for downstream code generation
//! and token extraction.
//!
//! ## Architecture
//!
//! - **Resolvers**: flat lookups built once per run from the raw variable
//!   and component datasets ([`resolve`])
//! - **Enricher**: the recursive transform from raw tree to enriched tree
//!   ([`enrich`])
//! - **Token resolver**: the background-detection heuristic and palette
//!   mapping ([`tokens`])
//! - **Queries**: flattening and summary views over an enriched tree
//!   ([`query`])
//!
//! Retrieval of the raw documents (HTTP) and persistence of the produced
//! artifacts are external collaborators; everything here is a pure
//! transform over already-materialized JSON.
//!
//! ## Degradation over failure
//!
//! The core never hard-fails: absent datasets become empty lookups,
//! absent fields become omitted output fields, and unresolvable
//! references keep their raw id with null resolution. The only errors in
//! the crate live at the document-loading edge, and the token resolver
//! catches even those and falls back.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod context;
pub mod enrich;
pub mod error;
pub mod node;
pub mod query;
pub mod resolve;
pub mod tokens;

mod json;

// Re-export main types
pub use color::Rgba;
pub use context::ExtractContext;
pub use enrich::Enricher;
pub use error::{CanopyError, Result};
pub use node::{
    AutoLayout, BindingRef, ComponentRef, Effect, EffectOffset, EnrichedNode, GradientStop,
    Layout, NodeStyles, Padding, Paint, ResolvedBinding, StrokePaint, TextStyle,
};
pub use resolve::{
    ComponentIndex, ResolvedComponent, ResolvedVariable, StyleRegistry, VariableIndex,
};
pub use tokens::{
    collect_palette, detect_background, find_node, resolve_tokens, resolve_tokens_from_paths,
    PaletteEntry, TokenMap, FALLBACK_BACKGROUND,
};

/// Canopy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Token map derivation and palette collection
//!
//! The token resolver takes a structural reference (naming a root node), a
//! tree document in which that root can be located, and a flat color
//! palette, and derives a named token map that is guaranteed to carry a
//! `background` entry. The heuristic is deliberately best-effort: any
//! unreadable input degrades to the opaque-white fallback rather than
//! withholding a token file.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::color;
use crate::error::{CanopyError, Result};
use crate::json;
use crate::node::EnrichedNode;

/// Background color used when detection finds nothing better.
pub const FALLBACK_BACKGROUND: &str = "#ffffff";

/// The derived name-to-color token map.
///
/// Always contains a `background` key in `colors`, for any palette input
/// including an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMap {
    /// Named color tokens
    pub colors: IndexMap<String, String>,

    /// The detected (or fallback) background color
    pub background: String,
}

/// One entry of a collected color palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    /// Canonical color string
    pub color: String,

    /// Number of solid fills using this color
    pub count: usize,
}

/// Derive a token map from in-memory documents.
///
/// The structural reference names the root node; the tree document is the
/// full node tree, raw or enriched; the palette document is either a flat
/// `[{color, ...}]` list or a `{colors: [...]}` wrapper.
pub fn resolve_tokens(structure: &Value, tree: &Value, palette: &Value) -> TokenMap {
    let background = detect_background(structure, tree);
    debug!(background = %background, "detected background color");

    let entries = palette
        .as_array()
        .or_else(|| json::array_field(palette, "colors"))
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut colors = IndexMap::new();
    let mut matched = false;
    for (index, entry) in entries.iter().enumerate() {
        let Some(hex) = json::str_field(entry, "color") else {
            continue;
        };
        let name = if hex.eq_ignore_ascii_case(&background) {
            matched = true;
            "background".to_string()
        } else {
            format!("color-{}", index + 1)
        };
        colors.insert(name, hex);
    }

    // the background key is guaranteed even when the palette missed it
    if !matched {
        colors.insert("background".to_string(), background.clone());
    }

    TokenMap { colors, background }
}

/// Derive a token map from documents on disk.
///
/// Any read or parse failure degrades to the opaque-white fallback with a
/// warning; the fallback is signaled through structured logging rather
/// than the return type.
pub fn resolve_tokens_from_paths(
    structure: &Path,
    tree: &Path,
    palette: &Path,
) -> TokenMap {
    let structure = load_or_warn(structure);
    let tree = load_or_warn(tree);
    let palette = load_or_warn(palette);
    resolve_tokens(&structure, &tree, &palette)
}

fn load_or_warn(path: &Path) -> Value {
    match load_json(path) {
        Ok(document) => document,
        Err(err) => {
            warn!(path = %path.display(), %err, "document unreadable, using fallback");
            Value::Null
        }
    }
}

/// Read and parse one JSON document.
pub fn load_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).map_err(|source| CanopyError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CanopyError::DocumentParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Detect the dominant background color.
///
/// Locates the structural root in the tree by identifier and takes the
/// color of its first solid fill; anything short of that falls back to
/// opaque white.
pub fn detect_background(structure: &Value, tree: &Value) -> String {
    let Some(root_id) = json::str_field(structure, "id") else {
        return FALLBACK_BACKGROUND.to_string();
    };
    find_node(tree, &root_id)
        .and_then(first_solid_fill)
        .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string())
}

/// Locate a node by identifier, depth-first in document order.
///
/// Uses an explicit work stack; the first match in document order wins.
pub fn find_node<'a>(tree: &'a Value, id: &str) -> Option<&'a Value> {
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if json::str_field(node, "id").as_deref() == Some(id) {
            return Some(node);
        }
        if let Some(children) = json::array_field(node, "children") {
            // reversed push keeps document order on a LIFO stack
            stack.extend(children.iter().rev());
        }
    }
    None
}

/// Color of the first solid fill on a node, raw or enriched.
///
/// Raw nodes carry fills at top level with color objects; enriched nodes
/// nest them under `styles` with colors already rendered as strings.
fn first_solid_fill(node: &Value) -> Option<String> {
    let fills = json::array_field(node, "fills").or_else(|| {
        json::field(node, "styles").and_then(|styles| json::array_field(styles, "fills"))
    })?;
    fills
        .iter()
        .filter(|fill| json::str_field(fill, "type").as_deref() == Some("SOLID"))
        .find_map(|fill| {
            let fill_color = json::field(fill, "color")?;
            match fill_color {
                Value::String(hex) => Some(hex.clone()),
                _ => color::encode(Some(fill_color)),
            }
        })
}

/// Collect the solid-fill color palette of an enriched tree.
///
/// Counts usage per canonical color string and returns entries most-used
/// first; ties keep first-seen order.
pub fn collect_palette(root: &EnrichedNode) -> Vec<PaletteEntry> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if let Some(fills) = &node.styles.fills {
            for fill in fills {
                if fill.kind.as_deref() == Some("SOLID") {
                    if let Some(hex) = &fill.color {
                        *counts.entry(hex.clone()).or_insert(0) += 1;
                    }
                }
            }
        }
        stack.extend(node.children.iter().rev());
    }

    let mut entries: Vec<PaletteEntry> = counts
        .into_iter()
        .map(|(hex, count)| PaletteEntry { color: hex, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

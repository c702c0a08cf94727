//! Extraction context configuration

/// Configuration for an extraction run.
///
/// This is passed through all enrichment calls and controls recursion
/// bounds and per-node tracing.
#[derive(Debug, Clone)]
pub struct ExtractContext {
    /// Maximum tree depth to descend into.
    ///
    /// Source trees are author-controlled; past this bound the walk stops
    /// descending and the remaining subtree is dropped with a warning.
    pub max_depth: usize,

    /// Whether to emit a trace event per visited node
    pub trace: bool,
}

impl Default for ExtractContext {
    fn default() -> Self {
        Self {
            max_depth: 512,
            trace: false,
        }
    }
}

impl ExtractContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }
}

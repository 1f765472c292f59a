//! Strategy Identity
//!
//! The three context-loading strategies under comparison. The set is closed:
//! adding a strategy means adding a variant and fixing every exhaustive
//! `match` the compiler then flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A context-loading strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Inline every entity record into the system prompt; no tool schemas.
    FullContext,
    /// Preload one schema per tool; fetch entity data through tool calls.
    StaticToolSet,
    /// Preload only search/describe/execute meta-tools; discover schemas at
    /// runtime over a variable number of discovery cycles.
    DynamicToolset,
}

impl Strategy {
    /// All strategies in canonical report order.
    pub const ALL: [Strategy; 3] = [
        Strategy::FullContext,
        Strategy::StaticToolSet,
        Strategy::DynamicToolset,
    ];

    /// Stable wire name, matching the serde encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FullContext => "full-context",
            Strategy::StaticToolSet => "static-tool-set",
            Strategy::DynamicToolset => "dynamic-toolset",
        }
    }

    /// Display label for rendered tables.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::FullContext => "Full Context",
            Strategy::StaticToolSet => "Static Tool Set",
            Strategy::DynamicToolset => "Dynamic Toolset",
        }
    }

    /// Whether this strategy's latency and accuracy depend on the number of
    /// discovery cycles.
    pub fn uses_cycles(&self) -> bool {
        matches!(self, Strategy::DynamicToolset)
    }

    /// Parse a wire name back into a strategy.
    pub fn from_name(name: &str) -> Option<Strategy> {
        match name {
            "full-context" => Some(Strategy::FullContext),
            "static-tool-set" => Some(Strategy::StaticToolSet),
            "dynamic-toolset" => Some(Strategy::DynamicToolset),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

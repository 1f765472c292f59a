//! Accuracy Model
//!
//! Task accuracy in `[0, 1]` for one query. Each strategy degrades along a
//! different axis: full-context with raw context size, static-tool-set with
//! the number of tools competing for selection, dynamic-toolset with the
//! number of discovery cycles a query burns.

use crate::model::{cost, Scenario};
use crate::params::ModelParams;
use crate::strategy::Strategy;

/// Accuracy for one query under `strategy` at `scenario`.
pub fn accuracy(params: &ModelParams, strategy: Strategy, scenario: Scenario) -> f64 {
    match strategy {
        Strategy::FullContext => full_context_accuracy(params, scenario.tool_count),
        Strategy::StaticToolSet => static_tool_set_accuracy(params, scenario.tool_count),
        Strategy::DynamicToolset => dynamic_toolset_accuracy(params, scenario.cycles),
    }
}

/// Flat baseline while the inlined context fits under the threshold; linear
/// decay per excess token above it, down to the floor.
///
/// The baseline already prices in attention dilution over the inlined
/// catalog, which is why it sits well below the static-tool-set baseline.
fn full_context_accuracy(params: &ModelParams, tool_count: u32) -> f64 {
    let tokens = cost::tokens(params, Strategy::FullContext, tool_count);
    let excess = tokens.saturating_sub(params.context_size_accuracy_threshold);
    let decayed = params.full_context_base_accuracy
        - excess as f64 * params.context_accuracy_decay_per_token;
    decayed.max(params.full_context_accuracy_floor)
}

/// High baseline up to the tool-count threshold; every additional tool past
/// it costs a fixed slice of accuracy (selection confusion), down to the
/// plateau.
fn static_tool_set_accuracy(params: &ModelParams, tool_count: u32) -> f64 {
    let excess = tool_count.saturating_sub(params.tool_count_accuracy_threshold);
    let decayed = params.static_base_accuracy
        - f64::from(excess) * params.tool_count_accuracy_decay_rate;
    decayed.max(params.static_accuracy_floor)
}

/// Base success rate, cut by the chance discovery misses the right tool,
/// then compounded down by the per-cycle error rate for every cycle after
/// the first. Independent of tool count: discovery search cost, not schema
/// volume, is what varies.
fn dynamic_toolset_accuracy(params: &ModelParams, cycles: u32) -> f64 {
    let extra_cycles = cycles.saturating_sub(1);
    params.dynamic_base_accuracy
        * (1.0 - params.discovery_failure_rate)
        * (1.0 - params.discovery_cycle_error_rate).powi(extra_cycles as i32)
}

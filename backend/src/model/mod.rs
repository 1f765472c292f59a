//! Strategy Metric Models
//!
//! Pure, closed-form models for the three per-query metrics:
//! - `cost`: prompt tokens consumed
//! - `latency`: end-to-end milliseconds
//! - `accuracy`: task success probability in `[0, 1]`
//!
//! Every function here is deterministic: same parameters, same scenario,
//! same answer, bit for bit. Uncertainty in dynamic-toolset behavior is
//! expressed upstream as a spread over the discovery-cycle range, never as
//! a sampled value.

pub mod accuracy;
pub mod cost;
pub mod latency;

use crate::params::ModelParams;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// One evaluation point: a tool count and a discovery-cycle count.
///
/// `cycles` only influences the dynamic-toolset strategy; the other two
/// ignore it. `tool_count == 0` is a legitimate scenario (a deployment with
/// no tools yet) and flows through every formula unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of tools (and, by proxy, integration breadth) available.
    pub tool_count: u32,
    /// Discovery cycles a dynamic-toolset query spends before answering.
    pub cycles: u32,
}

impl Scenario {
    pub fn new(tool_count: u32, cycles: u32) -> Self {
        Self { tool_count, cycles }
    }

    /// Scenario at the configured typical cycle count.
    pub fn at_avg_cycles(params: &ModelParams, tool_count: u32) -> Self {
        Self {
            tool_count,
            cycles: params.dynamic_cycles_avg,
        }
    }
}

/// The three metrics for one strategy at one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Prompt tokens consumed by one query.
    pub tokens: u64,
    /// End-to-end latency of one query, milliseconds.
    pub latency_ms: f64,
    /// Task accuracy, `[0, 1]`.
    pub accuracy: f64,
}

/// Evaluate all three metrics for `strategy` at `scenario`.
pub fn evaluate(params: &ModelParams, strategy: Strategy, scenario: Scenario) -> StrategyResult {
    StrategyResult {
        tokens: cost::tokens(params, strategy, scenario.tool_count),
        latency_ms: latency::latency_ms(params, strategy, scenario),
        accuracy: accuracy::accuracy(params, strategy, scenario),
    }
}

//! Latency Model
//!
//! End-to-end milliseconds for one query. All strategies pay the fixed
//! per-inference base; they differ in how much prompt they make the model
//! chew through and in how many round-trips they take before answering.

use crate::model::{cost, Scenario};
use crate::params::ModelParams;
use crate::strategy::Strategy;

/// Latency in milliseconds for one query under `strategy` at `scenario`.
///
/// - Full-context pays the prompt-processing term on a saturating effective
///   context size: very large prompts slow things down with diminishing
///   marginal effect rather than without bound.
/// - Static-tool-set pays the linear prompt term on its (much smaller)
///   context plus one synchronous tool round-trip for the data fetch.
/// - Dynamic-toolset pays one full discovery cycle (an LLM hop plus a tool
///   round-trip) per cycle; its prompt is small enough that cycle count
///   dominates.
pub fn latency_ms(params: &ModelParams, strategy: Strategy, scenario: Scenario) -> f64 {
    match strategy {
        Strategy::FullContext => {
            let tokens = cost::tokens(params, strategy, scenario.tool_count) as f64;
            params.llm_base_latency_ms + prompt_latency_ms(params, effective_context(params, tokens))
        }
        Strategy::StaticToolSet => {
            let tokens = cost::tokens(params, strategy, scenario.tool_count) as f64;
            params.llm_base_latency_ms
                + prompt_latency_ms(params, tokens)
                + params.tool_call_latency_ms
        }
        Strategy::DynamicToolset => {
            params.llm_base_latency_ms + f64::from(scenario.cycles) * params.cycle_latency_ms
        }
    }
}

/// Prompt-processing latency for `tokens` prompt tokens.
fn prompt_latency_ms(params: &ModelParams, tokens: f64) -> f64 {
    tokens / 1000.0 * params.latency_per_1k_tokens_ms
}

/// Saturating effective context size: `S * (1 - exp(-tokens / S))`.
///
/// Approximately the identity below the saturation scale `S` and bounded
/// above by `S`, so the prompt term is monotonic with diminishing slope.
fn effective_context(params: &ModelParams, tokens: f64) -> f64 {
    let s = params.context_latency_saturation_tokens;
    s * (1.0 - (-tokens / s).exp())
}

//! Token Cost Model
//!
//! Prompt tokens one query consumes under each strategy. Intermediate math
//! runs in `f64` (two parameters are fractional averages); the public result
//! is rounded to whole tokens at the very end. Whole-token arithmetic
//! saturates at `u64::MAX` rather than overflowing.

use crate::params::ModelParams;
use crate::strategy::Strategy;

/// Tokens consumed by one query under `strategy` with `tool_count` tools.
///
/// Full-context and dynamic-toolset costs are independent of `tool_count`:
/// the former inlines the whole catalog regardless, the latter loads a
/// fixed meta-tool surface plus an average number of discovered schemas.
///
/// # Example
///
/// ```
/// use context_simulator_core_rs::{cost_tokens, ModelParams, Strategy};
///
/// let params = ModelParams::default();
/// assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 10), 3_300);
/// assert_eq!(cost_tokens(&params, Strategy::DynamicToolset, 10), 2_055);
/// ```
pub fn tokens(params: &ModelParams, strategy: Strategy, tool_count: u32) -> u64 {
    let total = match strategy {
        Strategy::FullContext => full_context_tokens(params),
        Strategy::StaticToolSet => static_tool_set_tokens(params, tool_count),
        Strategy::DynamicToolset => dynamic_toolset_tokens(params),
    };
    total.round() as u64
}

/// Base prompt plus every entity record in the catalog, inlined.
fn full_context_tokens(params: &ModelParams) -> f64 {
    params.base_prompt_tokens.saturating_add(params.catalog_tokens()) as f64
}

/// Base prompt, one schema per preloaded tool, and the tool results for the
/// records the query needs.
fn static_tool_set_tokens(params: &ModelParams, tool_count: u32) -> f64 {
    let schema_tokens = params
        .tokens_per_tool_schema
        .saturating_mul(u64::from(tool_count));
    let data_tokens = params.touched_data_tokens() as f64 * params.static_data_fraction;
    params.base_prompt_tokens.saturating_add(schema_tokens) as f64 + data_tokens
}

/// Base prompt, the meta-tool schemas, per-query discovery chatter, the
/// schemas discovery actually loads, and narrower data fetches.
fn dynamic_toolset_tokens(params: &ModelParams) -> f64 {
    let fixed = params
        .base_prompt_tokens
        .saturating_add(params.meta_tool_tokens)
        .saturating_add(params.discovery_overhead_tokens);
    let schema_tokens = params.schemas_loaded_per_query * params.tokens_per_tool_schema as f64;
    let data_tokens = params.touched_data_tokens() as f64 * params.dynamic_data_fraction;
    fixed as f64 + schema_tokens + data_tokens
}

//! Integration tests for the per-query token cost model
//!
//! Tests cover:
//! - Full-context invariance to tool count
//! - Static-tool-set linear growth per tool schema
//! - Dynamic-toolset constant footprint
//! - Parameter override sensitivity

use context_simulator_core_rs::{cost_tokens, ModelParams, Strategy};

#[test]
fn test_full_context_tokens_ignore_tool_count() {
    let params = ModelParams::default();
    // 500 base + 72 * 100 * 5 catalog = 36,500
    for tool_count in [0, 10, 100, 200, 1_000] {
        assert_eq!(
            cost_tokens(&params, Strategy::FullContext, tool_count),
            36_500
        );
    }
}

#[test]
fn test_static_tokens_grow_per_schema() {
    let params = ModelParams::default();
    // 500 base + 1,800 static data + 100/tool
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 10), 3_300);
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 30), 5_300);
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 50), 7_300);
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 100), 12_300);
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 200), 22_300);
}

#[test]
fn test_static_tokens_at_zero_tools() {
    let params = ModelParams::default();
    // Fixed overhead survives an empty tool set
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 0), 2_300);
}

#[test]
fn test_dynamic_tokens_are_constant() {
    let params = ModelParams::default();
    // 725 fixed + 2.5 * 100 discovered schemas + 1,080 fetched data = 2,055
    for tool_count in [0, 10, 100, 200, 10_000] {
        assert_eq!(
            cost_tokens(&params, Strategy::DynamicToolset, tool_count),
            2_055
        );
    }
}

#[test]
fn test_schema_size_override_hits_both_schema_loaders() {
    let params = ModelParams {
        tokens_per_tool_schema: 250,
        ..ModelParams::default()
    };
    // Static preloads every schema: 500 + 1,800 + 250 * 10
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 10), 4_800);
    // Dynamic loads 2.5 on demand: 725 + 2.5 * 250 + 1,080
    assert_eq!(cost_tokens(&params, Strategy::DynamicToolset, 10), 2_430);
    // Full-context inlines records, never schemas
    assert_eq!(cost_tokens(&params, Strategy::FullContext, 10), 36_500);
}

#[test]
fn test_catalog_growth_only_hits_full_context_and_fetch_sizes() {
    let params = ModelParams {
        entities_per_type: 200,
        ..ModelParams::default()
    };
    // Catalog doubles: 500 + 72,000
    assert_eq!(cost_tokens(&params, Strategy::FullContext, 10), 72_500);
    // Static still fetches only the touched slice, which is unchanged
    assert_eq!(cost_tokens(&params, Strategy::StaticToolSet, 10), 3_300);
}

#[test]
fn test_ordering_across_default_sweep_range() {
    let params = ModelParams::default();
    for tool_count in [10, 30, 50, 100, 200] {
        let fc = cost_tokens(&params, Strategy::FullContext, tool_count);
        let st = cost_tokens(&params, Strategy::StaticToolSet, tool_count);
        let dy = cost_tokens(&params, Strategy::DynamicToolset, tool_count);
        assert!(dy < st, "dynamic should undercut static at {tool_count}");
        assert!(st < fc, "static should undercut full-context at {tool_count}");
    }
}

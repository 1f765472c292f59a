//! Integration tests for the per-query latency model
//!
//! Tests cover:
//! - Static-tool-set latency line (base + prompt + tool call)
//! - Dynamic-toolset latency as a pure function of cycle count
//! - Full-context prompt saturation
//! - Cross-strategy ordering at the default calibration

use context_simulator_core_rs::{latency_ms, ModelParams, Scenario, Strategy};

#[test]
fn test_static_latency_line() {
    let params = ModelParams::default();
    // 800 + (2,300 + 100t)/1000 * 50 + 200 = 1,115 + 5t
    assert_eq!(
        latency_ms(&params, Strategy::StaticToolSet, Scenario::new(10, 3)),
        1_165.0
    );
    assert_eq!(
        latency_ms(&params, Strategy::StaticToolSet, Scenario::new(100, 3)),
        1_615.0
    );
    assert_eq!(
        latency_ms(&params, Strategy::StaticToolSet, Scenario::new(200, 3)),
        2_115.0
    );
}

#[test]
fn test_dynamic_latency_cycle_ladder() {
    let params = ModelParams::default();
    // 800 + 600 per cycle
    assert_eq!(
        latency_ms(&params, Strategy::DynamicToolset, Scenario::new(50, 2)),
        2_000.0
    );
    assert_eq!(
        latency_ms(&params, Strategy::DynamicToolset, Scenario::new(50, 3)),
        2_600.0
    );
    assert_eq!(
        latency_ms(&params, Strategy::DynamicToolset, Scenario::new(50, 6)),
        4_400.0
    );
}

#[test]
fn test_dynamic_latency_ignores_tool_count() {
    let params = ModelParams::default();
    let narrow = latency_ms(&params, Strategy::DynamicToolset, Scenario::new(1, 3));
    let wide = latency_ms(&params, Strategy::DynamicToolset, Scenario::new(10_000, 3));
    assert_eq!(narrow, wide);
}

#[test]
fn test_full_context_latency_at_default_catalog() {
    let params = ModelParams::default();
    let fc = latency_ms(&params, Strategy::FullContext, Scenario::new(10, 3));
    // 800 + 50,000 * (1 - e^(-36,500/50,000)) / 1000 * 50 = 2,095.23
    assert!((fc - 2_095.23).abs() < 0.05, "got {fc}");
}

#[test]
fn test_full_context_latency_saturates_below_linear() {
    let params = ModelParams::default();
    let fc = latency_ms(&params, Strategy::FullContext, Scenario::new(10, 3));
    let linear = 800.0 + 36_500.0 / 1000.0 * 50.0; // 2,625 without saturation
    assert!(fc < linear);

    // The bound holds no matter how large the catalog grows
    let huge = ModelParams {
        entities_per_type: 1_000_000,
        ..ModelParams::default()
    };
    let ceiling = 800.0 + 50_000.0 / 1000.0 * 50.0; // 3,300
    assert!(latency_ms(&huge, Strategy::FullContext, Scenario::new(10, 3)) <= ceiling);
}

#[test]
fn test_default_ordering_static_fastest_dynamic_slowest() {
    let params = ModelParams::default();
    for tool_count in [10, 30, 50, 100] {
        let st = latency_ms(&params, Strategy::StaticToolSet, Scenario::new(tool_count, 3));
        let fc = latency_ms(&params, Strategy::FullContext, Scenario::new(tool_count, 3));
        let dy = latency_ms(&params, Strategy::DynamicToolset, Scenario::new(tool_count, 3));
        assert!(st < fc, "static under full-context at {tool_count}");
        assert!(fc < dy, "full-context under dynamic avg at {tool_count}");
    }
}

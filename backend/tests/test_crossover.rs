//! Integration tests for crossover analysis
//!
//! Tests cover:
//! - The full net-benefit curve at the default calibration
//! - Crossover verdict and its sensitivity to the latency weighting
//! - Latency parity scanning
//! - Weighting validation

use context_simulator_core_rs::{
    analyze_crossover, latency_parity, ModelParams, ResultTable, SweepEngine, DEFAULT_WEIGHTING,
};

fn default_table() -> ResultTable {
    SweepEngine::with_default_checkpoints(ModelParams::default())
        .unwrap()
        .run()
}

#[test]
fn test_net_benefit_curve_at_defaults() {
    let analysis = analyze_crossover(&default_table(), DEFAULT_WEIGHTING).unwrap();

    // savings = (static - dynamic) / static tokens,
    // overhead = (dynamic_avg - static) / static latency,
    // net = savings - overhead:
    //   10 tools: 1,245/3,300  - 1,435/1,165 = -0.8545
    //   30 tools: 3,245/5,300  - 1,335/1,265 = -0.4431
    //   50 tools: 5,245/7,300  - 1,235/1,365 = -0.1863
    //  100 tools: 10,245/12,300 -   985/1,615 = +0.2230
    //  200 tools: 20,245/22,300 -   485/2,115 = +0.6785
    let expected = [
        (10, -0.8545),
        (30, -0.4431),
        (50, -0.1863),
        (100, 0.2230),
        (200, 0.6785),
    ];
    assert_eq!(analysis.points.len(), expected.len());
    for (point, (tool_count, net)) in analysis.points.iter().zip(expected) {
        assert_eq!(point.tool_count, tool_count);
        assert!(
            (point.net_benefit - net).abs() < 1e-4,
            "at {tool_count} tools expected {net}, got {}",
            point.net_benefit
        );
    }
}

#[test]
fn test_net_benefit_rises_with_tool_count_at_defaults() {
    let analysis = analyze_crossover(&default_table(), DEFAULT_WEIGHTING).unwrap();
    for pair in analysis.points.windows(2) {
        assert!(pair[1].net_benefit > pair[0].net_benefit);
    }
}

#[test]
fn test_default_crossover_verdict() {
    let analysis = analyze_crossover(&default_table(), DEFAULT_WEIGHTING).unwrap();
    assert_eq!(analysis.crossover, Some(100));
    assert_eq!(analysis.weighting, DEFAULT_WEIGHTING);
}

#[test]
fn test_crossover_moves_with_weighting() {
    let table = default_table();

    // Free latency: token savings decide alone.
    assert_eq!(analyze_crossover(&table, 0.0).unwrap().crossover, Some(10));

    // Just under the 50-tool break-even ratio (0.7185 / 0.9048 = 0.794).
    assert_eq!(analyze_crossover(&table, 0.79).unwrap().crossover, Some(50));

    // Just over it: 50 tools no longer clears, 100 still does.
    assert_eq!(analyze_crossover(&table, 0.80).unwrap().crossover, Some(100));

    // Latency priced so high the swept range never crosses.
    assert_eq!(analyze_crossover(&table, 5.0).unwrap().crossover, None);
}

#[test]
fn test_crossover_respects_custom_checkpoints() {
    // A sweep that skips straight past the default crossover point.
    let engine = SweepEngine::new(ModelParams::default(), vec![20, 150]).unwrap();
    let analysis = analyze_crossover(&engine.run(), DEFAULT_WEIGHTING).unwrap();
    // 150 tools: savings 15,245/17,300, overhead 735/1,865; both fine.
    assert_eq!(analysis.crossover, Some(150));
}

#[test]
fn test_latency_parity_unreached_at_defaults() {
    // Even at 200 tools the dynamic average runs 23% over static.
    assert_eq!(latency_parity(&default_table()).unwrap(), None);
}

#[test]
fn test_latency_parity_reached_past_250_tools() {
    let engine = SweepEngine::new(ModelParams::default(), vec![10, 100, 300]).unwrap();
    let table = engine.run();
    // 300 tools: static 2,615 ms vs dynamic 2,600 ms average.
    assert_eq!(latency_parity(&table).unwrap(), Some(300));
}

#[test]
fn test_rejects_bad_weighting() {
    let table = default_table();
    for bad in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = analyze_crossover(&table, bad).unwrap_err();
        assert!(format!("{err}").contains("finite and non-negative"), "{bad}");
    }
}

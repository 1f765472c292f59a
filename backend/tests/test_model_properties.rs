//! Property tests for the strategy models
//!
//! Tests cover:
//! - Monotonicity along each strategy's active axis
//! - Invariance along the axes a strategy must ignore
//! - Accuracy range containment
//! - Sweep/crossover scan consistency

use context_simulator_core_rs::{
    accuracy, analyze_crossover, cost_tokens, latency_ms, CostProjector, ModelParams, Scenario,
    Strategy, SweepEngine,
};
use proptest::prelude::*;

proptest! {
    /// Adding tools never shrinks the static-tool-set prompt.
    #[test]
    fn prop_static_tokens_monotone(a in 0u32..500, b in 0u32..500) {
        let params = ModelParams::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            cost_tokens(&params, Strategy::StaticToolSet, lo)
                <= cost_tokens(&params, Strategy::StaticToolSet, hi)
        );
    }

    /// Static-tool-set latency follows its prompt: never faster with more
    /// tools.
    #[test]
    fn prop_static_latency_monotone(a in 0u32..500, b in 0u32..500) {
        let params = ModelParams::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            latency_ms(&params, Strategy::StaticToolSet, Scenario::new(lo, 3))
                <= latency_ms(&params, Strategy::StaticToolSet, Scenario::new(hi, 3))
        );
    }

    /// Static-tool-set accuracy never improves with more tools and stays
    /// within [floor, baseline].
    #[test]
    fn prop_static_accuracy_non_increasing(a in 0u32..500, b in 0u32..500) {
        let params = ModelParams::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let at_lo = accuracy(&params, Strategy::StaticToolSet, Scenario::new(lo, 3));
        let at_hi = accuracy(&params, Strategy::StaticToolSet, Scenario::new(hi, 3));
        prop_assert!(at_hi <= at_lo);
        prop_assert!(at_hi >= params.static_accuracy_floor);
        prop_assert!(at_lo <= params.static_base_accuracy);
    }

    /// Full-context metrics are blind to the tool count.
    #[test]
    fn prop_full_context_ignores_tool_count(a in 0u32..2_000, b in 0u32..2_000) {
        let params = ModelParams::default();
        prop_assert_eq!(
            cost_tokens(&params, Strategy::FullContext, a),
            cost_tokens(&params, Strategy::FullContext, b)
        );
        prop_assert_eq!(
            latency_ms(&params, Strategy::FullContext, Scenario::new(a, 3)),
            latency_ms(&params, Strategy::FullContext, Scenario::new(b, 3))
        );
        prop_assert_eq!(
            accuracy(&params, Strategy::FullContext, Scenario::new(a, 3)),
            accuracy(&params, Strategy::FullContext, Scenario::new(b, 3))
        );
    }

    /// Dynamic-toolset metrics are blind to the tool count at any fixed
    /// cycle count.
    #[test]
    fn prop_dynamic_ignores_tool_count(
        a in 0u32..2_000,
        b in 0u32..2_000,
        cycles in 1u32..20,
    ) {
        let params = ModelParams::default();
        prop_assert_eq!(
            cost_tokens(&params, Strategy::DynamicToolset, a),
            cost_tokens(&params, Strategy::DynamicToolset, b)
        );
        prop_assert_eq!(
            latency_ms(&params, Strategy::DynamicToolset, Scenario::new(a, cycles)),
            latency_ms(&params, Strategy::DynamicToolset, Scenario::new(b, cycles))
        );
        prop_assert_eq!(
            accuracy(&params, Strategy::DynamicToolset, Scenario::new(a, cycles)),
            accuracy(&params, Strategy::DynamicToolset, Scenario::new(b, cycles))
        );
    }

    /// Every extra discovery cycle costs latency and accuracy.
    #[test]
    fn prop_dynamic_cycles_trade_latency_for_accuracy(c in 1u32..30) {
        let params = ModelParams::default();
        let now = Scenario::new(10, c);
        let next = Scenario::new(10, c + 1);
        prop_assert!(
            latency_ms(&params, Strategy::DynamicToolset, next)
                > latency_ms(&params, Strategy::DynamicToolset, now)
        );
        prop_assert!(
            accuracy(&params, Strategy::DynamicToolset, next)
                < accuracy(&params, Strategy::DynamicToolset, now)
        );
    }

    /// Accuracy stays inside [0, 1] for every strategy across wide inputs.
    #[test]
    fn prop_accuracy_in_unit_interval(tool_count in 0u32..5_000, cycles in 1u32..40) {
        let params = ModelParams::default();
        for strategy in Strategy::ALL {
            let value = accuracy(&params, strategy, Scenario::new(tool_count, cycles));
            prop_assert!((0.0..=1.0).contains(&value), "{strategy}: {value}");
        }
    }

    /// Dollar cost scales linearly in volume (below saturation).
    #[test]
    fn prop_cost_linear_in_volume(
        volume in 1u64..1_000_000,
        tokens in 0u64..100_000,
    ) {
        let single = CostProjector::new(1, 3.0).unwrap().monthly_cost_usd(tokens);
        let scaled = CostProjector::new(volume, 3.0).unwrap().monthly_cost_usd(tokens);
        prop_assert!((scaled - single * volume as f64).abs() < 1e-6 * (1.0 + scaled.abs()));
    }

    /// Dynamic spread rows bracket their typical value for any legal cycle
    /// configuration.
    #[test]
    fn prop_dynamic_spread_brackets_avg(
        cycles_min in 1u32..5,
        avg_gap in 0u32..5,
        max_gap in 0u32..5,
        checkpoint in 1u32..300,
    ) {
        let params = ModelParams {
            dynamic_cycles_min: cycles_min,
            dynamic_cycles_avg: cycles_min + avg_gap,
            dynamic_cycles_max: cycles_min + avg_gap + max_gap,
            ..ModelParams::default()
        };
        let engine = SweepEngine::new(params, vec![checkpoint]).unwrap();
        let table = engine.run();
        let row = table.row(Strategy::DynamicToolset, checkpoint).unwrap();
        prop_assert!(row.latency_ms.min <= row.latency_ms.avg);
        prop_assert!(row.latency_ms.avg <= row.latency_ms.max);
        prop_assert!(row.accuracy.min <= row.accuracy.avg);
        prop_assert!(row.accuracy.avg <= row.accuracy.max);
    }

    /// The reported crossover is exactly the first strictly positive net
    /// benefit under any legal weighting.
    #[test]
    fn prop_crossover_is_first_positive_net(w in 0.0f64..4.0) {
        let engine = SweepEngine::with_default_checkpoints(ModelParams::default()).unwrap();
        let analysis = analyze_crossover(&engine.run(), w).unwrap();

        match analysis.crossover {
            Some(tools) => {
                let index = analysis
                    .points
                    .iter()
                    .position(|p| p.tool_count == tools)
                    .unwrap();
                prop_assert!(analysis.points[index].net_benefit > 0.0);
                for earlier in &analysis.points[..index] {
                    prop_assert!(earlier.net_benefit <= 0.0);
                }
            }
            None => {
                for point in &analysis.points {
                    prop_assert!(point.net_benefit <= 0.0);
                }
            }
        }
    }
}

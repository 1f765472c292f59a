//! Text Summary Report
//!
//! Renders a sweep into the fixed-width comparison table analysts read
//! before anything touches a dashboard. Pure string building; printing and
//! persistence are the caller's business.

use crate::analysis::{latency_parity, CostProjector, CrossoverAnalysis};
use crate::strategy::Strategy;
use crate::sweep::{SimulationError, SweepEngine};
use crate::table::{MetricRange, ResultTable};

const RULE: &str =
    "=========================================================================";

/// Render the full text summary for a sweep.
///
/// `table` and `analysis` are expected to come from `engine` (the engine is
/// deterministic, so re-deriving either would give the same content).
pub fn render_summary(
    engine: &SweepEngine,
    table: &ResultTable,
    analysis: &CrossoverAnalysis,
) -> Result<String, SimulationError> {
    let params = engine.params();
    let fingerprint = params.fingerprint()?;
    let parity = latency_parity(table)?;
    let projector = CostProjector::from_params(params)?;

    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\n CONTEXT-LOADING STRATEGY COMPARISON\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(" parameters: {} (sha-256)\n\n", &fingerprint[..12]));

    out.push_str(&format!(
        " {:>6} {:<16} {:>13}  {:<22} {}\n",
        "tools", "strategy", "tokens/query", "latency ms", "accuracy"
    ));
    out.push_str(&format!(
        " {:>6} {:<16} {:>13}  {:<22} {}\n",
        "------", "----------------", "-------------", "---------------------", "---------------"
    ));
    for row in table.rows() {
        out.push_str(&format!(
            " {:>6} {:<16} {:>13}  {:<22} {}\n",
            row.tool_count,
            row.strategy.label(),
            group_thousands(row.tokens),
            format_latency(&row.latency_ms),
            format_accuracy(&row.accuracy),
        ));
    }
    out.push('\n');

    match analysis.crossover {
        Some(tool_count) => {
            let net = analysis
                .points
                .iter()
                .find(|p| p.tool_count == tool_count)
                .map(|p| p.net_benefit)
                .ok_or_else(|| {
                    SimulationError::InvalidConfig(format!(
                        "crossover checkpoint {} has no net-benefit point",
                        tool_count
                    ))
                })?;
            out.push_str(&format!(
                " crossover  weighting {:.2} -> dynamic pays off from {} tools (net benefit {:+.3})\n",
                analysis.weighting, tool_count, net
            ));
        }
        None => {
            out.push_str(&format!(
                " crossover  weighting {:.2} -> not reached in swept range\n",
                analysis.weighting
            ));
        }
    }
    match parity {
        Some(tool_count) => out.push_str(&format!(
            " latency parity (<10% overhead) -> from {} tools\n",
            tool_count
        )),
        None => out.push_str(" latency parity (<10% overhead) -> not reached in swept range\n"),
    }
    out.push('\n');

    out.push_str(" discovery cycle profile\n");
    for point in engine.cycle_profile() {
        out.push_str(&format!(
            "   {} cycles: {:.0} ms, accuracy {:.3}\n",
            point.cycles, point.latency_ms, point.accuracy
        ));
    }
    out.push('\n');

    if let Some(&last) = engine.checkpoints().last() {
        out.push_str(&format!(
            " monthly cost @ {} queries, ${:.2}/M input tokens (at {} tools)\n",
            group_thousands(projector.monthly_query_volume()),
            projector.price_per_million_tokens(),
            last
        ));
        for strategy in Strategy::ALL {
            if let Some(row) = table.row(strategy, last) {
                out.push_str(&format!(
                    "   {:<16} ${}\n",
                    strategy.label(),
                    group_thousands(projector.monthly_cost_usd(row.tokens).round() as u64)
                ));
            }
        }
    }

    Ok(out)
}

fn format_latency(range: &MetricRange) -> String {
    if range.is_point() {
        format!("{:.0}", range.avg)
    } else {
        format!("{:.0}-{:.0} ~{:.0}", range.min, range.max, range.avg)
    }
}

fn format_accuracy(range: &MetricRange) -> String {
    if range.is_point() {
        format!("{:.3}", range.avg)
    } else {
        format!("{:.3}-{:.3} ~{:.3}", range.min, range.max, range.avg)
    }
}

/// 1234567 -> "1,234,567".
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

//! Crossover Analysis
//!
//! Finds the tool count where dynamic discovery starts earning its keep:
//! the first swept checkpoint whose token savings outweigh the weighted
//! latency overhead, both measured against the static-tool-set baseline.

use crate::strategy::Strategy;
use crate::sweep::SimulationError;
use crate::table::ResultTable;
use serde::{Deserialize, Serialize};

/// Default weight on the latency-overhead fraction.
pub const DEFAULT_WEIGHTING: f64 = 1.0;

/// Overhead fraction under which dynamic latency counts as at parity.
pub const LATENCY_PARITY_THRESHOLD: f64 = 0.10;

/// Static-vs-dynamic comparison at one checkpoint.
///
/// Both fractions are relative to the static-tool-set row:
/// `token_savings = (static_tokens - dynamic_tokens) / static_tokens`,
/// `latency_overhead = (dynamic_latency_avg - static_latency) /
/// static_latency` with dynamic latency taken at the typical cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetBenefitPoint {
    pub tool_count: u32,
    pub token_savings: f64,
    pub latency_overhead: f64,
    /// `token_savings - weighting * latency_overhead`
    pub net_benefit: f64,
}

/// Full crossover scan over a result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverAnalysis {
    /// The latency weighting the scan used.
    pub weighting: f64,
    /// One point per checkpoint, in swept (ascending) order.
    pub points: Vec<NetBenefitPoint>,
    /// First checkpoint with strictly positive net benefit, if any.
    ///
    /// `None` means dynamic discovery never pays off within the swept
    /// range; that is a finding, not an error. A net benefit of exactly
    /// zero does not cross, so ties resolve toward larger tool counts.
    pub crossover: Option<u32>,
}

/// Scan `table` for the static-vs-dynamic crossover.
///
/// `weighting` scales how much latency overhead costs against token
/// savings; it is caller-supplied policy ([`DEFAULT_WEIGHTING`] when in
/// doubt) and must be finite and non-negative.
pub fn analyze_crossover(
    table: &ResultTable,
    weighting: f64,
) -> Result<CrossoverAnalysis, SimulationError> {
    if !weighting.is_finite() || weighting < 0.0 {
        return Err(SimulationError::InvalidConfig(format!(
            "latency weighting must be finite and non-negative, got {}",
            weighting
        )));
    }

    let points: Vec<NetBenefitPoint> = checkpoint_fractions(table)?
        .into_iter()
        .map(|(tool_count, token_savings, latency_overhead)| NetBenefitPoint {
            tool_count,
            token_savings,
            latency_overhead,
            net_benefit: token_savings - weighting * latency_overhead,
        })
        .collect();

    let crossover = points
        .iter()
        .find(|p| p.net_benefit > 0.0)
        .map(|p| p.tool_count);

    Ok(CrossoverAnalysis {
        weighting,
        points,
        crossover,
    })
}

/// First checkpoint where dynamic latency overhead drops under
/// [`LATENCY_PARITY_THRESHOLD`], if the swept range reaches it.
pub fn latency_parity(table: &ResultTable) -> Result<Option<u32>, SimulationError> {
    Ok(checkpoint_fractions(table)?
        .into_iter()
        .find(|&(_, _, overhead)| overhead < LATENCY_PARITY_THRESHOLD)
        .map(|(tool_count, _, _)| tool_count))
}

/// (tool_count, token_savings, latency_overhead) per checkpoint, in table
/// order.
fn checkpoint_fractions(
    table: &ResultTable,
) -> Result<Vec<(u32, f64, f64)>, SimulationError> {
    let mut out = Vec::new();
    for tool_count in table.checkpoints() {
        let static_row = table
            .row(Strategy::StaticToolSet, tool_count)
            .ok_or_else(|| missing_row(Strategy::StaticToolSet, tool_count))?;
        let dynamic_row = table
            .row(Strategy::DynamicToolset, tool_count)
            .ok_or_else(|| missing_row(Strategy::DynamicToolset, tool_count))?;

        if static_row.tokens == 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "static token cost is zero at checkpoint {}; savings fraction undefined",
                tool_count
            )));
        }
        let static_latency = static_row.latency_ms.avg;
        if static_latency <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "static latency is zero at checkpoint {}; overhead fraction undefined",
                tool_count
            )));
        }

        let static_tokens = static_row.tokens as f64;
        let dynamic_tokens = dynamic_row.tokens as f64;
        let token_savings = (static_tokens - dynamic_tokens) / static_tokens;
        let latency_overhead = (dynamic_row.latency_ms.avg - static_latency) / static_latency;

        out.push((tool_count, token_savings, latency_overhead));
    }
    Ok(out)
}

fn missing_row(strategy: Strategy, tool_count: u32) -> SimulationError {
    SimulationError::InvalidConfig(format!(
        "result table has no {} row at checkpoint {}",
        strategy, tool_count
    ))
}

//! Result Table Types
//!
//! The sweep's output: one row per (checkpoint, strategy), with every
//! dynamic-toolset latency/accuracy figure carried as a min/avg/max spread
//! over the configured discovery-cycle range. The two deterministic
//! strategies use degenerate (point) spreads so every row has one shape.

use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Min/avg/max spread of one metric.
///
/// `avg` is the value at the typical operating point, not the arithmetic
/// mean of `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn new(min: f64, avg: f64, max: f64) -> Self {
        Self { min, avg, max }
    }

    /// Degenerate spread for a metric with no cycle dependence.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            avg: value,
            max: value,
        }
    }

    /// True when the spread carries no uncertainty.
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }
}

/// One strategy evaluated at one tool-count checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub strategy: Strategy,
    pub tool_count: u32,
    /// Prompt tokens per query. Token cost never depends on cycle count,
    /// so a single number suffices for every strategy.
    pub tokens: u64,
    pub latency_ms: MetricRange,
    pub accuracy: MetricRange,
}

/// Ordered sweep results: ascending checkpoint, then canonical strategy
/// order within each checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<SweepRow>,
}

impl ResultTable {
    pub(crate) fn from_rows(rows: Vec<SweepRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the row for `strategy` at `tool_count`.
    pub fn row(&self, strategy: Strategy, tool_count: u32) -> Option<&SweepRow> {
        self.rows
            .iter()
            .find(|r| r.strategy == strategy && r.tool_count == tool_count)
    }

    /// All rows for one strategy, in checkpoint order.
    pub fn strategy_rows(&self, strategy: Strategy) -> impl Iterator<Item = &SweepRow> + '_ {
        self.rows.iter().filter(move |r| r.strategy == strategy)
    }

    /// The swept checkpoints, deduplicated, in table order.
    pub fn checkpoints(&self) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::new();
        for row in &self.rows {
            if out.last() != Some(&row.tool_count) {
                out.push(row.tool_count);
            }
        }
        out
    }
}

//! Sweep Engine
//!
//! Validated construction, then a deterministic sweep: every strategy
//! evaluated at every tool-count checkpoint, dynamic-toolset metrics
//! expanded over the configured discovery-cycle range.

use crate::model::{self, Scenario};
use crate::params::{ModelParams, ParamsError};
use crate::strategy::Strategy;
use crate::table::{MetricRange, ResultTable, SweepRow};
use serde::{Deserialize, Serialize};

/// Tool-count checkpoints used when a host does not supply its own.
pub const DEFAULT_CHECKPOINTS: [u32; 5] = [10, 30, 50, 100, 200];

/// Simulation-level errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Parameter set failed validation
    InvalidParams(ParamsError),

    /// Sweep or analysis configuration error
    InvalidConfig(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidParams(err) => write!(f, "Invalid parameters: {}", err),
            SimulationError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ParamsError> for SimulationError {
    fn from(err: ParamsError) -> Self {
        SimulationError::InvalidParams(err)
    }
}

/// Dynamic-toolset metrics at one cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclePoint {
    pub cycles: u32,
    pub latency_ms: f64,
    pub accuracy: f64,
}

/// The sweep engine: a validated parameter set plus the checkpoints to
/// evaluate.
///
/// Construction validates everything up front; a constructed engine cannot
/// produce a partial table. Runs are pure and repeatable.
#[derive(Debug, Clone)]
pub struct SweepEngine {
    params: ModelParams,
    checkpoints: Vec<u32>,
}

impl SweepEngine {
    /// Create a sweep engine.
    ///
    /// Validates the parameter set and the checkpoint list (non-empty, no
    /// duplicates) before anything is evaluated; invalid input is rejected
    /// here, never clamped. Checkpoints are sorted ascending, which is the
    /// order rows are emitted and crossover scanning walks.
    pub fn new(params: ModelParams, checkpoints: Vec<u32>) -> Result<Self, SimulationError> {
        params.validate()?;

        if checkpoints.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "must sweep at least one tool-count checkpoint".to_string(),
            ));
        }

        let mut checkpoints = checkpoints;
        checkpoints.sort_unstable();
        if let Some(dup) = checkpoints.windows(2).find(|w| w[0] == w[1]) {
            return Err(SimulationError::InvalidConfig(format!(
                "duplicate checkpoint: {}",
                dup[0]
            )));
        }

        Ok(Self {
            params,
            checkpoints,
        })
    }

    /// Engine over [`DEFAULT_CHECKPOINTS`].
    pub fn with_default_checkpoints(params: ModelParams) -> Result<Self, SimulationError> {
        Self::new(params, DEFAULT_CHECKPOINTS.to_vec())
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// The checkpoints this engine sweeps, ascending.
    pub fn checkpoints(&self) -> &[u32] {
        &self.checkpoints
    }

    /// Run the sweep.
    ///
    /// Emits one row per (checkpoint, strategy), ascending checkpoint then
    /// canonical strategy order. Every configured checkpoint appears,
    /// including `0`.
    pub fn run(&self) -> ResultTable {
        let mut rows = Vec::with_capacity(self.checkpoints.len() * Strategy::ALL.len());
        for &tool_count in &self.checkpoints {
            for strategy in Strategy::ALL {
                rows.push(self.evaluate_row(strategy, tool_count));
            }
        }
        ResultTable::from_rows(rows)
    }

    /// Dynamic-toolset latency and accuracy at every cycle count in the
    /// configured range. Both metrics are tool-count independent, so one
    /// profile serves the whole table.
    pub fn cycle_profile(&self) -> Vec<CyclePoint> {
        let tool_count = self.checkpoints[0];
        (self.params.dynamic_cycles_min..=self.params.dynamic_cycles_max)
            .map(|cycles| {
                let result = model::evaluate(
                    &self.params,
                    Strategy::DynamicToolset,
                    Scenario::new(tool_count, cycles),
                );
                CyclePoint {
                    cycles,
                    latency_ms: result.latency_ms,
                    accuracy: result.accuracy,
                }
            })
            .collect()
    }

    fn evaluate_row(&self, strategy: Strategy, tool_count: u32) -> SweepRow {
        let typical = Scenario::at_avg_cycles(&self.params, tool_count);
        if strategy.uses_cycles() {
            let at = |cycles| {
                model::evaluate(&self.params, strategy, Scenario::new(tool_count, cycles))
            };
            let lo = at(self.params.dynamic_cycles_min);
            let mid = model::evaluate(&self.params, strategy, typical);
            let hi = at(self.params.dynamic_cycles_max);

            // Latency rises with cycles while accuracy falls, so the
            // max-cycles sample is the slow end and the low-accuracy end.
            // Token cost is cycle-independent.
            SweepRow {
                strategy,
                tool_count,
                tokens: mid.tokens,
                latency_ms: MetricRange::new(
                    lo.latency_ms.min(hi.latency_ms),
                    mid.latency_ms,
                    lo.latency_ms.max(hi.latency_ms),
                ),
                accuracy: MetricRange::new(
                    lo.accuracy.min(hi.accuracy),
                    mid.accuracy,
                    lo.accuracy.max(hi.accuracy),
                ),
            }
        } else {
            let result = model::evaluate(&self.params, strategy, typical);
            SweepRow {
                strategy,
                tool_count,
                tokens: result.tokens,
                latency_ms: MetricRange::point(result.latency_ms),
                accuracy: MetricRange::point(result.accuracy),
            }
        }
    }
}

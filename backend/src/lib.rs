//! Context Simulator Core - Rust Engine
//!
//! Deterministic cost/latency/accuracy model for agent context-loading
//! strategies.
//!
//! # Architecture
//!
//! - **params**: Calibrated model parameters and validation
//! - **strategy**: The three context-loading strategies
//! - **model**: Pure per-query cost, latency and accuracy functions
//! - **table**: Sweep result rows and metric ranges
//! - **sweep**: Checkpoint sweep engine
//! - **analysis**: Crossover search and monthly cost projection
//! - **report**: Fixed-width text summary
//!
//! # Critical Invariants
//!
//! 1. Same parameters in, same numbers out (no sampling, no clock reads)
//! 2. Token counts are u64, latency and accuracy are f64
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod analysis;
pub mod model;
pub mod params;
pub mod report;
pub mod strategy;
pub mod sweep;
pub mod table;

// Re-exports for convenience
pub use analysis::{
    analyze_crossover, latency_parity, CostProjection, CostProjector, CrossoverAnalysis,
    NetBenefitPoint, DEFAULT_WEIGHTING, LATENCY_PARITY_THRESHOLD,
};
pub use model::{
    accuracy::accuracy, cost::tokens as cost_tokens, evaluate, latency::latency_ms, Scenario,
    StrategyResult,
};
pub use params::{ModelParams, ParamsError};
pub use report::render_summary;
pub use strategy::Strategy;
pub use sweep::{CyclePoint, SimulationError, SweepEngine, DEFAULT_CHECKPOINTS};
pub use table::{MetricRange, ResultTable, SweepRow};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Default parameter set as a JSON string
///
/// Lets Python hosts render or diff the calibrated defaults without
/// duplicating them.
#[cfg(feature = "pyo3")]
#[pyfunction]
fn get_default_params() -> PyResult<String> {
    serde_json::to_string_pretty(&ModelParams::default())
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn context_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PySweepEngine>()?;
    m.add_function(wrap_pyfunction!(get_default_params, m)?)?;
    Ok(())
}

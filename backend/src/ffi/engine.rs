//! PyO3 wrapper for the sweep engine
//!
//! This module provides the Python interface to the Rust sweep engine.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    crossover_to_py, cycle_point_to_py, extract_optional, parse_model_params, projection_to_py,
    result_table_to_py, simulation_error_to_py,
};
use crate::analysis::{analyze_crossover, CostProjector, DEFAULT_WEIGHTING};
use crate::report::render_summary;
use crate::sweep::SweepEngine as RustSweepEngine;

/// Python wrapper for the Rust sweep engine
///
/// This class is the entry point for Python hosts to run strategy sweeps.
/// Construction validates everything; a constructed engine only produces
/// complete, deterministic results.
///
/// # Example (from Python)
///
/// ```python
/// from context_simulator_core_rs import SweepEngine
///
/// engine = SweepEngine.new({
///     "checkpoints": [10, 30, 50, 100, 200],
///     "tokens_per_tool_schema": 100,
///     "dynamic_cycles_max": 6,
/// })
///
/// for row in engine.run():
///     print(row["strategy"], row["tool_count"], row["tokens"])
///
/// analysis = engine.crossover()
/// print(f"crossover at {analysis['crossover']} tools")
/// ```
#[pyclass(name = "SweepEngine")]
pub struct PySweepEngine {
    inner: RustSweepEngine,
}

#[pymethods]
impl PySweepEngine {
    /// Create a new sweep engine from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Dictionary of parameter overrides. Every key is
    ///   optional; missing parameters keep their calibrated defaults. The
    ///   `checkpoints` key (list of tool counts) selects what to sweep,
    ///   defaulting to `[10, 30, 50, 100, 200]`.
    ///
    /// # Errors
    ///
    /// Raises ValueError if:
    /// - A value has the wrong type or does not fit its range
    /// - The parameter set fails validation (bad fractions, inverted
    ///   cycle bounds, ...)
    /// - The checkpoint list is empty or contains duplicates
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let params = parse_model_params(config)?;
        let checkpoints: Option<Vec<u32>> = extract_optional(config, "checkpoints")?;

        let inner = match checkpoints {
            Some(checkpoints) => RustSweepEngine::new(params, checkpoints),
            None => RustSweepEngine::with_default_checkpoints(params),
        }
        .map_err(simulation_error_to_py)?;

        Ok(PySweepEngine { inner })
    }

    /// Run the sweep
    ///
    /// # Returns
    ///
    /// List of row dicts, ascending tool count then strategy order
    /// (full-context, static-tool-set, dynamic-toolset). Each row carries:
    /// - `strategy`: wire name (string)
    /// - `tool_count`: the checkpoint
    /// - `tokens`: prompt tokens per query
    /// - `latency_ms`: `{"min", "avg", "max"}` spread (degenerate for the
    ///   two deterministic strategies)
    /// - `accuracy`: `{"min", "avg", "max"}` spread
    fn run(&self, py: Python) -> PyResult<Py<PyList>> {
        let table = self.inner.run();
        result_table_to_py(py, &table)
    }

    /// Locate the static-vs-dynamic crossover
    ///
    /// # Arguments
    ///
    /// * `weighting` - Weight on the latency-overhead fraction relative to
    ///   token savings. Defaults to 1.0. Must be finite and non-negative.
    ///
    /// # Returns
    ///
    /// Dict with `weighting`, the per-checkpoint `points` list and
    /// `crossover` (first checkpoint with strictly positive net benefit,
    /// or None when the swept range never reaches one).
    #[pyo3(signature = (weighting = None))]
    fn crossover(&self, py: Python, weighting: Option<f64>) -> PyResult<Py<PyDict>> {
        let table = self.inner.run();
        let analysis = analyze_crossover(&table, weighting.unwrap_or(DEFAULT_WEIGHTING))
            .map_err(simulation_error_to_py)?;
        crossover_to_py(py, &analysis)
    }

    /// Project monthly token volumes and dollar costs
    ///
    /// # Arguments
    ///
    /// * `volume` - Queries per month; defaults to the parameter set's
    ///   `monthly_query_volume`.
    /// * `price` - USD per million input tokens; defaults to the parameter
    ///   set's `price_per_million_tokens`. Must be positive.
    ///
    /// # Returns
    ///
    /// One projection dict per sweep row, table order preserved.
    #[pyo3(signature = (volume = None, price = None))]
    fn monthly_costs(
        &self,
        py: Python,
        volume: Option<u64>,
        price: Option<f64>,
    ) -> PyResult<Py<PyList>> {
        let params = self.inner.params();
        let projector = CostProjector::new(
            volume.unwrap_or(params.monthly_query_volume),
            price.unwrap_or(params.price_per_million_tokens),
        )
        .map_err(simulation_error_to_py)?;

        let table = self.inner.run();
        let py_list = PyList::empty(py);
        for projection in projector.project_table(&table) {
            py_list.append(projection_to_py(py, &projection)?)?;
        }
        Ok(py_list.into())
    }

    /// Dynamic-toolset latency and accuracy per discovery cycle count
    ///
    /// # Returns
    ///
    /// List of `{"cycles", "latency_ms", "accuracy"}` dicts covering the
    /// configured cycle range.
    fn cycle_profile(&self, py: Python) -> PyResult<Py<PyList>> {
        let py_list = PyList::empty(py);
        for point in self.inner.cycle_profile() {
            py_list.append(cycle_point_to_py(py, &point)?)?;
        }
        Ok(py_list.into())
    }

    /// Render the fixed-width text summary of this sweep
    fn summary(&self) -> PyResult<String> {
        let table = self.inner.run();
        let analysis =
            analyze_crossover(&table, DEFAULT_WEIGHTING).map_err(simulation_error_to_py)?;
        render_summary(&self.inner, &table, &analysis).map_err(simulation_error_to_py)
    }

    /// SHA-256 fingerprint of the engine's parameter set
    ///
    /// Stamp this into persisted results so they can be matched back to
    /// the exact parameters that produced them.
    fn params_fingerprint(&self) -> PyResult<String> {
        self.inner
            .params()
            .fingerprint()
            .map_err(|e| simulation_error_to_py(e.into()))
    }

    /// The checkpoints this engine sweeps, ascending
    #[getter]
    fn checkpoints(&self) -> Vec<u32> {
        self.inner.checkpoints().to_vec()
    }
}

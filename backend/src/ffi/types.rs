//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList, etc.)

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::analysis::{CostProjection, CrossoverAnalysis, NetBenefitPoint};
use crate::params::ModelParams;
use crate::sweep::{CyclePoint, SimulationError};
use crate::table::{MetricRange, ResultTable, SweepRow};

// ========================================================================
// PyDict Extraction Helpers (DRY Pattern)
// ========================================================================

/// Extract an optional field from a Python dict.
///
/// # Returns
/// `Some(value)` if field exists, `None` if missing
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
pub fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.extract()?)),
        None => Ok(None),
    }
}

/// Extract a field with a default value if missing.
///
/// # Arguments
/// * `dict` - Python dictionary to extract from
/// * `key` - Field name to extract
/// * `default` - Default value to use if field is missing
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
///
/// # Example
/// ```ignore
/// let weighting: f64 = extract_with_default(&py_dict, "weighting", 1.0)?;
/// ```
pub fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert a Python dict of parameter overrides to ModelParams.
///
/// Every key is optional; missing keys keep their calibrated defaults.
/// Range validation happens on the Rust side when the engine is built, so
/// a bad value fails with the same message no matter which host passed it.
///
/// # Errors
///
/// Returns PyErr if a present key has the wrong type (including negative
/// values for count fields, which do not fit the unsigned Rust types).
pub fn parse_model_params(py_config: &Bound<'_, PyDict>) -> PyResult<ModelParams> {
    let d = ModelParams::default();

    Ok(ModelParams {
        base_prompt_tokens: extract_with_default(py_config, "base_prompt_tokens", d.base_prompt_tokens)?,
        tokens_per_tool_schema: extract_with_default(py_config, "tokens_per_tool_schema", d.tokens_per_tool_schema)?,
        tokens_per_entity: extract_with_default(py_config, "tokens_per_entity", d.tokens_per_entity)?,
        entities_per_type: extract_with_default(py_config, "entities_per_type", d.entities_per_type)?,
        entity_types: extract_with_default(py_config, "entity_types", d.entity_types)?,
        entities_touched_per_query: extract_with_default(py_config, "entities_touched_per_query", d.entities_touched_per_query)?,
        static_data_fraction: extract_with_default(py_config, "static_data_fraction", d.static_data_fraction)?,
        dynamic_data_fraction: extract_with_default(py_config, "dynamic_data_fraction", d.dynamic_data_fraction)?,
        meta_tool_tokens: extract_with_default(py_config, "meta_tool_tokens", d.meta_tool_tokens)?,
        discovery_overhead_tokens: extract_with_default(py_config, "discovery_overhead_tokens", d.discovery_overhead_tokens)?,
        schemas_loaded_per_query: extract_with_default(py_config, "schemas_loaded_per_query", d.schemas_loaded_per_query)?,
        llm_base_latency_ms: extract_with_default(py_config, "llm_base_latency_ms", d.llm_base_latency_ms)?,
        latency_per_1k_tokens_ms: extract_with_default(py_config, "latency_per_1k_tokens_ms", d.latency_per_1k_tokens_ms)?,
        tool_call_latency_ms: extract_with_default(py_config, "tool_call_latency_ms", d.tool_call_latency_ms)?,
        cycle_latency_ms: extract_with_default(py_config, "cycle_latency_ms", d.cycle_latency_ms)?,
        context_latency_saturation_tokens: extract_with_default(py_config, "context_latency_saturation_tokens", d.context_latency_saturation_tokens)?,
        full_context_base_accuracy: extract_with_default(py_config, "full_context_base_accuracy", d.full_context_base_accuracy)?,
        context_size_accuracy_threshold: extract_with_default(py_config, "context_size_accuracy_threshold", d.context_size_accuracy_threshold)?,
        context_accuracy_decay_per_token: extract_with_default(py_config, "context_accuracy_decay_per_token", d.context_accuracy_decay_per_token)?,
        full_context_accuracy_floor: extract_with_default(py_config, "full_context_accuracy_floor", d.full_context_accuracy_floor)?,
        static_base_accuracy: extract_with_default(py_config, "static_base_accuracy", d.static_base_accuracy)?,
        tool_count_accuracy_threshold: extract_with_default(py_config, "tool_count_accuracy_threshold", d.tool_count_accuracy_threshold)?,
        tool_count_accuracy_decay_rate: extract_with_default(py_config, "tool_count_accuracy_decay_rate", d.tool_count_accuracy_decay_rate)?,
        static_accuracy_floor: extract_with_default(py_config, "static_accuracy_floor", d.static_accuracy_floor)?,
        dynamic_base_accuracy: extract_with_default(py_config, "dynamic_base_accuracy", d.dynamic_base_accuracy)?,
        discovery_failure_rate: extract_with_default(py_config, "discovery_failure_rate", d.discovery_failure_rate)?,
        discovery_cycle_error_rate: extract_with_default(py_config, "discovery_cycle_error_rate", d.discovery_cycle_error_rate)?,
        dynamic_cycles_min: extract_with_default(py_config, "dynamic_cycles_min", d.dynamic_cycles_min)?,
        dynamic_cycles_avg: extract_with_default(py_config, "dynamic_cycles_avg", d.dynamic_cycles_avg)?,
        dynamic_cycles_max: extract_with_default(py_config, "dynamic_cycles_max", d.dynamic_cycles_max)?,
        price_per_million_tokens: extract_with_default(py_config, "price_per_million_tokens", d.price_per_million_tokens)?,
        monthly_query_volume: extract_with_default(py_config, "monthly_query_volume", d.monthly_query_volume)?,
    })
}

// ========================================================================
// Error Mapping
// ========================================================================

/// Convert a simulation error to the Python exception hosts expect.
///
/// Everything the engine rejects is bad input from the caller's point of
/// view, so it surfaces as ValueError.
pub fn simulation_error_to_py(err: SimulationError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert a MetricRange to {"min", "avg", "max"}.
pub fn metric_range_to_py(py: Python, range: &MetricRange) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("min", range.min)?;
    dict.set_item("avg", range.avg)?;
    dict.set_item("max", range.max)?;
    Ok(dict.into())
}

/// Convert one sweep row to a Python dict.
pub fn sweep_row_to_py(py: Python, row: &SweepRow) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("strategy", row.strategy.name())?;
    dict.set_item("tool_count", row.tool_count)?;
    dict.set_item("tokens", row.tokens)?;
    dict.set_item("latency_ms", metric_range_to_py(py, &row.latency_ms)?)?;
    dict.set_item("accuracy", metric_range_to_py(py, &row.accuracy)?)?;
    Ok(dict.into())
}

/// Convert a full result table to a list of row dicts, table order
/// preserved.
pub fn result_table_to_py(py: Python, table: &ResultTable) -> PyResult<Py<PyList>> {
    let py_list = PyList::empty(py);
    for row in table.rows() {
        py_list.append(sweep_row_to_py(py, row)?)?;
    }
    Ok(py_list.into())
}

fn net_benefit_point_to_py(py: Python, point: &NetBenefitPoint) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("tool_count", point.tool_count)?;
    dict.set_item("token_savings", point.token_savings)?;
    dict.set_item("latency_overhead", point.latency_overhead)?;
    dict.set_item("net_benefit", point.net_benefit)?;
    Ok(dict.into())
}

/// Convert a crossover analysis to a Python dict.
///
/// `crossover` is the checkpoint tool count, or None when dynamic
/// discovery never pays off within the swept range.
pub fn crossover_to_py(py: Python, analysis: &CrossoverAnalysis) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("weighting", analysis.weighting)?;
    dict.set_item("crossover", analysis.crossover)?;

    let points = PyList::empty(py);
    for point in &analysis.points {
        points.append(net_benefit_point_to_py(py, point)?)?;
    }
    dict.set_item("points", points)?;
    Ok(dict.into())
}

/// Convert one cycle-profile point to a Python dict.
pub fn cycle_point_to_py(py: Python, point: &CyclePoint) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("cycles", point.cycles)?;
    dict.set_item("latency_ms", point.latency_ms)?;
    dict.set_item("accuracy", point.accuracy)?;
    Ok(dict.into())
}

/// Convert one monthly cost projection to a Python dict.
pub fn projection_to_py(py: Python, projection: &CostProjection) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("strategy", projection.strategy.name())?;
    dict.set_item("tool_count", projection.tool_count)?;
    dict.set_item("tokens_per_query", projection.tokens_per_query)?;
    dict.set_item("monthly_tokens", projection.monthly_tokens)?;
    dict.set_item("monthly_cost_usd", projection.monthly_cost_usd)?;
    Ok(dict.into())
}

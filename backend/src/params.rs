//! Model Parameters
//!
//! Every named constant of the token, latency, accuracy and pricing models.
//! Token counts are whole tokens, latencies are milliseconds, accuracy-like
//! values live in `[0, 1]`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Validation errors for [`ModelParams`].
///
/// The first violated constraint wins; callers get the offending field name
/// and value so a bad config can be fixed without digging through the model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{field} must be finite and non-negative, got {value}")]
    NegativeRate { field: &'static str, value: f64 },

    #[error("{field} must lie within [0, 1], got {value}")]
    UnitIntervalOutOfRange { field: &'static str, value: f64 },

    #[error("dynamic_cycles_min must be at least 1")]
    NoCycles,

    #[error("discovery cycle bounds must satisfy min <= avg <= max, got {min}/{avg}/{max}")]
    CyclesOutOfOrder { min: u32, avg: u32, max: u32 },

    #[error("{field} ({floor}) must not exceed its baseline ({baseline})")]
    FloorAboveBaseline {
        field: &'static str,
        floor: f64,
        baseline: f64,
    },

    #[error("context_latency_saturation_tokens must be positive, got {value}")]
    SaturationNotPositive { value: f64 },

    #[error("parameter serialization failed: {0}")]
    Serialization(String),
}

/// Model Parameter Set
///
/// One immutable bundle of every constant the strategy models read. The
/// engine validates a parameter set once, up front; the model functions then
/// treat it as trusted input. Missing fields deserialize to their defaults,
/// so hosts can override a handful of values without restating the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    // ------------------------------------------------------------------
    // Token model
    // ------------------------------------------------------------------
    /// System prompt tokens shared by every strategy
    pub base_prompt_tokens: u64,

    /// Tokens consumed by one preloaded tool schema
    pub tokens_per_tool_schema: u64,

    /// Serialized size of one entity record, in tokens
    pub tokens_per_entity: u64,

    /// Entity records per entity type in the catalog
    pub entities_per_type: u64,

    /// Distinct entity types in the catalog
    pub entity_types: u64,

    /// Entity records per type a typical query actually needs
    /// (full-context inlines the whole catalog regardless)
    pub entities_touched_per_query: u64,

    /// Share of the touched entity data a static-tool-set query pulls back
    /// through tool results (0.5 = half the records land in context)
    pub static_data_fraction: f64,

    /// Share pulled back by dynamic-toolset queries; discovery narrows the
    /// fetches, so this sits below `static_data_fraction`
    pub dynamic_data_fraction: f64,

    /// Combined schema size of the search/describe/execute meta-tools
    pub meta_tool_tokens: u64,

    /// Per-query discovery chatter: search queries, candidate tool lists
    pub discovery_overhead_tokens: u64,

    /// Average number of full tool schemas a dynamic query ends up loading
    /// (fractional: averaged over many queries)
    pub schemas_loaded_per_query: f64,

    // ------------------------------------------------------------------
    // Latency model
    // ------------------------------------------------------------------
    /// Fixed per-inference latency in milliseconds
    pub llm_base_latency_ms: f64,

    /// Prompt-processing latency per 1000 prompt tokens (ms)
    pub latency_per_1k_tokens_ms: f64,

    /// One synchronous tool round-trip (ms)
    pub tool_call_latency_ms: f64,

    /// One discovery cycle: an LLM hop plus a tool round-trip (ms)
    pub cycle_latency_ms: f64,

    /// Saturation scale for the full-context prompt term, in tokens.
    /// Effective context is `S * (1 - exp(-tokens / S))`, so prompt latency
    /// grows roughly linearly below `S` and flattens above it.
    pub context_latency_saturation_tokens: f64,

    // ------------------------------------------------------------------
    // Accuracy model
    // ------------------------------------------------------------------
    /// Full-context baseline accuracy (attention diluted over the whole
    /// inlined catalog)
    pub full_context_base_accuracy: f64,

    /// Context tokens before full-context accuracy degrades further
    pub context_size_accuracy_threshold: u64,

    /// Accuracy lost per token above the context-size threshold
    pub context_accuracy_decay_per_token: f64,

    /// Lower plateau for full-context accuracy
    pub full_context_accuracy_floor: f64,

    /// Static-tool-set accuracy at low tool counts
    pub static_base_accuracy: f64,

    /// Tool count before tool-selection confusion sets in
    pub tool_count_accuracy_threshold: u32,

    /// Accuracy lost per tool above the tool-count threshold
    pub tool_count_accuracy_decay_rate: f64,

    /// Lower plateau for static-tool-set accuracy
    pub static_accuracy_floor: f64,

    /// Dynamic-toolset base success rate before discovery penalties
    pub dynamic_base_accuracy: f64,

    /// Chance a discovery pass misses the right tool entirely
    pub discovery_failure_rate: f64,

    /// Compounding error rate per discovery cycle after the first
    pub discovery_cycle_error_rate: f64,

    /// Fewest discovery cycles a dynamic query takes
    pub dynamic_cycles_min: u32,

    /// Typical discovery cycles per dynamic query
    pub dynamic_cycles_avg: u32,

    /// Most discovery cycles a dynamic query takes
    pub dynamic_cycles_max: u32,

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------
    /// USD per one million input tokens
    pub price_per_million_tokens: f64,

    /// Queries per month used for cost projection
    pub monthly_query_volume: u64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            base_prompt_tokens: 500,
            tokens_per_tool_schema: 100,
            tokens_per_entity: 72,
            entities_per_type: 100,
            entity_types: 5,
            entities_touched_per_query: 10,
            static_data_fraction: 0.5,  // tools return half the touched records
            dynamic_data_fraction: 0.3, // discovery-guided fetches are narrower
            meta_tool_tokens: 150,
            discovery_overhead_tokens: 75,
            schemas_loaded_per_query: 2.5,

            llm_base_latency_ms: 800.0,
            latency_per_1k_tokens_ms: 50.0,
            tool_call_latency_ms: 200.0,
            cycle_latency_ms: 600.0, // LLM hop + tool round-trip
            context_latency_saturation_tokens: 50_000.0,

            full_context_base_accuracy: 0.83,
            context_size_accuracy_threshold: 40_000,
            context_accuracy_decay_per_token: 0.00002,
            full_context_accuracy_floor: 0.68,
            static_base_accuracy: 0.98,
            tool_count_accuracy_threshold: 15,
            tool_count_accuracy_decay_rate: 0.003, // -0.3% per extra tool
            static_accuracy_floor: 0.78,
            dynamic_base_accuracy: 0.94,
            discovery_failure_rate: 0.02,
            discovery_cycle_error_rate: 0.015,
            dynamic_cycles_min: 2,
            dynamic_cycles_avg: 3,
            dynamic_cycles_max: 6,

            price_per_million_tokens: 3.0, // input-token price, USD/1M
            monthly_query_volume: 1_000_000,
        }
    }
}

impl ModelParams {
    /// Validate the parameter set.
    ///
    /// Checks every rate, fraction and bound; returns the first violation.
    /// Invalid parameters are rejected outright, never clamped into range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        unit_interval("static_data_fraction", self.static_data_fraction)?;
        unit_interval("dynamic_data_fraction", self.dynamic_data_fraction)?;
        non_negative("schemas_loaded_per_query", self.schemas_loaded_per_query)?;

        non_negative("llm_base_latency_ms", self.llm_base_latency_ms)?;
        non_negative("latency_per_1k_tokens_ms", self.latency_per_1k_tokens_ms)?;
        non_negative("tool_call_latency_ms", self.tool_call_latency_ms)?;
        non_negative("cycle_latency_ms", self.cycle_latency_ms)?;
        if !self.context_latency_saturation_tokens.is_finite()
            || self.context_latency_saturation_tokens <= 0.0
        {
            return Err(ParamsError::SaturationNotPositive {
                value: self.context_latency_saturation_tokens,
            });
        }

        unit_interval("full_context_base_accuracy", self.full_context_base_accuracy)?;
        non_negative(
            "context_accuracy_decay_per_token",
            self.context_accuracy_decay_per_token,
        )?;
        unit_interval("full_context_accuracy_floor", self.full_context_accuracy_floor)?;
        unit_interval("static_base_accuracy", self.static_base_accuracy)?;
        non_negative(
            "tool_count_accuracy_decay_rate",
            self.tool_count_accuracy_decay_rate,
        )?;
        unit_interval("static_accuracy_floor", self.static_accuracy_floor)?;
        unit_interval("dynamic_base_accuracy", self.dynamic_base_accuracy)?;
        unit_interval("discovery_failure_rate", self.discovery_failure_rate)?;
        unit_interval("discovery_cycle_error_rate", self.discovery_cycle_error_rate)?;

        if self.full_context_accuracy_floor > self.full_context_base_accuracy {
            return Err(ParamsError::FloorAboveBaseline {
                field: "full_context_accuracy_floor",
                floor: self.full_context_accuracy_floor,
                baseline: self.full_context_base_accuracy,
            });
        }
        if self.static_accuracy_floor > self.static_base_accuracy {
            return Err(ParamsError::FloorAboveBaseline {
                field: "static_accuracy_floor",
                floor: self.static_accuracy_floor,
                baseline: self.static_base_accuracy,
            });
        }

        if self.dynamic_cycles_min == 0 {
            return Err(ParamsError::NoCycles);
        }
        if self.dynamic_cycles_min > self.dynamic_cycles_avg
            || self.dynamic_cycles_avg > self.dynamic_cycles_max
        {
            return Err(ParamsError::CyclesOutOfOrder {
                min: self.dynamic_cycles_min,
                avg: self.dynamic_cycles_avg,
                max: self.dynamic_cycles_max,
            });
        }

        non_negative("price_per_million_tokens", self.price_per_million_tokens)?;

        Ok(())
    }

    /// Compute a deterministic SHA-256 fingerprint of this parameter set.
    ///
    /// Persisted reports carry the fingerprint so downstream tooling can
    /// match a result table to the exact parameters that produced it.
    /// Struct fields serialize in declaration order, so the JSON encoding
    /// is already canonical.
    pub fn fingerprint(&self) -> Result<String, ParamsError> {
        let json = serde_json::to_string(self)
            .map_err(|e| ParamsError::Serialization(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Total tokens of the fully inlined entity catalog.
    ///
    /// This is the data volume full-context pays on every query. Saturates
    /// at `u64::MAX` for absurd catalog sizes rather than overflowing.
    pub fn catalog_tokens(&self) -> u64 {
        self.tokens_per_entity
            .saturating_mul(self.entities_per_type)
            .saturating_mul(self.entity_types)
    }

    /// Entity-data tokens a typical query actually needs, before any
    /// strategy-specific fetch fraction is applied.
    pub fn touched_data_tokens(&self) -> u64 {
        self.tokens_per_entity
            .saturating_mul(self.entities_touched_per_query)
            .saturating_mul(self.entity_types)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ParamsError::NegativeRate { field, value });
    }
    Ok(())
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ParamsError::UnitIntervalOutOfRange { field, value });
    }
    Ok(())
}

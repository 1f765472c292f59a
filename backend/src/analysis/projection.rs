//! Cost Projection
//!
//! Turns per-query token costs into monthly token volumes and dollar
//! figures. Pricing covers input tokens only; that is where the strategies
//! differ.

use crate::strategy::Strategy;
use crate::sweep::SimulationError;
use crate::table::ResultTable;
use serde::{Deserialize, Serialize};

/// Monthly projection for one (strategy, checkpoint) row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub strategy: Strategy,
    pub tool_count: u32,
    pub tokens_per_query: u64,
    pub monthly_tokens: u64,
    pub monthly_cost_usd: f64,
}

/// Projector over a fixed monthly query volume and token price.
///
/// Pricing is validated here, at the point a projection is requested: a
/// zero, negative or non-finite price is rejected. Volume zero is legal
/// and projects zero cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostProjector {
    monthly_query_volume: u64,
    price_per_million_tokens: f64,
}

impl CostProjector {
    pub fn new(
        monthly_query_volume: u64,
        price_per_million_tokens: f64,
    ) -> Result<Self, SimulationError> {
        if !price_per_million_tokens.is_finite() || price_per_million_tokens <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "price_per_million_tokens must be positive and finite, got {}",
                price_per_million_tokens
            )));
        }
        Ok(Self {
            monthly_query_volume,
            price_per_million_tokens,
        })
    }

    /// Projector using the volume and price carried by a parameter set.
    pub fn from_params(params: &crate::params::ModelParams) -> Result<Self, SimulationError> {
        Self::new(params.monthly_query_volume, params.price_per_million_tokens)
    }

    pub fn monthly_query_volume(&self) -> u64 {
        self.monthly_query_volume
    }

    pub fn price_per_million_tokens(&self) -> f64 {
        self.price_per_million_tokens
    }

    /// Total tokens per month at the configured volume.
    pub fn monthly_tokens(&self, tokens_per_query: u64) -> u64 {
        tokens_per_query.saturating_mul(self.monthly_query_volume)
    }

    /// Dollar cost per month at the configured volume and price.
    pub fn monthly_cost_usd(&self, tokens_per_query: u64) -> f64 {
        self.monthly_tokens(tokens_per_query) as f64 / 1_000_000.0
            * self.price_per_million_tokens
    }

    /// Projection for one row's worth of data.
    pub fn project(
        &self,
        strategy: Strategy,
        tool_count: u32,
        tokens_per_query: u64,
    ) -> CostProjection {
        CostProjection {
            strategy,
            tool_count,
            tokens_per_query,
            monthly_tokens: self.monthly_tokens(tokens_per_query),
            monthly_cost_usd: self.monthly_cost_usd(tokens_per_query),
        }
    }

    /// One projection per table row, table order preserved.
    pub fn project_table(&self, table: &ResultTable) -> Vec<CostProjection> {
        table
            .rows()
            .iter()
            .map(|row| self.project(row.strategy, row.tool_count, row.tokens))
            .collect()
    }
}

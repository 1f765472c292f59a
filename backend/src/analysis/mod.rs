//! Analysis Passes
//!
//! Read a finished [`ResultTable`](crate::table::ResultTable) and answer the
//! two questions the sweep exists for: where does dynamic discovery start
//! paying for its latency (`crossover`), and what does each strategy cost
//! per month in dollars (`projection`).

pub mod crossover;
pub mod projection;

// Re-export main types for convenience
pub use crossover::{
    analyze_crossover, latency_parity, CrossoverAnalysis, NetBenefitPoint, DEFAULT_WEIGHTING,
    LATENCY_PARITY_THRESHOLD,
};
pub use projection::{CostProjection, CostProjector};

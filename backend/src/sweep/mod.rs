//! Sweep Engine - evaluates every strategy over tool-count checkpoints
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{CyclePoint, SimulationError, SweepEngine, DEFAULT_CHECKPOINTS};

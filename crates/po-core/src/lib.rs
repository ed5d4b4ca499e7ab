//! Shared types for the prompt optimizer.

pub mod error;
pub mod stats;

pub use error::{PoError, Result};
pub use stats::{
    efficiency_pct, reduction_pct, OptimizationResult, OptimizationStats, TokenAnalysis,
    TokenMethod, TokenSets,
};

//! Prompt optimizer — rewrites verbose text into a shorter, semantically
//! equivalent form while protecting embedded code and credentials.
//!
//! Stages:
//! 1. Line routing — blank / code / prose
//! 2. Secret masking on code-classified lines
//! 3. Phrase normalization (verbose → concise table)
//! 4. Sentence rewriting (filler/pronoun filtering, verb promotion)
//! 5. Token accounting across five tokenization methods

pub mod code;
pub mod lexicon;
pub mod phrases;
pub mod pipeline;
pub mod rewrite;
pub mod tokenize;

pub use pipeline::{optimize, Optimizer};
pub use po_core::{OptimizationResult, OptimizationStats, TokenAnalysis, TokenMethod};

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tokenization strategy used for measurement.
///
/// One variant per method; dispatch happens on the variant, so adding a
/// method means adding a variant and one match arm, not touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMethod {
    /// Maximal runs of word characters.
    Word,
    /// Greedy ~4-char chunks, an approximation of LLM subword tokenization.
    GptApprox,
    /// Every character is its own token, whitespace included.
    Character,
    /// Fragments split on sentence terminators.
    Sentence,
    /// Short words kept whole, long words sliced into 3-char chunks.
    Subword,
}

impl TokenMethod {
    pub const ALL: [TokenMethod; 5] = [
        TokenMethod::Word,
        TokenMethod::GptApprox,
        TokenMethod::Character,
        TokenMethod::Sentence,
        TokenMethod::Subword,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenMethod::Word => "word",
            TokenMethod::GptApprox => "gpt_approx",
            TokenMethod::Character => "character",
            TokenMethod::Sentence => "sentence",
            TokenMethod::Subword => "subword",
        }
    }
}

/// Token sequences for one method, before and after optimization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSets {
    pub original: Vec<String>,
    pub optimized: Vec<String>,
}

/// Per-method token accounting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenAnalysis {
    pub original: usize,
    pub optimized: usize,
    /// Signed percentage: a pathological rewrite may lengthen text.
    pub reduction: i64,
    pub tokens: TokenSets,
}

/// Aggregate statistics for one optimization call.
///
/// Invariants: `reduction = round((original - optimized) / original * 100)`
/// when the original count is positive, else 0; `efficiency =
/// round(optimized / original * 100)` when the optimized count is positive,
/// else 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationStats {
    pub original_words: usize,
    pub optimized_words: usize,
    pub reduction: i64,
    pub efficiency: i64,
    pub total_lines: usize,
    pub lines_processed: usize,
    pub code_lines: usize,
    pub secrets_masked: usize,
    pub original_chars: usize,
    pub optimized_chars: usize,
    pub char_reduction: i64,
    /// BTreeMap so serialization order is deterministic.
    pub tokens: BTreeMap<TokenMethod, TokenAnalysis>,
}

impl Default for OptimizationStats {
    fn default() -> Self {
        Self {
            original_words: 0,
            optimized_words: 0,
            reduction: 0,
            efficiency: 100,
            total_lines: 0,
            lines_processed: 0,
            code_lines: 0,
            secrets_masked: 0,
            original_chars: 0,
            optimized_chars: 0,
            char_reduction: 0,
            tokens: BTreeMap::new(),
        }
    }
}

/// The sole externally visible output: optimized text plus its statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized: String,
    pub stats: OptimizationStats,
}

/// Rounded percentage reduction from `original` to `optimized`.
pub fn reduction_pct(original: usize, optimized: usize) -> i64 {
    if original == 0 {
        return 0;
    }
    let diff = original as f64 - optimized as f64;
    (diff / original as f64 * 100.0).round() as i64
}

/// Rounded percentage of the original retained by the optimized form.
pub fn efficiency_pct(original: usize, optimized: usize) -> i64 {
    if optimized == 0 || original == 0 {
        return 100;
    }
    (optimized as f64 / original as f64 * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_pct() {
        assert_eq!(reduction_pct(10, 5), 50);
        assert_eq!(reduction_pct(0, 5), 0);
        assert_eq!(reduction_pct(3, 4), -33);
        assert_eq!(reduction_pct(7, 7), 0);
    }

    #[test]
    fn test_efficiency_pct() {
        assert_eq!(efficiency_pct(10, 5), 50);
        assert_eq!(efficiency_pct(10, 0), 100);
        assert_eq!(efficiency_pct(0, 0), 100);
        assert_eq!(efficiency_pct(4, 5), 125);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(TokenMethod::ALL.len(), 5);
        assert_eq!(TokenMethod::Word.name(), "word");
        assert_eq!(TokenMethod::GptApprox.name(), "gpt_approx");
    }

    #[test]
    fn test_default_stats() {
        let stats = OptimizationStats::default();
        assert_eq!(stats.efficiency, 100);
        assert_eq!(stats.original_words, 0);
        assert!(stats.tokens.is_empty());
    }
}

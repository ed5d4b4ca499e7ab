//! Optimization pipeline — routes lines, assembles output, computes stats.

use crate::{code, phrases, rewrite, tokenize};
use po_core::{
    efficiency_pct, reduction_pct, OptimizationResult, OptimizationStats, TokenAnalysis,
    TokenMethod, TokenSets,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

fn word_count(text: &str) -> usize {
    RE_WORD.find_iter(text).count()
}

/// The main optimizer pipeline. Stateless: every call builds its result
/// from scratch, sharing only the read-only lexicon tables.
pub struct Optimizer;

impl Optimizer {
    pub fn new() -> Self {
        Self
    }

    /// Optimize `raw` line by line and compute before/after statistics.
    /// Total over arbitrary input; empty input yields an empty result.
    pub fn optimize(&self, raw: &str) -> OptimizationResult {
        if raw.is_empty() {
            return OptimizationResult {
                optimized: String::new(),
                stats: OptimizationStats {
                    tokens: analyze_tokens("", ""),
                    ..OptimizationStats::default()
                },
            };
        }

        let lines: Vec<&str> = raw.split('\n').collect();
        let mut output: Vec<String> = Vec::with_capacity(lines.len());
        let mut original_words = 0;
        let mut optimized_words = 0;
        let mut lines_processed = 0;
        let mut code_lines = 0;
        let mut secrets_masked = 0;

        for line in &lines {
            let trimmed = line.trim();
            original_words += word_count(trimmed);

            if trimmed.is_empty() {
                output.push(String::new());
                continue;
            }

            if code::is_likely_code(trimmed) {
                let masked = code::mask_secrets(trimmed);
                let changed = masked != trimmed;
                if changed {
                    secrets_masked += 1;
                }
                // Counts only, never line content: code lines may hold secrets.
                trace!(changed, "code line passed through");
                optimized_words += word_count(&masked);
                output.push(masked);
                code_lines += 1;
                continue;
            }

            lines_processed += 1;
            let normalized = phrases::normalize_phrases(trimmed);
            // Safety valve: keep the original line when the rewrite
            // collapses into something unusable.
            let final_line =
                rewrite::rewrite_line(&normalized).unwrap_or_else(|| trimmed.to_string());
            optimized_words += word_count(&final_line);
            output.push(final_line);
        }

        let optimized = output.join("\n").trim().to_string();
        let tokens = analyze_tokens(raw, &optimized);

        debug!(
            total_lines = lines.len(),
            lines_processed,
            code_lines,
            secrets_masked,
            original_words,
            optimized_words,
            "optimization pass complete"
        );

        let original_chars = raw.chars().count();
        let optimized_chars = optimized.chars().count();
        let stats = OptimizationStats {
            original_words,
            optimized_words,
            reduction: reduction_pct(original_words, optimized_words),
            efficiency: efficiency_pct(original_words, optimized_words),
            total_lines: lines.len(),
            lines_processed,
            code_lines,
            secrets_masked,
            original_chars,
            optimized_chars,
            char_reduction: reduction_pct(original_chars, optimized_chars),
            tokens,
        };

        OptimizationResult { optimized, stats }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the tokenizer bank over raw and optimized text for all methods.
fn analyze_tokens(original_text: &str, optimized_text: &str) -> BTreeMap<TokenMethod, TokenAnalysis> {
    TokenMethod::ALL
        .iter()
        .map(|&method| {
            let original = tokenize::tokenize(original_text, method);
            let optimized = tokenize::tokenize(optimized_text, method);
            let analysis = TokenAnalysis {
                original: original.len(),
                optimized: optimized.len(),
                reduction: reduction_pct(original.len(), optimized.len()),
                tokens: TokenSets { original, optimized },
            };
            (method, analysis)
        })
        .collect()
}

/// Single inbound operation for external callers. Never surfaces a fault:
/// any unexpected internal panic degrades to returning the input unchanged
/// with pass-through statistics.
pub fn optimize(raw: &str) -> OptimizationResult {
    std::panic::catch_unwind(|| Optimizer::new().optimize(raw)).unwrap_or_else(|_| {
        OptimizationResult {
            optimized: raw.to_string(),
            stats: OptimizationStats::default(),
        }
    })
}

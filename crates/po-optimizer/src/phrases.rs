//! Phrase normalization — verbose → concise substitution.

use crate::lexicon::VERBOSE_PHRASES;
use regex::Regex;
use std::sync::LazyLock;

/// Per-entry compiled regexes, in declaration order of the phrase table.
static PHRASE_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    VERBOSE_PHRASES
        .iter()
        .map(|(verbose, concise)| {
            let pattern = format!(r"(?i){}", regex::escape(verbose));
            (Regex::new(&pattern).unwrap(), *concise)
        })
        .collect()
});

static RE_SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());
// Orphans a deletion can leave behind: punctuation stranded at the start
// of the text or directly after a sentence terminator.
static RE_LEADING_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[,;:\s]+").unwrap());
static RE_PUNCT_AFTER_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])\s*[,;:]+").unwrap());

/// Apply every verbose → concise phrase pair case-insensitively, in table
/// order. Deletions are valid; the cleanup pass removes the doubled spaces
/// and hanging pre-punctuation gaps they leave behind.
pub fn normalize_phrases(text: &str) -> String {
    let mut result = text.to_string();
    for (re, concise) in PHRASE_REGEXES.iter() {
        result = re.replace_all(&result, *concise).to_string();
    }
    let result = RE_SPACE_RUNS.replace_all(&result, " ");
    let result = RE_SPACE_BEFORE_PUNCT.replace_all(&result, "${1}");
    let result = RE_LEADING_PUNCT.replace_all(&result, "");
    RE_PUNCT_AFTER_TERMINATOR
        .replace_all(&result, "${1}")
        .trim()
        .to_string()
}

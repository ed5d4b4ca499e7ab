//! Sentence rewriting — per-line word filtering and reconstruction.
//!
//! Runs after phrase normalization. Each line is split into sentences,
//! each sentence filtered word-by-word against the lexicon tables, then
//! reassembled with the first action verb promoted to the front.

use crate::lexicon::{
    is_action_verb, FILLERS, FUNCTION_WORDS, OBJECT_PREPOSITIONS, PERSONAL_PRONOUNS, WEAK_VERBS,
};
use regex::Regex;
use std::sync::LazyLock;

static RE_SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static RE_SENTENCE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w']+").unwrap());
static RE_SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());
static RE_STANDALONE_I: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bi\b").unwrap());
static RE_SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\. )([a-z])").unwrap());

/// A rewritten line drops below these floors and the caller keeps the
/// original instead (safety valve against over-aggressive deletion).
const MIN_RESULT_CHARS: usize = 3;
const MIN_RESULT_WORDS: usize = 2;

/// Filter one sentence's words against the lexicon tables, with one-word
/// lookahead for the pronoun and preposition exceptions.
fn filter_sentence(sentence: &str) -> Vec<String> {
    let lower = sentence.to_lowercase();
    let words: Vec<&str> = RE_SENTENCE_WORD
        .find_iter(&lower)
        .map(|m| m.as_str())
        .collect();

    let mut tokens = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let next = words.get(i + 1).copied();
        let next_is_action = next.is_some_and(is_action_verb);

        if FILLERS.contains(word) || PERSONAL_PRONOUNS.contains(word) {
            // Pronouns survive as subjects of an action verb.
            if PERSONAL_PRONOUNS.contains(word) && next_is_action {
                tokens.push(word.to_string());
            }
            continue;
        }

        if FUNCTION_WORDS.contains(word) {
            if next_is_action {
                continue;
            }
            // Prepositions keep their object; articles and conjunctions go.
            if OBJECT_PREPOSITIONS.contains(word) && next.is_some() {
                tokens.push(word.to_string());
            }
            continue;
        }

        match WEAK_VERBS.get(word) {
            Some(strong) => tokens.push((*strong).to_string()),
            None => tokens.push(word.to_string()),
        }
    }
    tokens
}

/// Promote the first action verb found after position 0 to the front —
/// a single stable rotation, relative order of everything else preserved.
/// Sentences with several action verbs promote only the first.
fn promote_action_verb(mut tokens: Vec<String>) -> Vec<String> {
    if let Some(idx) = tokens.iter().position(|t| is_action_verb(t)) {
        if idx > 0 {
            let verb = tokens.remove(idx);
            tokens.insert(0, verb);
        }
    }
    tokens
}

/// Split a line into sentences, filter and reconstruct each.
pub fn rewrite(text: &str) -> Vec<String> {
    RE_SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .filter_map(|sentence| {
            let tokens = filter_sentence(sentence);
            if tokens.is_empty() {
                return None;
            }
            Some(promote_action_verb(tokens).join(" "))
        })
        .collect()
}

/// Collapse consecutive duplicate words within a sentence, except action
/// verbs (repeated emphasis is kept). Sentences of length <= 2 are dropped.
pub fn collapse_redundancy(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| s.len() > 2)
        .map(|s| collapse_duplicates(s))
        .filter(|s| !s.is_empty())
        .collect()
}

fn collapse_duplicates(sentence: &str) -> String {
    let mut unique: Vec<&str> = Vec::new();
    let mut prev = "";
    for word in sentence.split(' ') {
        if word != prev || is_action_verb(word) {
            unique.push(word);
        }
        prev = word;
    }
    unique.join(" ")
}

/// Rewrite a whole (already phrase-normalized) line.
///
/// Returns `None` when the rewrite collapses below the safety-valve floor;
/// the caller should keep its original line in that case.
pub fn rewrite_line(text: &str) -> Option<String> {
    let sentences = rewrite(text);
    let collapsed = collapse_redundancy(&sentences);

    let mut result = collapsed.join(". ");
    result = RE_SPACE_RUNS.replace_all(&result, " ").to_string();
    result = RE_SPACE_BEFORE_PUNCT.replace_all(&result, "${1}").to_string();
    result = RE_STANDALONE_I.replace_all(&result, "I").to_string();
    let result = result.trim();
    let result = RE_SENTENCE_START
        .replace_all(result, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .to_string();

    if result.len() < MIN_RESULT_CHARS || result.split_whitespace().count() < MIN_RESULT_WORDS {
        None
    } else {
        Some(result)
    }
}

//! Tokenizer bank — five measurement-only tokenization strategies.
//!
//! Every method is a pure function: deterministic, total over arbitrary
//! input, no retained state between calls. The bank never fails a whole
//! analysis; an unexpected panic degrades to naive whitespace splitting.

use po_core::TokenMethod;
use regex::Regex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());
static RE_SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static RE_JS_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());
static RE_EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());

/// GPT-style approximation closes a token at this many characters.
const GPT_CHUNK: usize = 4;
/// Subword slicing width for words longer than `SUBWORD_KEEP`.
const SUBWORD_SLICE: usize = 3;
const SUBWORD_KEEP: usize = 4;

/// Strip markup-injection shapes before measuring: angle brackets,
/// `javascript:` URLs and inline event-handler assignments.
pub fn sanitize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| *c != '<' && *c != '>').collect();
    let stripped = RE_JS_URL.replace_all(&stripped, "");
    let stripped = RE_EVENT_HANDLER.replace_all(&stripped, "");
    stripped.trim().to_string()
}

/// Tokenize `text` under `method`. Sanitization runs first for every
/// method; if anything slips through and panics, the unsanitized input is
/// whitespace-split instead — this entry point never fails.
pub fn tokenize(text: &str, method: TokenMethod) -> Vec<String> {
    catch_unwind(AssertUnwindSafe(|| {
        let sanitized = sanitize(text);
        dispatch(&sanitized, method)
    }))
    .unwrap_or_else(|_| fallback_split(text))
}

/// Last-resort tokenization: naive whitespace split of the raw input.
/// Infallible by construction.
pub fn fallback_split(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn dispatch(text: &str, method: TokenMethod) -> Vec<String> {
    match method {
        TokenMethod::Word => word_tokens(text),
        TokenMethod::GptApprox => gpt_approx_tokens(text),
        TokenMethod::Character => char_tokens(text),
        TokenMethod::Sentence => sentence_tokens(text),
        TokenMethod::Subword => subword_tokens(text),
    }
}

/// Maximal runs of word characters.
fn word_tokens(text: &str) -> Vec<String> {
    RE_WORD
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Greedy forward scan closing a token on whitespace, punctuation, or at
/// `GPT_CHUNK` characters, whichever comes first. The boundary character is
/// part of the token it closes; whitespace is trimmed off.
fn gpt_approx_tokens(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut len = 0usize;
    for c in text.chars() {
        current.push(c);
        len += 1;
        if c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':') || len >= GPT_CHUNK {
            let token = current.trim();
            if !token.is_empty() {
                chunks.push(token.to_string());
            }
            current.clear();
            len = 0;
        }
    }
    let token = current.trim();
    if !token.is_empty() {
        chunks.push(token.to_string());
    }
    chunks
}

/// Every character is its own token, whitespace included.
fn char_tokens(text: &str) -> Vec<String> {
    text.chars().map(|c| c.to_string()).collect()
}

/// Fragments between runs of sentence terminators, empties dropped.
fn sentence_tokens(text: &str) -> Vec<String> {
    RE_SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Words of length <= `SUBWORD_KEEP` kept whole; longer words sliced into
/// `SUBWORD_SLICE`-char chunks from the start, short remainder kept in
/// full. Slicing is per scalar, so multibyte words never split mid-char.
fn subword_tokens(text: &str) -> Vec<String> {
    let mut subwords = Vec::new();
    for m in RE_WORD.find_iter(text) {
        let word = m.as_str();
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= SUBWORD_KEEP {
            subwords.push(word.to_string());
        } else {
            for chunk in chars.chunks(SUBWORD_SLICE) {
                subwords.push(chunk.iter().collect());
            }
        }
    }
    subwords
}

//! Code-line detection and credential masking.
//!
//! Detection is a best-effort classifier over line shapes, not a parser.
//! A false negative sends code through the prose path (harmless rewrite
//! attempts); a false positive only skips optimization for that line.

use regex::Regex;
use std::sync::LazyLock;

/// Fixed-length mask substituted for every credential-shaped match.
pub const MASK: &str = "***************";

/// The documented code-shape pattern set, any single match classifies the
/// line as code:
/// - declaration keywords at line start (`let`, `fn`, `def`, `class`, ...)
/// - import-like statements (`import`, `use`, `require`, `#include`, ...)
/// - simple `name = value` assignments
/// - lines terminated by braces, semicolons or closing parens
/// - operator tokens rare in prose (`->`, `=>`, `::`, `&&`, `||`)
/// - a call followed by a statement terminator
static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*(?:pub\s+)?(?:let|const|var|val|fn|def|function|func|class|struct|enum|trait|impl|interface)\b",
        r"^\s*(?:import|from|use|require|include|#include|package)\b",
        r"^\s*[A-Za-z_][A-Za-z0-9_]*\s*=(?:[^=]|$)",
        r"[{};]\s*$",
        r"\)\s*[;{]\s*$",
        r"=>|->|::|&&|\|\|",
        r"\w+\([^)]*\)\s*;",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

struct MaskRule {
    re: Regex,
    replacement: &'static str,
}

/// Masking passes, applied in order. Key-capturing rules keep the key name
/// and mask the value; bare-entropy rules mask the whole match.
static MASK_RULES: LazyLock<Vec<MaskRule>> = LazyLock::new(|| {
    let rule = |pattern: &str, replacement: &'static str| MaskRule {
        re: Regex::new(pattern).unwrap(),
        replacement,
    };
    vec![
        // KEY = value uppercase assignment, value masked to end of line
        rule(r"([A-Z0-9_]+)\s*=\s*([^\n\r]*)", "${1}=***************"),
        // keyword-prefixed secrets
        rule(r"(?i)(password|pwd|pass)[:\s=]+\S+", "${1}=***************"),
        rule(r"(?i)(token|auth|bearer)[:\s=]+\S+", "${1}=***************"),
        rule(r"(?i)(key|secret|credential)[:\s=]+\S+", "${1}=***************"),
        rule(r"(?i)(api[_-]?key)[:\s=]+\S+", "${1}=***************"),
        // base64-like runs
        rule(r"\b[A-Za-z0-9+/]{20,}={0,2}\b", "***************"),
        // long hex runs (MD5, SHA, ...)
        rule(r"(?i)\b[a-f0-9]{32,}\b", "***************"),
        // recognizable API-key prefixes
        rule(r"\b(?:sk|pk)_[A-Za-z0-9_]{20,}\b", "***************"),
    ]
});

/// Heuristic code classifier.
pub fn is_likely_code(line: &str) -> bool {
    CODE_PATTERNS.iter().any(|re| re.is_match(line))
}

/// Replace credential-shaped substrings with a fixed-length mask,
/// preserving any captured key name. Idempotent: a masked line re-masks
/// to itself.
pub fn mask_secrets(line: &str) -> String {
    let mut result = line.to_string();
    for rule in MASK_RULES.iter() {
        result = rule.re.replace_all(&result, rule.replacement).to_string();
    }
    result
}

//! Fixed lexicon tables shared by every optimization call.
//!
//! All tables are process-wide and immutable: built once behind `LazyLock`,
//! read concurrently without synchronization, never reinitialized per call.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Verbose → concise phrase pairs, applied case-insensitively in table
/// order. Order is significant: earlier entries pre-empt later overlapping
/// matches, so this is a slice, not a map. An empty replacement deletes the
/// phrase outright.
pub const VERBOSE_PHRASES: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("at this point in time", "now"),
    ("in the event that", "if"),
    ("for the purpose of", "for"),
    ("with regard to", "about"),
    ("in relation to", "about"),
    ("as a matter of fact", ""),
    ("it is important to note that", ""),
    ("it should be noted that", ""),
    ("please note that", ""),
    ("keep in mind that", ""),
    ("bear in mind that", ""),
    ("take into consideration", "consider"),
    ("make use of", "use"),
    ("give consideration to", "consider"),
    ("come to the conclusion", "conclude"),
    ("reach a decision", "decide"),
    ("make a recommendation", "recommend"),
    ("conduct an analysis", "analyze"),
    ("perform an evaluation", "evaluate"),
    ("carry out an investigation", "investigate"),
    ("at the present time", "now"),
    ("in the near future", "soon"),
    ("on a regular basis", "regularly"),
    ("first and foremost", "first"),
    ("last but not least", "finally"),
    ("each and every", "every"),
    ("null and void", "void"),
    ("safe and sound", "safe"),
];

/// Hedges, discourse markers and politeness padding that carry no
/// propositional content. Eligible for deletion inside sentences.
const FILLER_WORDS: &[&str] = &[
    "absolutely", "actually", "anyway", "anyways", "apparently", "arguably",
    "basically", "certainly", "clearly", "completely", "definitely",
    "essentially", "extremely", "fairly", "frankly", "generally", "hello",
    "hey", "hi", "highly", "honestly", "hopefully", "ideally", "incredibly",
    "just", "kindly", "like", "literally", "maybe", "obviously",
    "occasionally", "often", "ok", "okay", "perhaps", "please", "possibly",
    "potentially", "practically", "pretty", "probably", "quite", "rather",
    "really", "seriously", "simply", "somehow", "sometimes", "somewhat",
    "stuff", "surely", "thanks", "totally", "truly", "typically", "uh", "um",
    "usually", "very", "virtually", "well",
];

pub static FILLERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FILLER_WORDS.iter().copied().collect());

const PRONOUN_WORDS: &[&str] = &[
    "i", "me", "my", "mine", "myself",
    "we", "us", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself",
    "she", "her", "hers", "herself",
    "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves",
];

pub static PERSONAL_PRONOUNS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PRONOUN_WORDS.iter().copied().collect());

/// Verbs that carry a sentence's main action. A pronoun directly before one
/// of these survives filtering, and the first one found mid-sentence is
/// promoted to the front during reconstruction.
pub const ACTION_VERBS: &[&str] = &[
    "add", "analyze", "build", "check", "compare", "conclude", "consider",
    "create", "decide", "delete", "deploy", "describe", "design", "develop",
    "evaluate", "execute", "explain", "find", "fix", "focus", "generate",
    "identify", "implement", "improve", "investigate", "list", "optimize",
    "recommend", "refactor", "remove", "review", "run", "search", "suggest",
    "summarize", "test", "update", "validate", "verify", "write",
];

static ACTION_VERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ACTION_VERBS.iter().copied().collect());

pub fn is_action_verb(word: &str) -> bool {
    ACTION_VERB_SET.contains(word.to_lowercase().as_str())
}

/// Weak verb → stronger, more concise synonym.
pub static WEAK_VERBS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("ask", "request");
    m.insert("come", "arrive");
    m.insert("do", "perform");
    m.insert("end", "finish");
    m.insert("get", "retrieve");
    m.insert("give", "provide");
    m.insert("go", "proceed");
    m.insert("help", "assist");
    m.insert("keep", "maintain");
    m.insert("know", "understand");
    m.insert("look", "examine");
    m.insert("make", "create");
    m.insert("put", "place");
    m.insert("say", "state");
    m.insert("see", "observe");
    m.insert("show", "display");
    m.insert("start", "begin");
    m.insert("tell", "explain");
    m.insert("try", "attempt");
    m.insert("want", "require");
    m
});

/// Articles, conjunctions and prepositions the rewriter may drop.
pub const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but",
    "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Prepositions kept when they still have an object after filtering.
/// `of` is deliberately absent: it is always dropped.
pub const OBJECT_PREPOSITIONS: &[&str] = &["in", "on", "at", "to", "for", "with", "by"];

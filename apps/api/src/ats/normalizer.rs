#![allow(dead_code)]

//! Text normalizer. Turns raw extracted résumé text into a comparable token set.
//!
//! Rules run in a fixed order; later rules operate on the output of earlier ones:
//! 1. lowercase
//! 2. collapse compound tech terms (`c++` → `cpp`, `visual studio code` / `vs-code` → `vscode`)
//! 3. replace everything except `a-z`, `0-9`, whitespace and `.` with a space
//! 4. split on whitespace
//! 5. drop words of length ≤ 2
//! 6. drop stopwords
//! 7. deduplicate

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static CPP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"c\+\+").unwrap());
static VISUAL_STUDIO_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"visual\s+studio\s+code").unwrap());
static VS_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"vs\s*[-.]?\s*code").unwrap());
// The dot survives so "node.js" stays one token.
static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s.]").unwrap());

/// English function words that never count as tokens.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "is", "and", "or", "to", "in", "of", "for", "with", "i", "me", "my", "at", "on",
    "as", "so", "was", "were", "by", "from", "an",
];

const MIN_TOKEN_LEN: usize = 3;

/// Deduplicated set of normalized words. Iterates in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Output of a single normalization pass.
///
/// `words` is the cleaned word stream (rules 1–4, original order, unfiltered);
/// the scorer uses it for multi-word keyword phrases. `tokens` is the filtered set.
#[derive(Debug, Clone, Default)]
pub struct NormalizedText {
    pub words: Vec<String>,
    pub tokens: TokenSet,
}

impl NormalizedText {
    /// Whether `phrase` occurs as a contiguous, in-order run of words.
    pub fn contains_phrase(&self, phrase: &[&str]) -> bool {
        if phrase.is_empty() || phrase.len() > self.words.len() {
            return false;
        }
        self.words
            .windows(phrase.len())
            .any(|window| window.iter().zip(phrase).all(|(w, p)| w == p))
    }
}

/// Runs every normalization rule once and keeps both the word stream and the token set.
pub fn analyze(raw_text: &str) -> NormalizedText {
    let cleaned = clean(raw_text);
    let words: Vec<String> = cleaned.split_whitespace().map(String::from).collect();
    let tokens = words
        .iter()
        .filter(|w| is_token(w))
        .cloned()
        .collect::<TokenSet>();

    NormalizedText { words, tokens }
}

/// Canonicalizes raw text into its token set.
pub fn normalize(raw_text: &str) -> TokenSet {
    analyze(raw_text).tokens
}

/// Rules 1–3: lowercase, compound-term collapse, punctuation stripping.
pub fn clean(raw_text: &str) -> String {
    let lower = raw_text.to_lowercase();
    let collapsed = CPP_RE.replace_all(&lower, "cpp");
    let collapsed = VISUAL_STUDIO_CODE_RE.replace_all(&collapsed, "vscode");
    let collapsed = VS_CODE_RE.replace_all(&collapsed, "vscode");
    PUNCTUATION_RE.replace_all(&collapsed, " ").into_owned()
}

fn is_token(word: &str) -> bool {
    word.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(&word)
}

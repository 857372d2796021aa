//! ATS Scorer: weighted keyword + section score for a résumé's raw text.
//!
//! Pure and deterministic: no I/O, no shared mutable state, total over all inputs.
//!
//! Algorithm:
//! 1. Normalize the raw text once (token set + cleaned word stream).
//! 2. Keyword ratio: a catalog keyword matches if its dot-stripped form or its
//!    verbatim form is a token. Keywords with spaces match as contiguous phrases.
//! 3. Section ratio: each section phrase is a case-insensitive substring test
//!    against the raw text.
//! 4. score = keyword_ratio × 80 + section_ratio × 20, clamped to [0, 100],
//!    rendered with two decimals.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::ats::normalizer::{analyze, NormalizedText};
use crate::ats::profile::AtsProfile;

pub const KEYWORD_WEIGHT: f64 = 80.0;
pub const SECTION_WEIGHT: f64 = 20.0;
pub const MAX_SCORE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Overall match percentage. Serialized as a two-decimal string, e.g. `"76.00"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Weights the two ratios, then clamps. Rounding happens on display.
    pub fn from_ratios(keyword_ratio: f64, section_ratio: f64) -> Self {
        let raw = keyword_ratio * KEYWORD_WEIGHT + section_ratio * SECTION_WEIGHT;
        Self(raw.clamp(0.0, MAX_SCORE))
    }

    /// Numeric value rounded to two decimals.
    pub fn value(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of scoring one résumé. Built once per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: Score,
    /// Matched keywords in catalog order, in display form (`cpp` → `C++`).
    pub matched_keywords: Vec<String>,
    /// Catalog entries absent from `matched_keywords`, in catalog order. An aliased
    /// keyword stays here even when matched, since its display form differs.
    pub missing_keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// A catalog keyword with its lookup keys precomputed.
#[derive(Debug, Clone)]
struct KeywordKey {
    catalog: String,
    folded: String,
    dot_stripped: String,
}

impl KeywordKey {
    fn new(catalog: &str) -> Self {
        let folded = catalog.to_lowercase();
        let dot_stripped = folded.replacen('.', "", 1);
        Self {
            catalog: catalog.to_string(),
            folded,
            dot_stripped,
        }
    }

    fn is_phrase(&self) -> bool {
        self.folded.split_whitespace().nth(1).is_some()
    }

    fn matches(&self, text: &NormalizedText) -> bool {
        [&self.dot_stripped, &self.folded].into_iter().any(|key| {
            if self.is_phrase() {
                let words: Vec<&str> = key.split_whitespace().collect();
                text.contains_phrase(&words)
            } else {
                text.tokens.contains(key)
            }
        })
    }
}

/// Scores résumé text against one [`AtsProfile`].
#[derive(Debug, Clone)]
pub struct Scorer {
    profile: AtsProfile,
    keywords: Vec<KeywordKey>,
    sections: Vec<String>,
}

impl Scorer {
    pub fn new(profile: AtsProfile) -> Self {
        let keywords = profile.keywords.iter().map(|k| KeywordKey::new(k)).collect();
        let sections = profile.sections.iter().map(|s| s.to_lowercase()).collect();
        Self {
            profile,
            keywords,
            sections,
        }
    }

    pub fn profile(&self) -> &AtsProfile {
        &self.profile
    }

    pub fn score(&self, raw_text: &str) -> ScoreResult {
        let normalized = analyze(raw_text);

        let matched_keywords: Vec<String> = self
            .keywords
            .iter()
            .filter(|keyword| keyword.matches(&normalized))
            .map(|keyword| self.profile.display_name(&keyword.catalog).to_string())
            .collect();
        // Checked against catalog strings, so a matched `C++` still leaves `cpp` missing.
        let missing_keywords = self
            .profile
            .keywords
            .iter()
            .filter(|keyword| !matched_keywords.contains(keyword))
            .cloned()
            .collect();

        let keyword_ratio = ratio(matched_keywords.len(), self.keywords.len());
        let section_ratio = self.section_ratio(raw_text);

        ScoreResult {
            score: Score::from_ratios(keyword_ratio, section_ratio),
            matched_keywords,
            missing_keywords,
        }
    }

    /// Fraction of section phrases present verbatim (case-insensitive) in the raw text.
    pub fn section_ratio(&self, raw_text: &str) -> f64 {
        let text = raw_text.to_lowercase();
        let found = self
            .sections
            .iter()
            .filter(|section| text.contains(section.as_str()))
            .count();
        ratio(found, self.sections.len())
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(AtsProfile::default())
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Keyword matching — set overlap between résumé tokens and job-description keywords.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word regex is valid"));

/// Job-description tokens must be longer than this to count as keywords.
/// Filters "and", "the", "for" without a curated stop-list.
pub const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 – 100.0, rounded to two decimals.
    pub match_percent: f64,
    pub matched: BTreeSet<String>,
    /// Sorted lexicographically.
    pub missing: Vec<String>,
}

/// Lowercases `text` and returns every maximal run of word characters.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn job_keywords(job_description: &str) -> BTreeSet<String> {
    tokenize(job_description)
        .into_iter()
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .collect()
}

pub fn match_keywords(resume_text: &str, job_description: &str) -> MatchResult {
    let resume_tokens = tokenize(resume_text);
    let keywords = job_keywords(job_description);

    let matched: BTreeSet<String> = keywords.intersection(&resume_tokens).cloned().collect();
    // BTreeSet difference iterates in sorted order.
    let missing: Vec<String> = keywords.difference(&resume_tokens).cloned().collect();

    let match_percent = if keywords.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / keywords.len() as f64 * 100.0)
    };

    MatchResult {
        match_percent,
        matched,
        missing,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Keyword highlighting — wraps whole-word keyword occurrences in `<span>` tags.
//!
//! Input must already be HTML-escaped (see [`escape_html`]). The output is
//! treated as trusted markup by whoever renders it.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Group 1 is markup passed through untouched: spans emitted earlier and HTML
/// entities. Anything else matched is a word token.
static MARKUP_OR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<span class="[^"]*">[^<]*</span>|&#?\w+;)|\w+"#)
        .expect("highlight regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightLabel {
    Match,
    Missing,
}

impl HighlightLabel {
    pub fn css_class(&self) -> &'static str {
        match self {
            HighlightLabel::Match => "match",
            HighlightLabel::Missing => "missing",
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wraps every case-insensitive, whole-word occurrence of each keyword in
/// `<span class="{label}">…</span>`, keeping the original casing.
///
/// Keywords are `\w+` tokens, so each maximal word run is looked up whole and
/// "test" never matches inside "testing". Already-highlighted spans are
/// skipped, so running this over its own output never double-wraps.
pub fn highlight<I, S>(text: &str, keywords: I, label: HighlightLabel) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keywords: HashSet<String> = keywords
        .into_iter()
        .map(|k| k.as_ref().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return text.to_string();
    }

    let class = label.css_class();
    MARKUP_OR_WORD
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            if caps.get(1).is_none() && keywords.contains(&token.to_lowercase()) {
                format!(r#"<span class="{class}">{token}</span>"#)
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

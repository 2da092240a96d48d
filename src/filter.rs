// src/filter.rs
//! Keyword filter: the headlines worth a briefing.

use std::fmt;

use crate::ingest::types::FeedItem;

/// Built-in keyword list. Matching is case-insensitive, so "FAA" also catches "faa".
pub const DEFAULT_KEYWORDS: [&str; 8] = [
    "delay",
    "cancel",
    "flights",
    "ground stop",
    "storm",
    "snow",
    "outage",
    "FAA",
];

/// Upper bound on hits forwarded to the summarizer (keeps the prompt small).
pub const DEFAULT_MAX_HITS: usize = 15;

/// A matched headline, rendered as `- {title} ({link})`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit(String);

impl Hit {
    pub fn from_item(item: &FeedItem) -> Self {
        Self(format!("- {} ({})", item.title, item.link))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Newline-joined hits, the form used in both the prompt and the fallback body.
pub fn join_hits(hits: &[Hit]) -> String {
    hits.iter()
        .map(Hit::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>, // lowercased
    max_hits: usize,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS, DEFAULT_MAX_HITS)
    }
}

impl KeywordFilter {
    pub fn new<I, S>(keywords: I, max_hits: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords, max_hits }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn max_hits(&self) -> usize {
        self.max_hits
    }

    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.keywords.iter().any(|k| title.contains(k.as_str()))
    }

    /// First `max_hits` matching items, in feed order.
    pub fn collect_hits(&self, items: &[FeedItem]) -> Vec<Hit> {
        items
            .iter()
            .filter(|it| self.matches(&it.title))
            .take(self.max_hits)
            .map(Hit::from_item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_is_formatted_with_link_in_parens() {
        let it = FeedItem::new("Snow at BOS", "https://n.example/a");
        assert_eq!(Hit::from_item(&it).as_str(), "- Snow at BOS (https://n.example/a)");
    }

    #[test]
    fn uppercase_keyword_matches_any_case() {
        let f = KeywordFilter::default();
        assert!(f.matches("faa probes radar outage"));
        assert!(f.matches("New FAA rules"));
    }

    #[test]
    fn blank_keywords_are_dropped() {
        let f = KeywordFilter::new(["  ", "Storm "], 3);
        assert_eq!(f.keywords(), &["storm".to_string()]);
        assert!(!f.matches("anything at all"));
    }

    #[test]
    fn join_hits_uses_newlines() {
        let hits = vec![
            Hit::from_item(&FeedItem::new("a", "1")),
            Hit::from_item(&FeedItem::new("b", "2")),
        ];
        assert_eq!(join_hits(&hits), "- a (1)\n- b (2)");
    }
}

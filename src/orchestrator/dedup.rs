//! Cross-source candidate deduplication.
//!
//! Connectors routinely surface the same page under slightly different
//! titles, and merged branches arrive in completion order. The walk is
//! first-seen-wins over both the lower-cased URL and the normalized
//! title, so it tolerates any arrival order.

use std::collections::HashSet;

use crate::types::ArticleCandidate;

/// Keep the first candidate per lower-cased URL and per normalized title.
pub fn deduplicate(candidates: Vec<ArticleCandidate>) -> Vec<ArticleCandidate> {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut output = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let url = candidate.url.to_lowercase();
        let title = normalize_title(&candidate.title);
        if seen_urls.contains(&url) || seen_titles.contains(&title) {
            continue;
        }
        seen_urls.insert(url);
        seen_titles.insert(title);
        output.push(candidate);
    }

    output
}

/// Lower-case and strip everything but ASCII alphanumerics and spaces.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

//! Deterministic offline candidates for mock-mode searches.
//!
//! Mock mode exists so UI work and tests can run without the network:
//! six synthetic candidates alternating between two sources and
//! licenses, with word counts derived from the requested budget, pushed
//! through the same filter and ranking steps as live results.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use crate::reading_time;
use crate::types::{
    ArticleCandidate, LicenseType, RecommendationRequest, RecommendationResult, Source,
};

use super::{filter, scoring};

const MOCK_COUNT: usize = 6;

/// Build the mock-mode result for a request. No I/O, no caching.
pub fn mock_result(request: &RecommendationRequest) -> RecommendationResult {
    let budget = reading_time::max_words(request.minutes, request.wpm);
    let topic = if request.topic.is_empty() {
        "reading"
    } else {
        request.topic.as_str()
    };

    let mut all = Vec::with_capacity(MOCK_COUNT);
    for index in 1..=MOCK_COUNT {
        let (source, license) = if index % 2 == 0 {
            (Source::Wikipedia, LicenseType::CreativeCommons)
        } else {
            (Source::Wikisource, LicenseType::PublicDomain)
        };

        all.push(ArticleCandidate {
            id: format!("mock-{index}"),
            title: format!("{} primer {index}", capitalize(topic)),
            url: format!("https://example.com/mock/{index}"),
            source,
            date: Some(Utc::now() - Duration::days(index as i64)),
            snippet: format!("Deterministic mock result #{index} for UI testing."),
            license,
            language: request.language.clone(),
            word_count: Some(budget.saturating_sub(index * 80).max(120)),
            raw_length_fields: HashMap::new(),
            extraction_failed: false,
        });
    }

    let filtered = filter::apply(all, request);
    let ranked = scoring::rank(filtered, request);
    RecommendationResult::from_ranked(ranked)
}

/// Upper-case the first letter of each word, lower-casing the rest.
fn capitalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

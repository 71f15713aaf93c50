//! Time, license, and exclusion filtering.

use std::collections::HashSet;

use crate::reading_time;
use crate::types::{ArticleCandidate, RecommendationRequest};

/// Drop candidates that are excluded, mis-licensed, or too long for the
/// request's time budget.
///
/// Candidates with an unknown word count pass the time check; they get
/// the benefit of the doubt here and a scoring penalty later.
pub fn apply(
    candidates: Vec<ArticleCandidate>,
    request: &RecommendationRequest,
) -> Vec<ArticleCandidate> {
    let allowance = if request.allow_slightly_over { 1 } else { 0 };
    let excluded: HashSet<String> = request
        .excluded_urls
        .iter()
        .map(|url| url.to_lowercase())
        .collect();

    candidates
        .into_iter()
        .filter(|candidate| {
            if excluded.contains(&candidate.url.to_lowercase()) {
                return false;
            }
            if !request.license_filter.allows(candidate.license) {
                return false;
            }
            match candidate.word_count {
                Some(words) => {
                    reading_time::estimated_minutes(words, request.wpm)
                        <= request.minutes + allowance
                }
                None => true,
            }
        })
        .collect()
}

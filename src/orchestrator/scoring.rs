//! Multi-factor candidate scoring and ranking.
//!
//! ```text
//! score = 0.45 * topic + 0.35 * fit + quality + source_boost + recency
//! ```
//!
//! - topic: share of the request's topic tokens found in title + snippet
//! - fit: closeness of the estimated reading time to the requested budget
//!   (flat 0.15 when the word count is unknown)
//! - quality: small additive credits for snippet, date, known license,
//!   and successful extraction
//! - source_boost: fixed per-source constant from `Source::boost`
//! - recency: up to 0.1 for recent dates, only when the request prefers
//!   recent material, decaying to zero over roughly ten years

use std::collections::HashSet;

use chrono::Utc;

use crate::reading_time;
use crate::types::{ArticleCandidate, LicenseType, RecommendationRequest};

/// Sort candidates by descending score.
pub fn rank(
    candidates: Vec<ArticleCandidate>,
    request: &RecommendationRequest,
) -> Vec<ArticleCandidate> {
    let topic_tokens = token_set(&request.topic);

    let mut scored: Vec<(f64, ArticleCandidate)> = candidates
        .into_iter()
        .map(|candidate| (score(&candidate, &topic_tokens, request), candidate))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Score one candidate against the request.
pub fn score(
    candidate: &ArticleCandidate,
    topic_tokens: &HashSet<String>,
    request: &RecommendationRequest,
) -> f64 {
    let text_tokens = token_set(&format!("{} {}", candidate.title, candidate.snippet));
    let topic_score = if topic_tokens.is_empty() {
        0.0
    } else {
        topic_tokens.intersection(&text_tokens).count() as f64 / topic_tokens.len() as f64
    };

    let fit_score = match candidate.word_count {
        Some(words) => {
            let estimate = reading_time::estimated_minutes(words, request.wpm);
            let delta = f64::from(request.minutes.abs_diff(estimate));
            (1.0 - delta / f64::from(request.minutes.max(1))).max(0.0)
        }
        None => 0.15,
    };

    let mut quality = 0.0;
    if !candidate.snippet.is_empty() {
        quality += 0.2;
    }
    if candidate.date.is_some() {
        quality += 0.1;
    }
    if candidate.license != LicenseType::Unknown {
        quality += 0.1;
    }
    if !candidate.extraction_failed {
        quality += 0.1;
    }

    let recency_boost = match candidate.date {
        Some(date) if request.prefer_recent => {
            let age_days = (Utc::now() - date).num_seconds() as f64 / 86_400.0;
            (0.1 - (age_days / 3650.0).min(0.1)).max(0.0)
        }
        _ => 0.0,
    };

    0.45 * topic_score + 0.35 * fit_score + quality + candidate.source.boost() + recency_boost
}

/// Tokenize for topical overlap: lower-cased, ASCII alphanumeric runs,
/// single-character tokens dropped, set semantics.
pub fn token_set(input: &str) -> HashSet<String> {
    input
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.len() > 1)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;
    use chrono::Duration;

    fn make_candidate(title: &str, snippet: &str, words: Option<usize>) -> ArticleCandidate {
        ArticleCandidate {
            id: format!("test-{title}"),
            title: title.into(),
            url: format!("https://example.com/{title}"),
            source: Source::Wikipedia,
            date: None,
            snippet: snippet.into(),
            license: LicenseType::CreativeCommons,
            language: "en".into(),
            word_count: words,
            raw_length_fields: Default::default(),
            extraction_failed: false,
        }
    }

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            topic: "solar system".into(),
            minutes: 10,
            wpm: 200,
            ..Default::default()
        }
    }

    #[test]
    fn token_set_drops_short_tokens_and_punctuation() {
        let tokens = token_set("The Solar-System: a primer!");
        assert!(tokens.contains("the"));
        assert!(tokens.contains("solar"));
        assert!(tokens.contains("system"));
        assert!(tokens.contains("primer"));
        assert!(!tokens.contains("a"));
    }

    #[test]
    fn token_set_has_set_semantics() {
        let tokens = token_set("comet comet comet");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn full_topic_overlap_beats_partial() {
        let req = request();
        let topic_tokens = token_set(&req.topic);
        let full = make_candidate("Solar system overview", "", Some(2000));
        let partial = make_candidate("Solar flares", "", Some(2000));
        assert!(score(&full, &topic_tokens, &req) > score(&partial, &topic_tokens, &req));
    }

    #[test]
    fn snippet_contributes_to_topic_overlap() {
        let req = request();
        let topic_tokens = token_set(&req.topic);
        let via_snippet = make_candidate("Sky atlas", "maps of the solar system", Some(2000));
        let neither = make_candidate("Sky atlas", "", Some(2000));
        assert!(score(&via_snippet, &topic_tokens, &req) > score(&neither, &topic_tokens, &req));
    }

    #[test]
    fn perfect_time_fit_scores_highest() {
        let req = request();
        let topic_tokens = token_set(&req.topic);
        // 2000 words at 200 wpm = exactly 10 minutes.
        let exact = make_candidate("A", "", Some(2000));
        let off = make_candidate("B", "", Some(1000));
        assert!(score(&exact, &topic_tokens, &req) > score(&off, &topic_tokens, &req));
    }

    #[test]
    fn unknown_word_count_penalized() {
        let req = request();
        let topic_tokens = token_set(&req.topic);
        let known = make_candidate("A", "", Some(2000));
        let unknown = make_candidate("B", "", None);
        assert!(score(&known, &topic_tokens, &req) > score(&unknown, &topic_tokens, &req));
    }

    #[test]
    fn quality_credits_accumulate() {
        let req = request();
        let topic_tokens = token_set(&req.topic);

        let mut bare = make_candidate("A", "", Some(2000));
        bare.license = LicenseType::Unknown;
        bare.extraction_failed = true;

        let mut rich = make_candidate("A", "a snippet", Some(2000));
        rich.date = Some(Utc::now());

        let delta = score(&rich, &topic_tokens, &req) - score(&bare, &topic_tokens, &req);
        // snippet 0.2 + date 0.1 + license 0.1 + extraction 0.1
        assert!((delta - 0.5).abs() < 1e-9);
    }

    #[test]
    fn source_boost_breaks_ties() {
        let req = request();
        let topic_tokens = token_set(&req.topic);
        let mut wikisource = make_candidate("A", "", Some(2000));
        wikisource.source = Source::Wikisource;
        let mut loc = make_candidate("B", "", Some(2000));
        loc.source = Source::ChroniclingAmerica;
        assert!(score(&wikisource, &topic_tokens, &req) > score(&loc, &topic_tokens, &req));
    }

    #[test]
    fn recency_boost_requires_opt_in() {
        let mut req = request();
        let topic_tokens = token_set(&req.topic);
        let mut dated = make_candidate("A", "", Some(2000));
        dated.date = Some(Utc::now() - Duration::days(30));

        let without = score(&dated, &topic_tokens, &req);
        req.prefer_recent = true;
        let with = score(&dated, &topic_tokens, &req);
        assert!(with > without);
    }

    #[test]
    fn recency_boost_decays_with_age() {
        let mut req = request();
        req.prefer_recent = true;
        let topic_tokens = token_set(&req.topic);

        let mut fresh = make_candidate("A", "", Some(2000));
        fresh.date = Some(Utc::now() - Duration::days(10));
        let mut old = make_candidate("B", "", Some(2000));
        old.date = Some(Utc::now() - Duration::days(3000));
        let mut ancient = make_candidate("C", "", Some(2000));
        ancient.date = Some(Utc::now() - Duration::days(40_000));

        let score_fresh = score(&fresh, &topic_tokens, &req);
        let score_old = score(&old, &topic_tokens, &req);
        let score_ancient = score(&ancient, &topic_tokens, &req);
        assert!(score_fresh > score_old);
        assert!(score_old > score_ancient);

        // Past the ten-year horizon the boost bottoms out at zero.
        req.prefer_recent = false;
        let score_baseline = score(&ancient, &topic_tokens, &req);
        assert!((score_ancient - score_baseline).abs() < 1e-9);
    }

    #[test]
    fn rank_orders_descending() {
        let req = request();
        let topic_tokens = token_set(&req.topic);
        let candidates = vec![
            make_candidate("Unrelated essay", "", None),
            make_candidate("Solar system tour", "the solar system", Some(2000)),
            make_candidate("Solar notes", "", Some(400)),
        ];
        let ranked = rank(candidates, &req);
        let scores: Vec<f64> = ranked
            .iter()
            .map(|candidate| score(candidate, &topic_tokens, &req))
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(ranked[0].title, "Solar system tour");
    }

    #[test]
    fn empty_topic_scores_zero_overlap() {
        let req = RecommendationRequest {
            topic: String::new(),
            ..request()
        };
        let topic_tokens = token_set(&req.topic);
        let candidate = make_candidate("Anything", "", Some(2000));
        // No topic tokens: the 0.45 term contributes nothing. Quality is
        // 0.1 (known license) + 0.1 (extraction ok); the snippet is empty.
        let total = score(&candidate, &topic_tokens, &req);
        let expected = 0.35 * 1.0 + 0.1 + 0.1 + Source::Wikipedia.boost();
        assert!((total - expected).abs() < 1e-9);
    }
}

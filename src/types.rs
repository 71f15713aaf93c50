//! Core types: sources, licenses, candidates, requests, and results.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reading_time;

/// Number of primary recommendations returned per search.
pub const TOP_COUNT: usize = 3;

/// Maximum number of backup recommendations returned per search.
pub const BACKUP_COUNT: usize = 10;

/// External sources that readscout draws candidates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Wikisource — public-domain source texts.
    Wikisource,
    /// Wikipedia — encyclopedic articles under Creative Commons.
    Wikipedia,
    /// Internet Archive — library/media archive, licensing varies per item.
    InternetArchive,
    /// Chronicling America — Library of Congress newspaper archive.
    ChroniclingAmerica,
}

impl Source {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wikisource => "Wikisource",
            Self::Wikipedia => "Wikipedia",
            Self::InternetArchive => "Internet Archive",
            Self::ChroniclingAmerica => "Chronicling America",
        }
    }

    /// Fixed ranking boost for candidates from this source.
    ///
    /// The relative order (Wikisource > Wikipedia > Internet Archive >
    /// Chronicling America) is load-bearing; the exact values are tuned
    /// by hand.
    pub fn boost(&self) -> f64 {
        match self {
            Self::Wikisource => 0.08,
            Self::Wikipedia => 0.06,
            Self::InternetArchive => 0.05,
            Self::ChroniclingAmerica => 0.04,
        }
    }

    /// Returns all source variants.
    pub fn all() -> &'static [Source] {
        &[
            Self::Wikisource,
            Self::Wikipedia,
            Self::InternetArchive,
            Self::ChroniclingAmerica,
        ]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// License classification for a candidate article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    PublicDomain,
    CreativeCommons,
    FreeToRead,
    /// Licensing varies per item within the source.
    Varies,
    Unknown,
}

impl LicenseType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PublicDomain => "Public Domain",
            Self::CreativeCommons => "Creative Commons",
            Self::FreeToRead => "Free-to-read",
            Self::Varies => "Varies",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-selected license constraint for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseFilter {
    Any,
    PublicDomain,
    CreativeCommons,
    FreeToRead,
}

impl LicenseFilter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::PublicDomain => "Public Domain",
            Self::CreativeCommons => "Creative Commons",
            Self::FreeToRead => "Free-to-read",
        }
    }

    /// Whether a candidate with the given license passes this filter.
    ///
    /// Exact match is required for everything except [`LicenseFilter::Any`];
    /// in particular `Varies` and `Unknown` only pass the `Any` filter.
    pub fn allows(&self, license: LicenseType) -> bool {
        match self {
            Self::Any => true,
            Self::PublicDomain => license == LicenseType::PublicDomain,
            Self::CreativeCommons => license == LicenseType::CreativeCommons,
            Self::FreeToRead => license == LicenseType::FreeToRead,
        }
    }
}

impl fmt::Display for LicenseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A prospective recommendation found by a connector.
///
/// Connectors create candidates with `word_count` unset; the enrichment
/// step fills it in where content extraction succeeds. Candidates are
/// never mutated once they enter a ranked [`RecommendationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCandidate {
    /// Source-prefixed stable identifier, unique within one aggregation run.
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: Source,
    pub date: Option<DateTime<Utc>>,
    /// Short excerpt, possibly empty until enrichment backfills it.
    pub snippet: String,
    pub license: LicenseType,
    /// BCP-47-ish language tag, usually inherited from the request.
    pub language: String,
    /// Number of words in the article body, once known.
    pub word_count: Option<usize>,
    /// Diagnostic key-values passed through from the source response.
    pub raw_length_fields: HashMap<String, String>,
    /// Set when an enrichment attempt could not produce usable text.
    pub extraction_failed: bool,
}

/// An immutable description of one recommendation search.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub topic: String,
    /// Reading-time budget in minutes.
    pub minutes: u32,
    pub license_filter: LicenseFilter,
    pub language: String,
    /// Reading speed in words per minute.
    pub wpm: u32,
    /// Accept candidates estimated at one minute over budget.
    pub allow_slightly_over: bool,
    pub prefer_recent: bool,
    /// Synthesize deterministic offline candidates instead of fetching.
    pub mock_mode: bool,
    /// URLs (case-insensitive) that must not reappear, e.g. from a
    /// previous round's top picks.
    pub excluded_urls: Vec<String>,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            minutes: 10,
            license_filter: LicenseFilter::Any,
            language: "en".into(),
            wpm: reading_time::DEFAULT_WPM,
            allow_slightly_over: true,
            prefer_recent: false,
            mock_mode: false,
            excluded_urls: Vec::new(),
        }
    }
}

impl RecommendationRequest {
    /// Canonical cache key for this request.
    ///
    /// Pure and deterministic: variable text fields are lower-cased and
    /// the exclusion list is sorted, so two requests differing only in
    /// case or exclusion order collide.
    pub fn cache_key(&self) -> String {
        let mut excluded: Vec<String> = self
            .excluded_urls
            .iter()
            .map(|url| url.to_lowercase())
            .collect();
        excluded.sort();

        [
            self.topic.to_lowercase(),
            self.minutes.to_string(),
            self.license_filter.name().to_owned(),
            self.language.to_lowercase(),
            self.wpm.to_string(),
            self.allow_slightly_over.to_string(),
            self.prefer_recent.to_string(),
            self.mock_mode.to_string(),
            excluded.join(","),
        ]
        .join("|")
    }

    /// Derive the follow-up "try again" request: the same search with the
    /// given result's top picks added to the exclusion list.
    pub fn excluding_top(&self, result: &RecommendationResult) -> Self {
        let mut next = self.clone();
        for candidate in &result.top_three {
            let url = candidate.url.to_lowercase();
            if !next.excluded_urls.iter().any(|seen| seen.to_lowercase() == url) {
                next.excluded_urls.push(url);
            }
        }
        next
    }
}

/// Ranked output of one search: up to three primary picks plus backups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub top_three: Vec<ArticleCandidate>,
    /// Substitutes offered when a top pick is unreachable; disjoint from
    /// `top_three`.
    pub backups: Vec<ArticleCandidate>,
}

impl RecommendationResult {
    /// Slice a ranked candidate list into top picks and backups.
    pub fn from_ranked(ranked: Vec<ArticleCandidate>) -> Self {
        let top_three: Vec<ArticleCandidate> = ranked.iter().take(TOP_COUNT).cloned().collect();
        let backups: Vec<ArticleCandidate> =
            ranked.into_iter().skip(TOP_COUNT).take(BACKUP_COUNT).collect();
        Self { top_three, backups }
    }

    pub fn is_empty(&self) -> bool {
        self.top_three.is_empty() && self.backups.is_empty()
    }

    /// The order in which a caller should try to open links for the
    /// candidate with the given id: the candidate itself, then every
    /// backup that is not that candidate. Empty when the id is unknown.
    pub fn fallback_order(&self, id: &str) -> Vec<&ArticleCandidate> {
        let Some(primary) = self
            .top_three
            .iter()
            .chain(self.backups.iter())
            .find(|candidate| candidate.id == id)
        else {
            return Vec::new();
        };

        let mut order = vec![primary];
        order.extend(self.backups.iter().filter(|candidate| candidate.id != id));
        order
    }
}

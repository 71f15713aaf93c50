//! # readscout
//!
//! Free-to-read article recommendations: search several public content
//! sources at once, keep what fits the reader's time budget and license
//! preference, and return a small ranked shortlist plus backups.
//!
//! ## Design
//!
//! - Queries Wikisource, Wikipedia, the Internet Archive, and the
//!   Library of Congress Chronicling America archive concurrently, one
//!   task per (connector, query-variant) pair, each bounded by its own
//!   timeout
//! - A slow or failing source degrades to zero candidates from that
//!   branch; it never sinks the whole search
//! - Candidates without a known length are enriched by fetching their
//!   page and counting words in the extracted body text
//! - Results are deduplicated across sources, filtered by reading time
//!   and license, ranked by a multi-factor score, and cached briefly
//!   under the normalized request signature
//! - Mock mode synthesizes deterministic candidates for fully offline
//!   UI work and tests

pub mod cache;
pub mod config;
pub mod connector;
pub mod connectors;
pub mod content;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod reading_time;
pub mod types;

use std::sync::OnceLock;

pub use config::ServiceConfig;
pub use connector::Connector;
pub use error::{Result, ScoutError};
pub use orchestrator::search::RecommendationService;
pub use types::{
    ArticleCandidate, LicenseFilter, LicenseType, RecommendationRequest, RecommendationResult,
    Source,
};

/// Process-wide service used by [`search`], lazily initialised with the
/// default configuration so repeated calls share one cache.
static DEFAULT_SERVICE: OnceLock<RecommendationService> = OnceLock::new();

/// Run a recommendation search with the default service configuration.
///
/// Convenience wrapper for callers that do not need to configure or
/// inject connectors; see [`RecommendationService::search`] for the
/// pipeline itself.
///
/// # Errors
///
/// Returns [`ScoutError::EmptyTopic`] for a blank live-mode topic.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> readscout::Result<()> {
/// let request = readscout::RecommendationRequest {
///     topic: "astronomy".into(),
///     minutes: 15,
///     ..Default::default()
/// };
/// let picks = readscout::search(&request).await?;
/// for candidate in &picks.top_three {
///     println!("{}: {}", candidate.title, candidate.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(request: &RecommendationRequest) -> Result<RecommendationResult> {
    DEFAULT_SERVICE
        .get_or_init(RecommendationService::default)
        .search(request)
        .await
}

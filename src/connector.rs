//! Trait definition for pluggable article-source connectors.
//!
//! Each external source (Wikisource, Wikipedia, Internet Archive,
//! Chronicling America) implements [`Connector`] so the orchestrator can
//! fan out over a uniform interface and tests can substitute mocks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::connectors::{
    ChroniclingAmericaConnector, InternetArchiveConnector, WikipediaConnector,
    WikisourceConnector,
};
use crate::error::Result;
use crate::types::{ArticleCandidate, Source};

/// A pluggable search adapter over one external source.
///
/// Contract: one bounded HTTP request per call; an empty result list is
/// `Ok(vec![])`, never an error. Errors are reserved for malformed
/// endpoint construction, non-success statuses, transport failures, and
/// undecodable bodies, all of which the orchestrator contains at branch
/// level. Implementations derive license and language from source
/// identity, seed `extraction_failed = false`, and leave `word_count`
/// unset for later enrichment.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Which source this connector represents.
    fn source(&self) -> Source;

    /// Search the source and return parsed candidates.
    async fn fetch_candidates(&self, query: &str, language: &str)
        -> Result<Vec<ArticleCandidate>>;
}

/// The production connector set, in ranking-boost order.
pub fn default_connectors() -> Vec<Arc<dyn Connector>> {
    vec![
        Arc::new(WikisourceConnector),
        Arc::new(WikipediaConnector),
        Arc::new(InternetArchiveConnector),
        Arc::new(ChroniclingAmericaConnector),
    ]
}

//! The recommendation service: cache check, concurrent fan-out with
//! per-branch timeouts, dedup, enrichment, filter, rank, slice, cache.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::cache::ResultCache;
use crate::config::ServiceConfig;
use crate::connector::{default_connectors, Connector};
use crate::content;
use crate::error::{Result, ScoutError};
use crate::http;
use crate::types::{ArticleCandidate, RecommendationRequest, RecommendationResult};

use super::{dedup, expand, filter, mock, scoring};

/// Aggregates article candidates from every configured connector and
/// turns them into a ranked shortlist.
///
/// The service is cheap to share behind an `Arc`; the embedded cache is
/// the only mutable state and serializes its own access.
pub struct RecommendationService {
    connectors: Vec<Arc<dyn Connector>>,
    cache: ResultCache,
    config: ServiceConfig,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self {
            connectors: default_connectors(),
            cache: ResultCache::new(),
            config: ServiceConfig::default(),
        }
    }
}

impl RecommendationService {
    /// Build a service over the production connector set.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Config`] when the configuration is invalid.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        Self::with_connectors(config, default_connectors())
    }

    /// Build a service over a caller-supplied connector set. Used by
    /// tests to substitute mock connectors.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Config`] when the configuration is invalid.
    pub fn with_connectors(
        config: ServiceConfig,
        connectors: Vec<Arc<dyn Connector>>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            connectors,
            cache: ResultCache::new(),
            config,
        })
    }

    /// Run one recommendation search.
    ///
    /// Mock mode synthesizes offline candidates and never touches the
    /// network or the cache. Live mode rejects a blank topic before any
    /// I/O; after that every branch failure degrades to an empty
    /// contribution, so even an all-branches-failed run produces an
    /// empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::EmptyTopic`] for a blank live-mode topic.
    pub async fn search(&self, request: &RecommendationRequest) -> Result<RecommendationResult> {
        if request.mock_mode {
            return Ok(mock::mock_result(request));
        }

        if request.topic.trim().is_empty() {
            return Err(ScoutError::EmptyTopic);
        }

        let key = request.cache_key();
        if let Some(cached) = self.cache.get(&key).await {
            tracing::info!(topic = %request.topic, "cache hit");
            return Ok(cached);
        }

        let queries = expand::expand_queries(&request.topic);
        let merged = self.fan_out(&queries, &request.language).await;
        let deduped = dedup::deduplicate(merged);
        let enriched = self.enrich(deduped).await;
        let filtered = filter::apply(enriched, request);
        let ranked = scoring::rank(filtered, request);

        let result = RecommendationResult::from_ranked(ranked);
        self.cache
            .put(
                &key,
                result.clone(),
                Duration::from_secs(self.config.cache_ttl_secs),
            )
            .await;
        Ok(result)
    }

    /// Launch one task per (connector, query-variant) pair and merge
    /// whatever completes inside the per-branch ceiling.
    async fn fan_out(&self, queries: &[String], language: &str) -> Vec<ArticleCandidate> {
        let ceiling = Duration::from_secs(self.config.connector_timeout_secs);

        let tasks: Vec<_> = self
            .connectors
            .iter()
            .flat_map(|connector| {
                queries.iter().map(move |query| {
                    let connector = Arc::clone(connector);
                    let query = query.clone();
                    let language = language.to_owned();
                    async move { fetch_with_timeout(connector, &query, &language, ceiling).await }
                })
            })
            .collect();

        futures::future::join_all(tasks)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Concurrently fill in missing word counts by fetching and
    /// extracting candidate content. Never fails the search.
    async fn enrich(&self, candidates: Vec<ArticleCandidate>) -> Vec<ArticleCandidate> {
        if candidates
            .iter()
            .all(|candidate| candidate.word_count.is_some())
        {
            return candidates;
        }

        let client = match http::build_client(
            &self.config.user_agent,
            Duration::from_secs(self.config.enrichment_timeout_secs),
        ) {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(error = %err, "enrichment client unavailable");
                return candidates
                    .into_iter()
                    .map(|mut candidate| {
                        if candidate.word_count.is_none() {
                            candidate.extraction_failed = true;
                        }
                        candidate
                    })
                    .collect();
            }
        };

        let tasks: Vec<_> = candidates
            .into_iter()
            .map(|candidate| {
                let client = client.clone();
                async move { enrich_candidate(&client, candidate).await }
            })
            .collect();

        futures::future::join_all(tasks).await
    }
}

/// Race one connector query against the branch ceiling. Errors and
/// timeouts are logged and contribute nothing; the losing future is
/// dropped, cancelling any in-flight request.
async fn fetch_with_timeout(
    connector: Arc<dyn Connector>,
    query: &str,
    language: &str,
    ceiling: Duration,
) -> Vec<ArticleCandidate> {
    match tokio::time::timeout(ceiling, connector.fetch_candidates(query, language)).await {
        Ok(Ok(candidates)) => {
            tracing::debug!(
                source = %connector.source(),
                query,
                count = candidates.len(),
                "connector returned candidates"
            );
            candidates
        }
        Ok(Err(err)) => {
            tracing::warn!(source = %connector.source(), query, error = %err, "connector query failed");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(source = %connector.source(), query, "connector timed out");
            Vec::new()
        }
    }
}

/// Fetch one candidate's page and derive its word count. On success the
/// word count is set and an empty snippet is backfilled from the
/// extracted text; on any failure the candidate is marked
/// `extraction_failed` and passed through otherwise unchanged.
async fn enrich_candidate(
    client: &reqwest::Client,
    mut candidate: ArticleCandidate,
) -> ArticleCandidate {
    if candidate.word_count.is_some() {
        return candidate;
    }

    let Ok(url) = Url::parse(&candidate.url) else {
        candidate.extraction_failed = true;
        return candidate;
    };

    match http::get_text(client, url).await {
        Ok(html) => {
            let text = content::extract_main_text(&html);
            let words = content::word_count(&text);
            if words > 0 {
                candidate.word_count = Some(words);
                candidate.extraction_failed = false;
                if candidate.snippet.is_empty() {
                    candidate.snippet = content::snippet_of(&text);
                }
            } else {
                candidate.extraction_failed = true;
            }
        }
        Err(err) => {
            tracing::warn!(url = %candidate.url, error = %err, "enrichment fetch failed");
            candidate.extraction_failed = true;
        }
    }

    candidate
}

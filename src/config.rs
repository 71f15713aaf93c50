//! Service configuration with sensible defaults.

use crate::error::{Result, ScoutError};
use crate::http;

/// Configuration for a [`crate::RecommendationService`].
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Ceiling in seconds for each (connector, query-variant) branch.
    /// A branch slower than this contributes zero candidates.
    pub connector_timeout_secs: u64,
    /// Per-request timeout in seconds for enrichment content fetches.
    pub enrichment_timeout_secs: u64,
    /// How long a finished result stays cached, in seconds.
    pub cache_ttl_secs: u64,
    /// User-Agent header sent with every outbound request.
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            connector_timeout_secs: 8,
            enrichment_timeout_secs: 8,
            cache_ttl_secs: 60 * 30,
            user_agent: http::USER_AGENT.to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    pub fn validate(&self) -> Result<()> {
        if self.connector_timeout_secs == 0 {
            return Err(ScoutError::Config(
                "connector_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.enrichment_timeout_secs == 0 {
            return Err(ScoutError::Config(
                "enrichment_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ScoutError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }
}

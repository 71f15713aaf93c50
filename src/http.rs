//! Shared HTTP plumbing: client construction, bounded GETs, and the
//! link reachability probe callers use before opening a candidate.

use std::time::Duration;

use url::Url;

use crate::error::{Result, ScoutError};

/// User-Agent sent with every outbound request.
pub const USER_AGENT: &str = "readscout/0.1";

/// Client-side timeout applied to each connector search request.
pub const CONNECTOR_TIMEOUT: Duration = Duration::from_secs(8);

/// Timeout for the reachability probe. Shorter than the search timeout
/// because the caller is waiting to open a link.
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(6);

/// Build a [`reqwest::Client`] with the given User-Agent and timeout.
///
/// # Errors
///
/// Returns [`ScoutError::Http`] if the client cannot be constructed.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ScoutError::Http(format!("failed to build HTTP client: {e}")))
}

/// GET the given URL and return the response body as text.
///
/// # Errors
///
/// Returns [`ScoutError::Http`] on transport failure and
/// [`ScoutError::InvalidResponse`] for any non-2xx status.
pub async fn get_text(client: &reqwest::Client, url: Url) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ScoutError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScoutError::InvalidResponse(status.to_string()));
    }

    response
        .text()
        .await
        .map_err(|e| ScoutError::Http(e.to_string()))
}

/// Probe whether a candidate URL is worth opening: HEAD first, falling
/// back to GET for servers that reject HEAD. Statuses 200–399 count as
/// reachable; anything else, including transport errors, does not.
pub async fn is_reachable(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Ok(client) = build_client(USER_AGENT, REACHABILITY_TIMEOUT) else {
        return false;
    };

    if let Ok(response) = client.head(parsed.clone()).send().await {
        if reachable_status(response.status().as_u16()) {
            return true;
        }
    }

    match client.get(parsed).send().await {
        Ok(response) => reachable_status(response.status().as_u16()),
        Err(_) => false,
    }
}

fn reachable_status(status: u16) -> bool {
    (200..400).contains(&status)
}

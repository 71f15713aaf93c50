//! Chronicling America connector — full-text search over the Library of
//! Congress historic newspaper archive.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::connector::Connector;
use crate::content;
use crate::error::{Result, ScoutError};
use crate::http;
use crate::types::{ArticleCandidate, LicenseType, Source};

pub struct ChroniclingAmericaConnector;

const ENDPOINT: &str = "https://chroniclingamerica.loc.gov/search/pages/results/";

/// Shown when a page has no OCR text to excerpt.
const FALLBACK_SNIPPET: &str = "Historic newspaper page from the Library of Congress.";

#[async_trait]
impl Connector for ChroniclingAmericaConnector {
    fn source(&self) -> Source {
        Source::ChroniclingAmerica
    }

    async fn fetch_candidates(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<ArticleCandidate>> {
        let mut url = Url::parse(ENDPOINT).map_err(|_| ScoutError::BadUrl)?;
        url.query_pairs_mut()
            .append_pair("andtext", query)
            .append_pair("format", "json")
            .append_pair("rows", "10");

        let client = http::build_client(http::USER_AGENT, http::CONNECTOR_TIMEOUT)?;
        let body = http::get_text(&client, url).await?;
        parse_results(&body, language)
    }
}

/// Parse the Chronicling America JSON body into candidates.
///
/// Separated from the fetch for testability against recorded fixtures.
pub(crate) fn parse_results(body: &str, language: &str) -> Result<Vec<ArticleCandidate>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ScoutError::Parse(format!("Chronicling America response: {e}")))?;

    let items = value
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let candidates = items
        .iter()
        .filter_map(|item| {
            // The item id doubles as the page URL.
            let id = item.get("id")?.as_str()?;
            let title = item.get("title").and_then(Value::as_str).unwrap_or(id);
            let ocr_text = item
                .get("ocr_eng")
                .and_then(Value::as_str)
                .unwrap_or(FALLBACK_SNIPPET);
            let date = item
                .get("date")
                .and_then(Value::as_str)
                .and_then(parse_item_date);

            Some(ArticleCandidate {
                id: format!("loc-{id}"),
                title: title.to_owned(),
                url: id.to_owned(),
                source: Source::ChroniclingAmerica,
                date,
                snippet: content::snippet_of(ocr_text),
                license: LicenseType::PublicDomain,
                language: language.to_owned(),
                word_count: None,
                raw_length_fields: HashMap::from([(
                    "license_note".to_owned(),
                    "Public Domain / LOC".to_owned(),
                )]),
                extraction_failed: false,
            })
        })
        .collect();

    Ok(candidates)
}

/// Best-effort date parse; most items carry a bare `YYYYMMDD` that does
/// not parse, and those candidates simply go dateless.
fn parse_item_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

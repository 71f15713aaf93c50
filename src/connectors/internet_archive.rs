//! Internet Archive connector — keyword search over the library/media
//! archive via `advancedsearch.php`.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::connector::Connector;
use crate::error::{Result, ScoutError};
use crate::http;
use crate::types::{ArticleCandidate, LicenseType, Source};

pub struct InternetArchiveConnector;

const ENDPOINT: &str = "https://archive.org/advancedsearch.php";

#[async_trait]
impl Connector for InternetArchiveConnector {
    fn source(&self) -> Source {
        Source::InternetArchive
    }

    async fn fetch_candidates(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<ArticleCandidate>> {
        let mut url = Url::parse(ENDPOINT).map_err(|_| ScoutError::BadUrl)?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("fl[]", "identifier")
            .append_pair("fl[]", "title")
            .append_pair("fl[]", "description")
            .append_pair("rows", "10")
            .append_pair("page", "1")
            .append_pair("output", "json");

        let client = http::build_client(http::USER_AGENT, http::CONNECTOR_TIMEOUT)?;
        let body = http::get_text(&client, url).await?;
        parse_results(&body, language)
    }
}

/// Parse the archive.org JSON body into candidates.
///
/// Separated from the fetch for testability against recorded fixtures.
pub(crate) fn parse_results(body: &str, language: &str) -> Result<Vec<ArticleCandidate>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ScoutError::Parse(format!("Internet Archive response: {e}")))?;

    let docs = value
        .get("response")
        .and_then(|response| response.get("docs"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let candidates = docs
        .iter()
        .filter_map(|doc| {
            let identifier = doc.get("identifier")?.as_str()?;
            let title = doc.get("title")?.as_str()?;
            let description = parse_description(doc.get("description")).unwrap_or_default();

            Some(ArticleCandidate {
                id: format!("archive-{identifier}"),
                title: title.to_owned(),
                url: format!("https://archive.org/details/{identifier}"),
                source: Source::InternetArchive,
                date: None,
                snippet: description,
                license: LicenseType::Varies,
                language: language.to_owned(),
                word_count: None,
                raw_length_fields: Default::default(),
                extraction_failed: false,
            })
        })
        .collect();

    Ok(candidates)
}

/// The `description` field is a string for some items and an array of
/// strings for others; take the first either way.
fn parse_description(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../test-data/internet_archive.json");

    #[test]
    fn fixture_maps_docs_to_candidates() {
        let candidates = parse_results(FIXTURE, "en").expect("fixture should parse");
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].id, "archive-principlesofastro00unse");
        assert_eq!(
            candidates[0].url,
            "https://archive.org/details/principlesofastro00unse"
        );
        assert_eq!(candidates[0].license, LicenseType::Varies);
    }

    #[test]
    fn string_description_kept() {
        let candidates = parse_results(FIXTURE, "en").expect("should parse");
        assert!(candidates[0].snippet.contains("textbook"));
    }

    #[test]
    fn array_description_takes_first() {
        let candidates = parse_results(FIXTURE, "en").expect("should parse");
        let with_array = candidates
            .iter()
            .find(|c| c.id == "archive-skyatlas1920")
            .expect("array-description doc");
        assert_eq!(with_array.snippet, "A star atlas.");
    }

    #[test]
    fn docs_missing_required_fields_skipped() {
        // The third fixture doc has no title and must be dropped.
        let body = r#"{"response":{"docs":[
            {"identifier":"ok","title":"Kept"},
            {"identifier":"no-title"},
            {"title":"No identifier"}
        ]}}"#;
        let candidates = parse_results(body, "en").expect("should parse");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Kept");
    }

    #[test]
    fn empty_docs_is_empty_ok() {
        let candidates = parse_results(r#"{"response":{"docs":[]}}"#, "en").expect("should parse");
        assert!(candidates.is_empty());
    }

    #[test]
    fn missing_response_is_empty_ok() {
        let candidates = parse_results("{}", "en").expect("should parse");
        assert!(candidates.is_empty());
    }

    #[test]
    fn garbage_body_is_parse_error() {
        let err = parse_results("<html>rate limited</html>", "en").unwrap_err();
        assert!(err.to_string().contains("Internet Archive"));
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_archive_search() {
        let connector = InternetArchiveConnector;
        let results = connector.fetch_candidates("astronomy", "en").await;
        let results = results.expect("live search should work");
        assert!(!results.is_empty());
        for candidate in &results {
            assert!(candidate.url.starts_with("https://archive.org/details/"));
        }
    }
}

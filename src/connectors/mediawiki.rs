//! Shared plumbing for the MediaWiki-family connectors (Wikipedia and
//! Wikisource): typed response models, endpoint construction, and
//! snippet cleanup.

use serde::Deserialize;
use url::Url;

use crate::content;
use crate::error::{Result, ScoutError};

/// Results per MediaWiki search request.
const RESULT_LIMIT: &str = "10";

#[derive(Debug, Deserialize)]
pub(crate) struct MediaWikiSearchResponse {
    pub(crate) query: MediaWikiQuery,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaWikiQuery {
    pub(crate) search: Vec<MediaWikiSearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaWikiSearchItem {
    pub(crate) pageid: u64,
    pub(crate) title: String,
    /// Raw snippet; carries `<span class="searchmatch">` highlighting.
    pub(crate) snippet: String,
}

/// Lower-cased language subdomain, defaulting to `en`.
pub(crate) fn normalized_language(language: &str) -> String {
    let lang = language.to_lowercase();
    if lang.is_empty() {
        "en".to_owned()
    } else {
        lang
    }
}

/// Search endpoint for a wiki family (`wikipedia` or `wikisource`).
pub(crate) fn search_url(family: &str, lang: &str, query: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("https://{lang}.{family}.org/w/api.php"))
        .map_err(|_| ScoutError::BadUrl)?;
    url.query_pairs_mut()
        .append_pair("action", "query")
        .append_pair("list", "search")
        .append_pair("srsearch", query)
        .append_pair("srlimit", RESULT_LIMIT)
        .append_pair("format", "json")
        .append_pair("utf8", "1");
    Ok(url)
}

/// Canonical page URL for a search hit.
pub(crate) fn page_url(family: &str, lang: &str, pageid: u64) -> String {
    format!("https://{lang}.{family}.org/wiki?curid={pageid}")
}

/// Drop the highlighting markup MediaWiki embeds in snippets.
pub(crate) fn strip_html_tags(input: &str) -> String {
    let fragment = scraper::Html::parse_fragment(input);
    let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    content::collapse_whitespace(&text)
}

pub(crate) fn parse_search_response(body: &str, source: &str) -> Result<MediaWikiSearchResponse> {
    serde_json::from_str(body)
        .map_err(|e| ScoutError::Parse(format!("{source} search response: {e}")))
}

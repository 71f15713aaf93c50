//! Wikipedia connector — encyclopedic search via the MediaWiki API.

use async_trait::async_trait;

use super::mediawiki;
use crate::connector::Connector;
use crate::error::Result;
use crate::http;
use crate::types::{ArticleCandidate, LicenseType, Source};

pub struct WikipediaConnector;

const FAMILY: &str = "wikipedia";

#[async_trait]
impl Connector for WikipediaConnector {
    fn source(&self) -> Source {
        Source::Wikipedia
    }

    async fn fetch_candidates(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<ArticleCandidate>> {
        let lang = mediawiki::normalized_language(language);
        let url = mediawiki::search_url(FAMILY, &lang, query)?;
        let client = http::build_client(http::USER_AGENT, http::CONNECTOR_TIMEOUT)?;
        let body = http::get_text(&client, url).await?;
        let decoded = mediawiki::parse_search_response(&body, Source::Wikipedia.name())?;

        Ok(decoded
            .query
            .search
            .into_iter()
            .map(|item| ArticleCandidate {
                id: format!("wikipedia-{}", item.pageid),
                title: item.title,
                url: mediawiki::page_url(FAMILY, &lang, item.pageid),
                source: Source::Wikipedia,
                date: None,
                snippet: mediawiki::strip_html_tags(&item.snippet),
                license: LicenseType::CreativeCommons,
                language: lang.clone(),
                word_count: None,
                raw_length_fields: Default::default(),
                extraction_failed: false,
            })
            .collect())
    }
}

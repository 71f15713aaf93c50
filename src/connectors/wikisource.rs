//! Wikisource connector — public-domain source texts via the MediaWiki API.

use std::collections::HashMap;

use async_trait::async_trait;

use super::mediawiki;
use crate::connector::Connector;
use crate::error::Result;
use crate::http;
use crate::types::{ArticleCandidate, LicenseType, Source};

pub struct WikisourceConnector;

const FAMILY: &str = "wikisource";

#[async_trait]
impl Connector for WikisourceConnector {
    fn source(&self) -> Source {
        Source::Wikisource
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
        let decoded = mediawiki::parse_search_response(&body, Source::Wikisource.name())?;

        Ok(decoded
            .query
            .search
            .into_iter()
            .map(|item| ArticleCandidate {
                id: format!("wikisource-{}", item.pageid),
                title: item.title,
                url: mediawiki::page_url(FAMILY, &lang, item.pageid),
                source: Source::Wikisource,
                date: None,
                snippet: mediawiki::strip_html_tags(&item.snippet),
                license: LicenseType::PublicDomain,
                language: lang.clone(),
                word_count: None,
                raw_length_fields: HashMap::from([(
                    "license_note".to_owned(),
                    "Public Domain / varies".to_owned(),
                )]),
                extraction_failed: false,
            })
            .collect())
    }
}

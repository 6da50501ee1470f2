use std::env;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::WikiError;
use super::extract::{
    extract_langlink, extract_search_results, extract_section_content, extract_sections,
    extract_summary,
};
use super::types::{ApiResponse, ArticleSummary, SearchResult, SectionContent, SectionDescriptor};
use crate::search::Lang;

/// Thumbnail width requested alongside summaries.
const THUMBNAIL_SIZE: &str = "300";

/// Read-only access to the Wikipedia actions this crate needs.
/// Implemented by `WikipediaClient` for production; mock implementations used in tests.
pub trait WikiApi {
    async fn search(&self, term: &str, lang: Lang) -> Result<Vec<SearchResult>, WikiError>;

    async fn summary(&self, page_id: u64, lang: Lang)
    -> Result<Option<ArticleSummary>, WikiError>;

    async fn sections(&self, page_id: u64, lang: Lang)
    -> Result<Vec<SectionDescriptor>, WikiError>;

    async fn section_content(
        &self,
        page_id: u64,
        index: &str,
        lang: Lang,
    ) -> Result<SectionContent, WikiError>;

    /// Title of the `to` edition's article linked from `title` on the `from` edition.
    async fn langlink(&self, title: &str, from: Lang, to: Lang)
    -> Result<Option<String>, WikiError>;
}

/// API endpoint per language.
#[derive(Debug, Clone)]
pub struct Endpoints {
    en: Url,
    te: Url,
}

impl Endpoints {
    /// Reads `MANAHEALTH_EN_API_URL` / `MANAHEALTH_TE_API_URL`, falling back to
    /// the public `*.wikipedia.org` endpoints.
    pub fn from_env() -> Result<Self, WikiError> {
        let resolve = |var: &str, lang: Lang| {
            env::var(var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| lang.default_api_url())
        };
        Self::new(
            &resolve("MANAHEALTH_EN_API_URL", Lang::En),
            &resolve("MANAHEALTH_TE_API_URL", Lang::Te),
        )
    }

    pub fn new(en: &str, te: &str) -> Result<Self, WikiError> {
        Ok(Self {
            en: Url::parse(en)?,
            te: Url::parse(te)?,
        })
    }

    pub fn for_lang(&self, lang: Lang) -> &Url {
        match lang {
            Lang::En => &self.en,
            Lang::Te => &self.te,
        }
    }
}

/// Stateless HTTP client for the MediaWiki action API.
/// Cheap to clone; every call is independent.
#[derive(Clone)]
pub struct WikipediaClient {
    http: Client,
    endpoints: Endpoints,
}

impl WikipediaClient {
    pub fn new(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    async fn get(&self, lang: Lang, params: &[(&str, &str)]) -> Result<ApiResponse, WikiError> {
        let mut url = self.endpoints.for_lang(lang).clone();
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("format", "json")
            .append_pair("origin", "*");

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%lang, status = %status, "Wikipedia API returned non-success status");
            return Err(WikiError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: ApiResponse = serde_json::from_str(&text)?;

        if let Some(err) = body.error {
            let err = WikiError::Api {
                code: err.code.unwrap_or_else(|| "unknown".to_string()),
                info: err.info.unwrap_or_default(),
            };
            warn!(%lang, error = %err, "Wikipedia API error in 200 response");
            return Err(err);
        }

        Ok(body)
    }
}

impl WikiApi for WikipediaClient {
    async fn search(&self, term: &str, lang: Lang) -> Result<Vec<SearchResult>, WikiError> {
        let body = self
            .get(
                lang,
                &[("action", "query"), ("list", "search"), ("srsearch", term)],
            )
            .await?;
        let results = extract_search_results(body);
        debug!(%lang, term, hits = results.len(), "search complete");
        Ok(results)
    }

    async fn summary(
        &self,
        page_id: u64,
        lang: Lang,
    ) -> Result<Option<ArticleSummary>, WikiError> {
        let id = page_id.to_string();
        let body = self
            .get(
                lang,
                &[
                    ("action", "query"),
                    ("pageids", id.as_str()),
                    ("prop", "extracts|pageimages"),
                    ("exintro", "1"),
                    ("explaintext", "1"),
                    ("pithumbsize", THUMBNAIL_SIZE),
                ],
            )
            .await?;
        Ok(extract_summary(body, page_id))
    }

    async fn sections(
        &self,
        page_id: u64,
        lang: Lang,
    ) -> Result<Vec<SectionDescriptor>, WikiError> {
        let id = page_id.to_string();
        let body = self
            .get(
                lang,
                &[("action", "parse"), ("pageid", id.as_str()), ("prop", "sections")],
            )
            .await?;
        Ok(extract_sections(body))
    }

    async fn section_content(
        &self,
        page_id: u64,
        index: &str,
        lang: Lang,
    ) -> Result<SectionContent, WikiError> {
        let id = page_id.to_string();
        let body = self
            .get(
                lang,
                &[
                    ("action", "parse"),
                    ("pageid", id.as_str()),
                    ("section", index),
                    ("prop", "text"),
                ],
            )
            .await?;
        Ok(extract_section_content(body))
    }

    async fn langlink(
        &self,
        title: &str,
        from: Lang,
        to: Lang,
    ) -> Result<Option<String>, WikiError> {
        let body = self
            .get(
                from,
                &[
                    ("action", "query"),
                    ("titles", title),
                    ("prop", "langlinks"),
                    ("lllang", to.code()),
                ],
            )
            .await?;
        Ok(extract_langlink(body, to.code()))
    }
}

use tracing::warn;

use super::Lang;
use super::bilingual::search_with_fallback;
use crate::wikipedia::types::{ArticleSummary, SearchResult, SectionContent, SectionDescriptor};
use crate::wikipedia::{WikiApi, WikiError};

/// Consumer-facing Wikipedia operations.
///
/// Holds no state between calls. Failures of any kind are logged and
/// collapsed into the operation's empty value, so "nothing found" and
/// "request failed" look the same to the caller. `try_search` keeps the
/// error for callers that need to tell them apart.
#[derive(Clone)]
pub struct Gateway<A> {
    api: A,
}

impl<A: WikiApi> Gateway<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn try_search(&self, term: &str, lang: Lang) -> Result<Vec<SearchResult>, WikiError> {
        search_with_fallback(&self.api, term, lang).await
    }

    pub async fn search(&self, term: &str, lang: Lang) -> Vec<SearchResult> {
        or_empty(self.try_search(term, lang).await, "search")
    }

    /// No language fallback: page ids belong to one edition.
    pub async fn fetch_summary(&self, page_id: u64, lang: Lang) -> Option<ArticleSummary> {
        or_empty(self.api.summary(page_id, lang).await, "fetch summary")
    }

    pub async fn list_sections(&self, page_id: u64, lang: Lang) -> Vec<SectionDescriptor> {
        or_empty(self.api.sections(page_id, lang).await, "list sections")
    }

    pub async fn fetch_section_content(
        &self,
        page_id: u64,
        index: &str,
        lang: Lang,
    ) -> SectionContent {
        or_empty(
            self.api.section_content(page_id, index, lang).await,
            "fetch section content",
        )
    }
}

fn or_empty<T: Default>(result: Result<T, WikiError>, operation: &str) -> T {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "{operation} failed, returning empty result");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::bilingual::mock::{MockWiki, hit};

    #[tokio::test]
    async fn search_failure_collapses_to_empty() {
        let api = MockWiki::default().failing_on("search");
        let gateway = Gateway::new(api);

        assert!(gateway.search("flu", Lang::En).await.is_empty());
        assert!(gateway.try_search("flu", Lang::En).await.is_err());
    }

    #[tokio::test]
    async fn search_without_any_results_is_empty() {
        let gateway = Gateway::new(MockWiki::default());
        assert!(gateway.search("xyzzy", Lang::Te).await.is_empty());
    }

    #[tokio::test]
    async fn empty_term_is_forwarded_without_panicking() {
        let gateway = Gateway::new(MockWiki::default());
        assert!(gateway.search("", Lang::Te).await.is_empty());
    }

    #[tokio::test]
    async fn summary_failure_is_absent() {
        let gateway = Gateway::new(MockWiki::default().failing_on("summary"));
        assert!(gateway.fetch_summary(7, Lang::En).await.is_none());
    }

    #[tokio::test]
    async fn summary_targets_single_edition() {
        let mut api = MockWiki::default();
        api.summaries.insert(
            (Lang::En, 7),
            ArticleSummary {
                page_id: 7,
                title: "Fever".into(),
                extract: "Fever is...".into(),
                thumbnail: None,
            },
        );
        let gateway = Gateway::new(api);

        assert!(gateway.fetch_summary(7, Lang::Te).await.is_none());
        let summary = gateway.fetch_summary(7, Lang::En).await.unwrap();
        assert_eq!(summary.page_id, 7);
    }

    #[tokio::test]
    async fn section_failures_are_empty() {
        let gateway = Gateway::new(MockWiki::default().failing_on(":en:1"));

        assert!(gateway.list_sections(1, Lang::En).await.is_empty());
        let content = gateway.fetch_section_content(1, "3", Lang::En).await;
        assert_eq!(content.content, "");
    }

    #[tokio::test]
    async fn search_returns_results_as_given() {
        let api = MockWiki::default().with_search(Lang::En, "cold", &["Common cold", "Cold"]);
        let gateway = Gateway::new(api);

        let results = gateway.search("cold", Lang::En).await;
        assert_eq!(results, vec![hit(1, "Common cold"), hit(2, "Cold")]);
    }
}

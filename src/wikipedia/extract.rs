use tracing::debug;

use super::types::{
    ApiResponse, ArticleSummary, SearchResult, SectionContent, SectionDescriptor, Thumbnail,
};

pub fn extract_search_results(response: ApiResponse) -> Vec<SearchResult> {
    response
        .query
        .and_then(|q| q.search)
        .unwrap_or_default()
        .into_iter()
        .map(|hit| SearchResult {
            page_id: hit.pageid,
            title: hit.title,
            snippet: hit.snippet,
        })
        .collect()
}

/// Picks the page keyed by `page_id`. Missing or invalid pages yield `None`.
pub fn extract_summary(response: ApiResponse, page_id: u64) -> Option<ArticleSummary> {
    let mut pages = response.query?.pages?;
    let page = pages.remove(&page_id.to_string())?;

    if page.missing.is_some() || page.invalid.is_some() {
        debug!(page_id, "page reported missing");
        return None;
    }

    Some(ArticleSummary {
        page_id,
        title: page.title?,
        extract: page.extract.unwrap_or_default(),
        thumbnail: page.thumbnail.map(|t| Thumbnail { url: t.source }),
    })
}

pub fn extract_sections(response: ApiResponse) -> Vec<SectionDescriptor> {
    response
        .parse
        .and_then(|p| p.sections)
        .unwrap_or_default()
        .into_iter()
        .map(|s| SectionDescriptor {
            index: s.index,
            title: s.line,
        })
        .collect()
}

pub fn extract_section_content(response: ApiResponse) -> SectionContent {
    SectionContent {
        content: response
            .parse
            .and_then(|p| p.text)
            .map(|t| t.html)
            .unwrap_or_default(),
    }
}

/// First inter-language link to `lang` on the first returned page.
pub fn extract_langlink(response: ApiResponse, lang: &str) -> Option<String> {
    let pages = response.query?.pages?;
    let page = pages.into_values().next()?;
    page.langlinks?
        .into_iter()
        .find(|l| l.lang == lang)
        .map(|l| l.title)
        .filter(|t| !t.is_empty())
}

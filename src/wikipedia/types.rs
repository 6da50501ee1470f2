use std::collections::HashMap;

use serde::Deserialize;

/// Response envelope shared by every `api.php` action used here.
/// Only one of `query` / `parse` is populated, depending on the action.
#[derive(Debug, Deserialize, Default)]
pub struct ApiResponse {
    pub query: Option<QueryBody>,
    pub parse: Option<ParseBody>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize, Default)]
pub struct QueryBody {
    pub search: Option<Vec<SearchHit>>,
    /// Keyed by page id as a string (`formatversion=1`).
    pub pages: Option<HashMap<String, Page>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub pageid: u64,
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct Page {
    pub title: Option<String>,
    pub extract: Option<String>,
    pub thumbnail: Option<PageThumbnail>,
    pub langlinks: Option<Vec<LangLink>>,
    /// Present (as an empty string) when the page does not exist.
    pub missing: Option<serde_json::Value>,
    pub invalid: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PageThumbnail {
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct LangLink {
    pub lang: String,
    #[serde(rename = "*")]
    pub title: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ParseBody {
    pub sections: Option<Vec<ParseSection>>,
    pub text: Option<ParseText>,
}

#[derive(Debug, Deserialize)]
pub struct ParseSection {
    pub index: String,
    /// Heading text; may carry inline markup such as `<i>`.
    pub line: String,
}

#[derive(Debug, Deserialize)]
pub struct ParseText {
    #[serde(rename = "*")]
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub info: Option<String>,
}

/// One hit from a keyword search. `snippet` is untrusted highlight markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub page_id: u64,
    pub title: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub page_id: u64,
    pub title: String,
    pub extract: String,
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

/// A section heading. `index` is an opaque token, not a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub index: String,
    pub title: String,
}

/// Rendered markup of one section. Untrusted; empty when unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionContent {
    pub content: String,
}

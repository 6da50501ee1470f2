use crate::search::Lang;
use crate::wikipedia::WikiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("no article with page id {page_id} on {lang}.wikipedia.org")]
    PageNotFound { page_id: u64, lang: Lang },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Config(#[from] WikiError),
}

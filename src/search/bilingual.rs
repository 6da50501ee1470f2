use tracing::debug;

use super::Lang;
use crate::wikipedia::types::SearchResult;
use crate::wikipedia::{WikiApi, WikiError};

/// Searches `term` on the `lang` edition, bridging through English when a
/// secondary-language search comes back empty.
///
/// The bridge assumes the top English hit is the intended topic and follows
/// its inter-language link; the linked title is then searched on the `lang`
/// edition. Every round-trip waits for the previous one. The first failure
/// aborts the whole chain.
pub async fn search_with_fallback(
    api: &impl WikiApi,
    term: &str,
    lang: Lang,
) -> Result<Vec<SearchResult>, WikiError> {
    let direct = api.search(term, lang).await?;
    if !direct.is_empty() || lang.is_primary() {
        return Ok(direct);
    }

    let primary = Lang::PRIMARY;
    let bridged = api.search(term, primary).await?;
    let Some(top) = bridged.first() else {
        debug!(term, "no primary-language results to bridge from");
        return Ok(Vec::new());
    };

    let Some(linked) = api.langlink(&top.title, primary, lang).await? else {
        debug!(title = %top.title, %lang, "no inter-language link");
        return Ok(Vec::new());
    };

    debug!(from = %top.title, to = %linked, %lang, "following inter-language link");
    api.search(&linked, lang).await
}

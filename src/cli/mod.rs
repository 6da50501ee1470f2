mod args;
mod errors;

pub use args::{Cli, Command};
pub use errors::CliError;

use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::search::engine::{self, disease_info, format_disease_info};
use crate::search::{Gateway, KeywordClassifier, Lang};
use crate::wikipedia::{Endpoints, WikiApi, WikipediaClient};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum redirect hops before aborting.
const MAX_REDIRECTS: usize = 5;

/// Externally hosted symptom-based disease prediction tool.
pub const PREDICTION_TOOL_URL: &str = "https://asnvs-symptomsdiseasepredction.hf.space";

/// Builds the production gateway.
///
/// Configuration via environment variables:
/// - `MANAHEALTH_EN_API_URL`: English API endpoint (optional)
/// - `MANAHEALTH_TE_API_URL`: Telugu API endpoint (optional)
pub fn gateway_from_env() -> Result<Gateway<WikipediaClient>, CliError> {
    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()?;
    let endpoints = Endpoints::from_env()?;
    Ok(Gateway::new(WikipediaClient::new(http, endpoints)))
}

/// Executes one subcommand and returns the text to print.
pub async fn run(command: Command, gateway: &Gateway<impl WikiApi>) -> Result<String, CliError> {
    let classifier = KeywordClassifier::default();

    match command {
        Command::Search(args) => {
            let term = args.term().ok_or(CliError::EmptyQuery)?;
            info!(query = %term, lang = %args.lang, "cmd:search");

            let results = gateway.search(&term, args.lang).await;

            info!(results = results.len(), "search complete");
            Ok(engine::format_results(&results, &term, args.lang))
        }
        Command::Lookup(args) => {
            let term = args.term().ok_or(CliError::EmptyQuery)?;
            info!(query = %term, lang = %args.lang, "cmd:lookup");

            let results = gateway.search(&term, args.lang).await;
            let Some(top) = results.first() else {
                return Ok(engine::format_results(&results, &term, args.lang));
            };
            show(gateway, top.page_id, args.lang, &classifier).await
        }
        Command::Show(args) => {
            info!(page_id = args.page_id, lang = %args.lang, "cmd:show");
            show(gateway, args.page_id, args.lang, &classifier).await
        }
        Command::Sections(args) => {
            info!(page_id = args.page_id, lang = %args.lang, "cmd:sections");

            let sections = gateway.list_sections(args.page_id, args.lang).await;
            if sections.is_empty() {
                warn!(page_id = args.page_id, "no sections returned");
            }
            Ok(engine::format_sections(&sections, &classifier, args.lang))
        }
        Command::Predict(args) => Ok(format!(
            "{}\n{PREDICTION_TOOL_URL}",
            args.lang.labels().predict_intro
        )),
    }
}

async fn show(
    gateway: &Gateway<impl WikiApi>,
    page_id: u64,
    lang: Lang,
    classifier: &KeywordClassifier,
) -> Result<String, CliError> {
    let info = disease_info(gateway, page_id, lang, classifier)
        .await
        .ok_or(CliError::PageNotFound { page_id, lang })?;
    Ok(format_disease_info(&info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::bilingual::mock::MockWiki;
    use crate::wikipedia::types::{ArticleSummary, SectionDescriptor};
    use clap::{CommandFactory, Parser};

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    fn wiki_with_fever() -> MockWiki {
        let mut api = MockWiki::default()
            .with_search(Lang::En, "fever", &["Fever"])
            .with_langlink("Fever", "జ్వరం")
            .with_search(Lang::Te, "జ్వరం", &["జ్వరం"]);
        for lang in [Lang::En, Lang::Te] {
            let title = if lang == Lang::En { "Fever" } else { "జ్వరం" };
            api.summaries.insert(
                (lang, 1),
                ArticleSummary {
                    page_id: 1,
                    title: title.into(),
                    extract: format!("{title} is a rise in body temperature."),
                    thumbnail: None,
                },
            );
        }
        api.sections.insert(
            (Lang::En, 1),
            vec![SectionDescriptor {
                index: "1".into(),
                title: "Signs and symptoms".into(),
            }],
        );
        api.contents
            .insert((Lang::En, 1, "1".into()), "<p>Feeling cold.</p>".into());
        api
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_multi_word_query_and_lang() {
        match parse(&["manahealth", "search", "heart", "attack", "--lang", "te"]) {
            Command::Search(args) => {
                assert_eq!(args.term().as_deref(), Some("heart attack"));
                assert_eq!(args.lang, Lang::Te);
            }
            other => panic!("expected search, got: {other:?}"),
        }
    }

    #[test]
    fn lang_defaults_to_english() {
        match parse(&["manahealth", "show", "20423"]) {
            Command::Show(args) => {
                assert_eq!(args.page_id, 20423);
                assert_eq!(args.lang, Lang::En);
            }
            other => panic!("expected show, got: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Cli::try_parse_from(["manahealth", "search", "flu", "--lang", "fr"]).is_err());
    }

    #[tokio::test]
    async fn search_rejects_blank_query() {
        let gateway = Gateway::new(MockWiki::default());
        let command = parse(&["manahealth", "search", "   "]);

        let err = run(command, &gateway).await.unwrap_err();

        assert!(matches!(err, CliError::EmptyQuery));
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn search_prints_results() {
        let gateway = Gateway::new(wiki_with_fever());

        let out = run(parse(&["manahealth", "search", "fever"]), &gateway)
            .await
            .unwrap();

        assert!(out.contains("**Fever**"));
    }

    #[tokio::test]
    async fn telugu_lookup_uses_fallback_and_telugu_labels() {
        let gateway = Gateway::new(wiki_with_fever());

        let out = run(parse(&["manahealth", "lookup", "fever", "-l", "te"]), &gateway)
            .await
            .unwrap();

        assert!(out.starts_with("# జ్వరం"));
        assert!(out.contains("## లక్షణాలు"));
        assert!(out.contains("https://te.wikipedia.org/?curid=1"));
    }

    #[tokio::test]
    async fn lookup_without_results_prints_no_results() {
        let gateway = Gateway::new(MockWiki::default());

        let out = run(parse(&["manahealth", "lookup", "xyzzy"]), &gateway)
            .await
            .unwrap();

        assert!(out.contains("No results found for \"xyzzy\""));
    }

    #[tokio::test]
    async fn show_renders_symptoms() {
        let gateway = Gateway::new(wiki_with_fever());

        let out = run(parse(&["manahealth", "show", "1"]), &gateway)
            .await
            .unwrap();

        assert!(out.contains("Feeling cold"));
    }

    #[tokio::test]
    async fn show_missing_page_is_error() {
        let gateway = Gateway::new(MockWiki::default());

        let err = run(parse(&["manahealth", "show", "5"]), &gateway)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::PageNotFound { page_id: 5, .. }));
    }

    #[tokio::test]
    async fn sections_lists_headings() {
        let gateway = Gateway::new(wiki_with_fever());

        let out = run(parse(&["manahealth", "sections", "1"]), &gateway)
            .await
            .unwrap();

        assert_eq!(out, "1\tSigns and symptoms [Symptoms]\n");
    }

    #[tokio::test]
    async fn predict_prints_tool_url() {
        let gateway = Gateway::new(MockWiki::default());

        let out = run(parse(&["manahealth", "predict"]), &gateway)
            .await
            .unwrap();

        assert!(out.ends_with(PREDICTION_TOOL_URL));
    }
}

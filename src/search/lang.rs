use clap::ValueEnum;

/// Supported UI locales. English is primary; Telugu is secondary and
/// falls back to English Wikipedia when it has no direct match.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Te,
}

impl Lang {
    pub const PRIMARY: Lang = Lang::En;

    /// Wikipedia language code, also used as the `lllang` value.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Te => "te",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    pub fn default_api_url(self) -> String {
        format!("https://{}.wikipedia.org/w/api.php", self.code())
    }

    pub fn article_url(self, page_id: u64) -> String {
        format!("https://{}.wikipedia.org/?curid={page_id}", self.code())
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN_LABELS,
            Lang::Te => &TE_LABELS,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed strings the terminal view prints, per language.
pub struct Labels {
    pub symptoms: &'static str,
    pub precautions: &'static str,
    pub more_info: &'static str,
    pub symptoms_unavailable: &'static str,
    pub precautions_unavailable: &'static str,
    pub visit: &'static str,
    pub view_full_article: &'static str,
    pub no_results_for: &'static str,
    pub results_for: &'static str,
    pub powered_by: &'static str,
    pub predict_intro: &'static str,
}

static EN_LABELS: Labels = Labels {
    symptoms: "Symptoms",
    precautions: "Precautions",
    more_info: "More Information",
    symptoms_unavailable: "Symptoms information not available. Please check the More Information tab.",
    precautions_unavailable: "Precautions information not available. Please check the More Information tab.",
    visit: "For more detailed information, please visit:",
    view_full_article: "View full article on Wikipedia",
    no_results_for: "No results found for \"{query}\". Try another search term.",
    results_for: "Results for \"{query}\"",
    powered_by: "Information powered by Wikipedia",
    predict_intro: "Use our interactive tool to predict possible diseases based on your symptoms.",
};

static TE_LABELS: Labels = Labels {
    symptoms: "లక్షణాలు",
    precautions: "జాగ్రత్తలు",
    more_info: "మరింత సమాచారం",
    symptoms_unavailable: "లక్షణాల సమాచారం అందుబాటులో లేదు. దయచేసి మరింత సమాచారం ట్యాబ్‌ను తనిఖీ చేయండి.",
    precautions_unavailable: "జాగ్రత్తల సమాచారం అందుబాటులో లేదు. దయచేసి మరింత సమాచారం ట్యాబ్‌ను తనిఖీ చేయండి.",
    visit: "మరింత వివరణాత్మక సమాచారం కోసం, దయచేసి సందర్శించండి:",
    view_full_article: "వికీపీడియాలో పూర్తి వ్యాసాన్ని చూడండి",
    no_results_for: "\"{query}\" కోసం ఫలితాలు కనుగొనబడలేదు. మరొక శోధన పదాన్ని ప్రయత్నించండి.",
    results_for: "\"{query}\" కోసం ఫలితాలు",
    powered_by: "వికీపీడియా ద్వారా సమాచారం అందించబడింది",
    predict_intro: "మీ లక్షణాల ఆధారంగా సంభావ్య వ్యాధులను అంచనా వేయడానికి మా ఇంటరాక్టివ్ టూల్‌ని ఉపయోగించండి.",
};

impl Labels {
    /// Fills the `{query}` placeholder of a template label.
    pub fn with_query(template: &str, query: &str) -> String {
        template.replace("{query}", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_primary() {
        assert!(Lang::En.is_primary());
        assert!(!Lang::Te.is_primary());
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn default_api_urls_follow_language_code() {
        assert_eq!(Lang::En.default_api_url(), "https://en.wikipedia.org/w/api.php");
        assert_eq!(Lang::Te.default_api_url(), "https://te.wikipedia.org/w/api.php");
    }

    #[test]
    fn article_url_uses_curid() {
        assert_eq!(
            Lang::Te.article_url(1234),
            "https://te.wikipedia.org/?curid=1234"
        );
    }

    #[test]
    fn query_placeholder_is_filled() {
        let text = Labels::with_query(Lang::En.labels().no_results_for, "flu");
        assert_eq!(text, "No results found for \"flu\". Try another search term.");
    }

    #[test]
    fn parses_from_cli_value() {
        assert_eq!(Lang::from_str("te", true).unwrap(), Lang::Te);
        assert_eq!(Lang::from_str("EN", true).unwrap(), Lang::En);
        assert!(Lang::from_str("fr", true).is_err());
    }
}

use futures::future::join_all;
use tracing::info;

use super::Lang;
use super::classify::{SectionCategory, SectionClassifier};
use super::gateway::Gateway;
use super::lang::Labels;
use crate::markdown::{escape_md_emphasis, escape_md_link, sanitize_heading, wiki_html_to_markdown};
use crate::wikipedia::WikiApi;
use crate::wikipedia::types::{ArticleSummary, SearchResult, SectionDescriptor};

/// Sections fetched for the disease view, counted from the top of the article.
pub const MAX_SECTIONS: usize = 5;

#[derive(Debug)]
pub struct DiseaseInfo {
    pub summary: ArticleSummary,
    pub lang: Lang,
    pub sections: Vec<Section>,
    pub article_url: String,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    /// Untrusted markup, possibly empty.
    pub content: String,
    pub categories: Vec<SectionCategory>,
}

impl DiseaseInfo {
    /// First section covering `category`, in document order. Each category
    /// is looked up independently, so one section can fill several.
    pub fn section(&self, category: SectionCategory) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.categories.contains(&category))
    }
}

/// Builds the disease view for one article: summary plus the leading
/// sections with their content. Content fetches run concurrently; the
/// result keeps document order. `None` when the article does not exist.
pub async fn disease_info(
    gateway: &Gateway<impl WikiApi>,
    page_id: u64,
    lang: Lang,
    classifier: &impl SectionClassifier,
) -> Option<DiseaseInfo> {
    let summary = gateway.fetch_summary(page_id, lang).await?;

    let descriptors = gateway.list_sections(page_id, lang).await;
    let fetches = descriptors.into_iter().take(MAX_SECTIONS).map(|d| async move {
        let content = gateway.fetch_section_content(page_id, &d.index, lang).await;
        Section {
            categories: classifier.categories(&d.title),
            title: d.title,
            content: content.content,
        }
    });
    let sections = join_all(fetches).await;

    info!(
        page_id,
        %lang,
        sections = sections.len(),
        classified = sections.iter().filter(|s| !s.categories.is_empty()).count(),
        "disease info assembled"
    );

    Some(DiseaseInfo {
        article_url: lang.article_url(page_id),
        summary,
        lang,
        sections,
    })
}

pub fn format_results(results: &[SearchResult], query: &str, lang: Lang) -> String {
    let labels = lang.labels();
    let query = sanitize_heading(query);

    if results.is_empty() {
        return Labels::with_query(labels.no_results_for, &query);
    }

    let mut output = format!("# {}\n\n", Labels::with_query(labels.results_for, &query));
    for (i, result) in results.iter().enumerate() {
        output.push_str(&format!(
            "{}. **{}** (page {})\n",
            i + 1,
            escape_md_emphasis(&sanitize_heading(&result.title)),
            result.page_id
        ));
        let snippet = sanitize_heading(&wiki_html_to_markdown(&result.snippet));
        if !snippet.is_empty() {
            output.push_str(&format!("   {snippet}...\n"));
        }
    }
    output
}

pub fn format_disease_info(info: &DiseaseInfo) -> String {
    let labels = info.lang.labels();
    let title = sanitize_heading(&info.summary.title);
    let mut output = format!("# {title}\n\n");

    if let Some(ref thumbnail) = info.summary.thumbnail {
        output.push_str(&format!(
            "![{}]({})\n\n",
            escape_md_link(&title),
            escape_md_link(&thumbnail.url)
        ));
    }

    if !info.summary.extract.is_empty() {
        output.push_str(info.summary.extract.trim());
        output.push_str("\n\n");
    }

    format_category(
        info,
        SectionCategory::Symptoms,
        labels.symptoms_unavailable,
        &mut output,
    );
    format_category(
        info,
        SectionCategory::Precautions,
        labels.precautions_unavailable,
        &mut output,
    );

    output.push_str(&format!("## {}\n\n", labels.more_info));
    output.push_str(&format!(
        "{} [{}]({})\n\n",
        labels.visit,
        labels.view_full_article,
        escape_md_link(&info.article_url)
    ));
    output.push_str(&format!("---\n{}\n", labels.powered_by));
    output
}

fn format_category(
    info: &DiseaseInfo,
    category: SectionCategory,
    unavailable: &str,
    out: &mut String,
) {
    out.push_str(&format!("## {}\n\n", category.label(info.lang)));
    let body = info
        .section(category)
        .map(|s| wiki_html_to_markdown(&s.content))
        .filter(|md| !md.is_empty());
    match body {
        Some(md) => out.push_str(&md),
        None => out.push_str(&format!("_{unavailable}_")),
    }
    out.push_str("\n\n");
}

pub fn format_sections(
    sections: &[SectionDescriptor],
    classifier: &impl SectionClassifier,
    lang: Lang,
) -> String {
    let mut output = String::new();
    for section in sections {
        output.push_str(&format!("{}\t{}", section.index, sanitize_heading(&section.title)));
        let labels: Vec<_> = classifier
            .categories(&section.title)
            .into_iter()
            .map(|c| c.label(lang))
            .collect();
        if !labels.is_empty() {
            output.push_str(&format!(" [{}]", labels.join(", ")));
        }
        output.push('\n');
    }
    output
}

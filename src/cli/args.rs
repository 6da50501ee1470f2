use clap::{Args, Parser, Subcommand};

use crate::search::Lang;

#[derive(Parser, Debug)]
#[command(
    name = "manahealth",
    version,
    about = "Bilingual (English/Telugu) health information from Wikipedia"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search Wikipedia for diseases, symptoms, or treatments
    Search(QueryArgs),
    /// Search and show disease information for the top result
    Lookup(QueryArgs),
    /// Show disease information (summary, symptoms, precautions) for a page id
    Show(PageArgs),
    /// List the section headings of an article
    Sections(PageArgs),
    /// Print the address of the external disease prediction tool
    Predict(LangArgs),
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search terms, in English or Telugu
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
    /// Wikipedia edition: "en" (default) or "te"
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,
}

impl QueryArgs {
    /// Joined search terms; `None` when nothing but whitespace was given.
    pub fn term(&self) -> Option<String> {
        let term = self.query.join(" ");
        let term = term.trim();
        (!term.is_empty()).then(|| term.to_string())
    }
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page id on the selected edition (from `search` output)
    pub page_id: u64,
    /// Wikipedia edition the page id belongs to: "en" (default) or "te"
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,
}

#[derive(Args, Debug)]
pub struct LangArgs {
    /// Output language: "en" (default) or "te"
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,
}

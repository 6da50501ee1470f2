use scraper::{Html, Selector};

/// Escape characters that break Markdown link syntax: `[`, `]`, `(`, `)`.
pub(crate) fn escape_md_link(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '[' | ']' | '(' | ')' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replaces newlines with spaces so the text fits on one Markdown line.
pub(crate) fn sanitize_heading(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Escape characters that open Markdown emphasis or code spans: `*`, `_`, `` ` ``.
pub(crate) fn escape_md_emphasis(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Citation markers and `[edit]` links.
const STRIPPED_ELEMENTS: &str = "sup.reference, span.mw-editsection";

/// Converts untrusted Wikipedia markup to Markdown text for terminal output.
/// Citation markers and `[edit]` links are dropped first.
pub(crate) fn wiki_html_to_markdown(html: &str) -> String {
    html2md::rewrite_html(&strip_elements(html, STRIPPED_ELEMENTS), false)
        .trim()
        .to_string()
}

/// Parses `html` as a fragment, detaches every element matching `selector`
/// and serializes what is left.
fn strip_elements(html: &str, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return html.to_string();
    };
    let mut fragment = Html::parse_fragment(html);
    let doomed: Vec<_> = fragment.select(&selector).map(|el| el.id()).collect();
    for id in doomed {
        if let Some(mut node) = fragment.tree.get_mut(id) {
            node.detach();
        }
    }
    fragment.root_element().inner_html()
}

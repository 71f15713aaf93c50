//! Best-effort plain-text extraction from arbitrary article HTML.
//!
//! Scopes to the first `<article>` element, then `<main>`, then the whole
//! document; drops `<script>`/`<style>` blocks; collects paragraph text,
//! falling back to the full text content when a page has no paragraphs.
//! Extraction never fails: unusable input produces an empty string,
//! which the enrichment step records as an extraction failure.

use scraper::{ElementRef, Html, Selector};

/// Length, in characters, of snippets derived from extracted text.
pub const SNIPPET_CHARS: usize = 220;

/// Extract readable body text from raw HTML.
///
/// Returns an empty string when the document contains no usable text.
pub fn extract_main_text(html: &str) -> String {
    let cleaned = strip_scripts_and_styles(html);
    let document = Html::parse_document(&cleaned);
    let Ok(paragraph_selector) = Selector::parse("p") else {
        return String::new();
    };

    let paragraphs: Vec<String> = match scope_element(&document) {
        Some(scope) => scope
            .select(&paragraph_selector)
            .map(element_text)
            .collect(),
        None => document
            .select(&paragraph_selector)
            .map(element_text)
            .collect(),
    };

    let raw = if paragraphs.is_empty() {
        match scope_element(&document) {
            Some(scope) => element_text(scope),
            None => document.root_element().text().collect::<Vec<_>>().join(" "),
        }
    } else {
        paragraphs.join(" ")
    };

    collapse_whitespace(&raw)
}

/// Number of whitespace-delimited tokens in the given text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First [`SNIPPET_CHARS`] characters of the given text.
pub fn snippet_of(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The content root to read from: first `<article>`, else first `<main>`.
fn scope_element(document: &Html) -> Option<ElementRef<'_>> {
    for selector_str in ["article", "main"] {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            return Some(element);
        }
    }
    None
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn strip_scripts_and_styles(html: &str) -> String {
    strip_tag(&strip_tag(html, "script"), "style")
}

/// Remove every instance of a tag and its content, tolerating a missing
/// closing tag. ASCII lower-casing keeps byte offsets aligned with the
/// original string.
fn strip_tag(html: &str, tag: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let mut result = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(offset) = lower[pos..].find(&open) {
        let start = pos + offset;

        // Not this tag if the name continues (e.g. <scripted-widget>).
        let after = start + open.len();
        let at_boundary = lower
            .as_bytes()
            .get(after)
            .is_none_or(|b| matches!(b, b' ' | b'>' | b'/' | b'\n' | b'\r' | b'\t'));
        if !at_boundary {
            result.push_str(&html[pos..after]);
            pos = after;
            continue;
        }

        result.push_str(&html[pos..start]);
        pos = match lower[start..].find(&close) {
            Some(end) => start + end + close.len(),
            None => match lower[start..].find('>') {
                Some(end) => start + end + 1,
                None => html.len(),
            },
        };
    }
    result.push_str(&html[pos..]);
    result
}

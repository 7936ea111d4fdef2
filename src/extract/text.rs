//! Text extraction, whitespace normalization, and page metadata
//!
//! Extraction runs in two phases over the parsed tree. First a pruned walk
//! skips every subtree matched by the [`NoiseRules`], concatenating the
//! surviving text nodes and collecting headings along the way. Then the
//! raw concatenation goes through a two-stage whitespace policy that keeps
//! words separated where a naive single-pass collapse would merge them.

use crate::extract::noise::NoiseRules;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cleaned text plus metadata extracted from one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextExtraction {
    /// Noise-free, whitespace-normalized page text
    #[serde(rename = "text")]
    pub cleaned_text: String,
    /// Page title resolved through the fallback chain
    pub title: String,
    /// Meta description resolved through the fallback chain
    pub meta_description: String,
    /// Heading texts keyed by level (`h1` through `h6`), document order
    pub headings: BTreeMap<String, Vec<String>>,
    /// Whitespace-delimited token count of the cleaned text
    pub word_count: usize,
    /// Character count of the cleaned text
    pub character_count: usize,
}

/// Extracts cleaned text and metadata from a parsed document
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `rules` - Noise rules deciding which subtrees are dropped
///
/// # Returns
///
/// A [`TextExtraction`] whose counts are computed from the final cleaned
/// text, with all six heading levels present even when empty.
pub fn extract_text_content(document: &Html, rules: &NoiseRules) -> TextExtraction {
    let mut raw_text = String::new();
    let mut headings = empty_headings();
    collect_content(document.tree.root(), rules, &mut raw_text, &mut headings);

    let cleaned_text = clean_text(&raw_text);
    let title = extract_title(document, &headings);
    let meta_description = extract_meta_description(document);

    let word_count = cleaned_text.split_whitespace().count();
    let character_count = cleaned_text.chars().count();

    TextExtraction {
        cleaned_text,
        title,
        meta_description,
        headings,
        word_count,
        character_count,
    }
}

fn empty_headings() -> BTreeMap<String, Vec<String>> {
    (1..=6).map(|level| (format!("h{}", level), Vec::new())).collect()
}

fn heading_key(tag: &str) -> Option<&'static str> {
    match tag {
        "h1" => Some("h1"),
        "h2" => Some("h2"),
        "h3" => Some("h3"),
        "h4" => Some("h4"),
        "h5" => Some("h5"),
        "h6" => Some("h6"),
        _ => None,
    }
}

/// Walks the tree depth-first, skipping noise subtrees
///
/// Text nodes are concatenated exactly as they appear; headings are
/// recorded from the same pruned view, so a heading inside removed chrome
/// never leaks into the metadata.
fn collect_content(
    node: NodeRef<'_, Node>,
    rules: &NoiseRules,
    text: &mut String,
    headings: &mut BTreeMap<String, Vec<String>>,
) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                if rules.matches(element) {
                    continue;
                }

                if let Some(key) = heading_key(element.name()) {
                    let mut heading_text = String::new();
                    collect_text(child, rules, &mut heading_text);
                    text.push_str(&heading_text);

                    if let Some(entries) = headings.get_mut(key) {
                        entries.push(heading_text.trim().to_string());
                    }
                } else {
                    collect_content(child, rules, text, headings);
                }
            }
            Node::Text(t) => text.push_str(t),
            _ => {}
        }
    }
}

/// Concatenates surviving text nodes under one node, without heading capture
fn collect_text(node: NodeRef<'_, Node>, rules: &NoiseRules, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                if !rules.matches(element) {
                    collect_text(child, rules, out);
                }
            }
            Node::Text(t) => out.push_str(t),
            _ => {}
        }
    }
}

/// Normalizes raw concatenated text into single-spaced prose
///
/// # Policy
///
/// 1. Split on line boundaries and strip each line
/// 2. Within each line, split on literal two-space runs and strip each
///    fragment
/// 3. Join the non-empty fragments with single spaces
/// 4. Collapse any remaining whitespace run to one space and trim
///
/// The staged splitting keeps words separated in cases where a single
/// blanket collapse over the raw text would merge them. The function is
/// idempotent: cleaning already-cleaned text is a no-op.
pub fn clean_text(raw: &str) -> String {
    let mut fragments: Vec<&str> = Vec::new();
    for line in raw.lines() {
        for fragment in line.trim().split("  ") {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }
    }

    let joined = fragments.join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves the page title through the fallback chain
///
/// `<title>` text, else `og:title` meta content, else the first `<h1>`
/// from the pruned heading collection, else empty. A source only counts
/// when it yields a non-empty value.
fn extract_title(document: &Html, headings: &BTreeMap<String, Vec<String>>) -> String {
    if let Some(title) = select_text(document, "title") {
        return title;
    }

    if let Some(og_title) = select_meta_content(document, r#"meta[property="og:title"]"#) {
        return og_title;
    }

    headings
        .get("h1")
        .and_then(|h1s| h1s.iter().find(|h| !h.is_empty()))
        .cloned()
        .unwrap_or_default()
}

/// Resolves the meta description through the fallback chain
///
/// `meta[name=description]` content, else `og:description` content, else
/// empty.
fn extract_meta_description(document: &Html) -> String {
    if let Some(description) = select_meta_content(document, r#"meta[name="description"]"#) {
        return description;
    }

    select_meta_content(document, r#"meta[property="og:description"]"#).unwrap_or_default()
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn select_meta_content(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
}

/// A sentence-bounded summary of cleaned text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The first sentences of the text, period-terminated
    pub summary: String,
    /// Total sentence count of the full text
    pub total_sentences: usize,
}

/// Builds a summary from the first sentences of cleaned text
///
/// Sentences are split on runs of `.`, `!`, and `?`; empty fragments are
/// discarded. The summary joins the first `max_sentences` with `". "` and
/// ends with a period when non-empty.
pub fn summarize(text: &str, max_sentences: usize) -> Summary {
    let sentences: Vec<&str> = text
        .split(|c| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut summary = sentences
        .iter()
        .take(max_sentences)
        .copied()
        .collect::<Vec<_>>()
        .join(". ");

    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }

    Summary {
        summary,
        total_sentences: sentences.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> TextExtraction {
        let document = Html::parse_document(html);
        extract_text_content(&document, &NoiseRules::default())
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  hello   \n\t world  "), "hello world");
    }

    #[test]
    fn test_clean_text_two_space_splitting() {
        assert_eq!(clean_text("alpha  beta  gamma"), "alpha beta gamma");
    }

    #[test]
    fn test_clean_text_line_boundaries() {
        assert_eq!(clean_text("first line\nsecond line"), "first line second line");
    }

    #[test]
    fn test_clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\n  \t "), "");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let once = clean_text("  a\nb  c   d\t\te ");
        let twice = clean_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_word_count_matches_cleaned_text() {
        let result = extract("<html><body><p>one two three</p></body></html>");
        assert_eq!(result.word_count, 3);
        assert_eq!(
            result.word_count,
            result.cleaned_text.split_whitespace().count()
        );
    }

    #[test]
    fn test_counts_zero_for_empty_document() {
        let result = extract("<html><body></body></html>");
        assert_eq!(result.cleaned_text, "");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.character_count, 0);
    }

    #[test]
    fn test_character_count_is_chars_not_bytes() {
        let result = extract("<html><body><p>héllo</p></body></html>");
        assert_eq!(result.character_count, 5);
    }

    #[test]
    fn test_script_and_style_removed() {
        let result = extract(
            "<html><body><p>keep</p><script>drop()</script><style>.x{}</style></body></html>",
        );
        assert_eq!(result.cleaned_text, "keep");
    }

    #[test]
    fn test_structural_chrome_removed() {
        let result = extract(
            "<html><body><nav>menu</nav><p>article</p><footer>legal</footer></body></html>",
        );
        assert_eq!(result.cleaned_text, "article");
    }

    #[test]
    fn test_class_based_noise_removed() {
        let result = extract(
            r#"<html><body><div class="sidebar">ads</div><p>content</p></body></html>"#,
        );
        assert_eq!(result.cleaned_text, "content");
    }

    #[test]
    fn test_title_from_title_tag() {
        let result = extract(
            "<html><head><title>Example</title></head><body><h1>A</h1><h1>B</h1></body></html>",
        );
        assert_eq!(result.title, "Example");
        assert_eq!(result.headings["h1"], vec!["A", "B"]);
    }

    #[test]
    fn test_title_falls_back_to_og_title() {
        let result = extract(
            r#"<html><head><meta property="og:title" content="Fallback"></head><body></body></html>"#,
        );
        assert_eq!(result.title, "Fallback");
    }

    #[test]
    fn test_title_falls_back_to_first_h1() {
        let result = extract("<html><body><h1>Heading Title</h1></body></html>");
        assert_eq!(result.title, "Heading Title");
    }

    #[test]
    fn test_title_empty_when_no_source() {
        let result = extract("<html><body><p>text</p></body></html>");
        assert_eq!(result.title, "");
    }

    #[test]
    fn test_meta_description_preferred_over_og() {
        let result = extract(
            r#"<html><head>
                <meta name="description" content="Standard">
                <meta property="og:description" content="OpenGraph">
            </head><body></body></html>"#,
        );
        assert_eq!(result.meta_description, "Standard");
    }

    #[test]
    fn test_meta_description_og_fallback() {
        let result = extract(
            r#"<html><head><meta property="og:description" content="OpenGraph"></head><body></body></html>"#,
        );
        assert_eq!(result.meta_description, "OpenGraph");
    }

    #[test]
    fn test_all_heading_levels_present() {
        let result = extract("<html><body><h2>Section</h2></body></html>");
        assert_eq!(result.headings.len(), 6);
        assert_eq!(result.headings["h2"], vec!["Section"]);
        assert!(result.headings["h5"].is_empty());
    }

    #[test]
    fn test_headings_keep_document_order() {
        let result = extract("<html><body><h2>First</h2><p>x</p><h2>Second</h2></body></html>");
        assert_eq!(result.headings["h2"], vec!["First", "Second"]);
    }

    #[test]
    fn test_heading_inside_nav_excluded() {
        let result = extract(
            "<html><body><nav><h1>Site Menu</h1></nav><h1>Real Title</h1></body></html>",
        );
        assert_eq!(result.headings["h1"], vec!["Real Title"]);
        assert_eq!(result.title, "Real Title");
    }

    #[test]
    fn test_heading_text_included_in_cleaned_text() {
        let result = extract("<html><body><h1>Top</h1> <p>body</p></body></html>");
        assert_eq!(result.cleaned_text, "Top body");
    }

    #[test]
    fn test_summarize_takes_first_sentences() {
        let summary = summarize("One. Two! Three? Four. Five.", 3);
        assert_eq!(summary.summary, "One. Two. Three.");
        assert_eq!(summary.total_sentences, 5);
    }

    #[test]
    fn test_summarize_short_text() {
        let summary = summarize("Only sentence", 3);
        assert_eq!(summary.summary, "Only sentence.");
        assert_eq!(summary.total_sentences, 1);
    }

    #[test]
    fn test_summarize_empty_text() {
        let summary = summarize("", 3);
        assert_eq!(summary.summary, "");
        assert_eq!(summary.total_sentences, 0);
    }
}

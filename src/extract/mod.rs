//! Document parsing and the two extractors
//!
//! This module contains the shared HTML parser plus the two mutually
//! exclusive extraction passes over its output:
//! - Link extraction: every anchor resolved, classified, and numbered
//! - Text extraction: noise removal, whitespace normalization, metadata

mod links;
mod noise;
mod text;

pub use links::{
    classify_href, external_links, extract_links, filter_links_by_type, is_relative_href, Link,
    LinkType,
};
pub use noise::{NoiseRules, NOISE_ATTRIBUTE_SUBSTRINGS, NOISE_TAGS};
pub use text::{clean_text, extract_text_content, summarize, Summary, TextExtraction};

use scraper::Html;

/// Parses raw page markup into a traversable document
///
/// Parsing never fails; html5ever recovers from malformed markup the same
/// way browsers do, so extraction always has a tree to walk.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_tolerates_malformed_markup() {
        let document = parse_document("<html><body><p>unclosed<div>nested");
        let links = extract_links(&document, "https://example.com/");
        assert!(links.is_empty());
    }

    #[test]
    fn test_parse_document_empty_input() {
        let document = parse_document("");
        let result = extract_text_content(&document, &NoiseRules::default());
        assert_eq!(result.cleaned_text, "");
    }
}

//! Declarative noise-removal rules for text extraction
//!
//! A noise element is any document node excluded from text extraction:
//! scripts, styles, and structural chrome such as navigation bars and
//! footers. The rules are plain data (tag names plus attribute-substring
//! predicates) so the matching policy can be tested without a document
//! and tuned without touching the traversal.

use scraper::node::Element;

/// Tag names whose subtrees never contribute text
pub const NOISE_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

/// Substrings that mark an element as chrome when found in `class` or `id`
///
/// Matching is a case-sensitive substring test against the raw attribute
/// value, so `class="main-navigation"` matches `nav`.
pub const NOISE_ATTRIBUTE_SUBSTRINGS: &[&str] = &["nav", "menu", "sidebar", "footer", "header"];

/// A set of predicates deciding which elements are noise
#[derive(Debug, Clone)]
pub struct NoiseRules {
    tags: Vec<String>,
    attribute_substrings: Vec<(String, String)>,
}

impl NoiseRules {
    /// Builds a rule set from explicit tag names and (attribute, substring)
    /// predicates
    pub fn new(tags: Vec<String>, attribute_substrings: Vec<(String, String)>) -> Self {
        Self {
            tags,
            attribute_substrings,
        }
    }

    /// Checks whether an element matches any rule
    ///
    /// A match means the element and its entire subtree are dropped from
    /// text extraction.
    pub fn matches(&self, element: &Element) -> bool {
        let name = element.name();
        if self.tags.iter().any(|t| t == name) {
            return true;
        }

        self.attribute_substrings.iter().any(|(attr, needle)| {
            element
                .attr(attr)
                .map(|value| value.contains(needle.as_str()))
                .unwrap_or(false)
        })
    }
}

impl Default for NoiseRules {
    /// The standard rule set: script/style tags, structural chrome tags,
    /// and `class`/`id` values containing any chrome substring
    fn default() -> Self {
        let tags = NOISE_TAGS.iter().map(|t| t.to_string()).collect();

        let mut attribute_substrings = Vec::new();
        for attr in ["class", "id"] {
            for needle in NOISE_ATTRIBUTE_SUBSTRINGS {
                attribute_substrings.push((attr.to_string(), needle.to_string()));
            }
        }

        Self::new(tags, attribute_substrings)
    }
}

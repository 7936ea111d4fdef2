//! Hyperlink extraction and classification
//!
//! Walks a parsed document in order and emits one [`Link`] per
//! anchor-with-href, resolving relative hrefs against the page URL and
//! classifying each link by scheme and target. Extraction is best-effort:
//! a malformed href still produces a link with whatever fields could be
//! derived, never an error.

use crate::url::is_external_url;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

/// File extensions that classify a link as a document download
const FILE_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".xls", ".xlsx", ".zip", ".rar"];

/// Href prefixes that make a link absolute rather than relative
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "tel:", "ftp://"];

/// Classification of a hyperlink by scheme and target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Email,
    Phone,
    Ftp,
    Anchor,
    Javascript,
    File,
    Web,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LinkType::Email => "email",
            LinkType::Phone => "phone",
            LinkType::Ftp => "ftp",
            LinkType::Anchor => "anchor",
            LinkType::Javascript => "javascript",
            LinkType::File => "file",
            LinkType::Web => "web",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for LinkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(LinkType::Email),
            "phone" => Ok(LinkType::Phone),
            "ftp" => Ok(LinkType::Ftp),
            "anchor" => Ok(LinkType::Anchor),
            "javascript" => Ok(LinkType::Javascript),
            "file" => Ok(LinkType::File),
            "web" => Ok(LinkType::Web),
            other => Err(format!("unknown link type: {}", other)),
        }
    }
}

/// A single extracted hyperlink
///
/// Field names on the wire match the response contract consumed by
/// downstream indexers: the resolved URL serializes as `url`, the anchor
/// text as `text`, the title attribute as `title`, and the space-joined
/// class list as `class`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// 1-based position of the link in document order
    pub id: usize,
    /// Href resolved against the page URL
    #[serde(rename = "url")]
    pub absolute_url: String,
    /// The href attribute exactly as written
    pub original_href: String,
    /// Anchor text, whitespace-trimmed
    #[serde(rename = "text")]
    pub anchor_text: String,
    /// Title attribute, empty when absent
    #[serde(rename = "title")]
    pub title_attr: String,
    /// Space-joined class list, empty when absent
    #[serde(rename = "class")]
    pub css_classes: String,
    pub is_relative: bool,
    pub is_external: bool,
    pub link_type: LinkType,
}

/// Extracts every anchor-borne hyperlink from a document
///
/// # Guarantees
///
/// - `id` values are contiguous starting at 1 in document order
/// - No anchor with an href is dropped; unresolvable hrefs fall back to
///   the raw href for `url`
/// - Host-comparison failures yield `is_external = false`, never an error
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `base_url` - The page URL used to resolve relative hrefs
///
/// # Returns
///
/// All links in document order
pub fn extract_links(document: &Html, base_url: &str) -> Vec<Link> {
    let mut links = Vec::new();

    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };
    let base = Url::parse(base_url).ok();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let absolute_url = resolve_href(base.as_ref(), href);
        let anchor_text = element.text().collect::<String>().trim().to_string();
        let title_attr = element.value().attr("title").unwrap_or("").to_string();
        let css_classes = element
            .value()
            .classes()
            .collect::<Vec<_>>()
            .join(" ");

        links.push(Link {
            id: links.len() + 1,
            is_relative: is_relative_href(href),
            is_external: is_external_url(&absolute_url, base_url),
            link_type: classify_href(href),
            absolute_url,
            original_href: href.to_string(),
            anchor_text,
            title_attr,
            css_classes,
        });
    }

    links
}

/// Resolves an href against the base URL, falling back to the raw href
///
/// Fragment-only, path-relative, and protocol-relative hrefs all resolve
/// against the base. When the base failed to parse or the join fails, the
/// raw href is kept so the link still appears in the output.
fn resolve_href(base: Option<&Url>, href: &str) -> String {
    if let Some(base) = base {
        if let Ok(resolved) = base.join(href) {
            return resolved.to_string();
        }
    }
    href.to_string()
}

/// Checks whether an href is relative to the page
///
/// Relative means the href carries none of the absolute prefixes
/// (`http://`, `https://`, `mailto:`, `tel:`, `ftp://`).
pub fn is_relative_href(href: &str) -> bool {
    !ABSOLUTE_PREFIXES.iter().any(|p| href.starts_with(p))
}

/// Classifies an href by scheme and target
///
/// Precedence order, first match wins: `mailto:` / `tel:` / `ftp:` scheme,
/// fragment-only, `javascript:`, document file extension, then plain web.
/// The precedence matters: `mailto:#fragment` is email, not anchor.
pub fn classify_href(href: &str) -> LinkType {
    if href.starts_with("mailto:") {
        LinkType::Email
    } else if href.starts_with("tel:") {
        LinkType::Phone
    } else if href.starts_with("ftp:") {
        LinkType::Ftp
    } else if href.starts_with('#') {
        LinkType::Anchor
    } else if href.starts_with("javascript:") {
        LinkType::Javascript
    } else if has_file_extension(href) {
        LinkType::File
    } else {
        LinkType::Web
    }
}

fn has_file_extension(href: &str) -> bool {
    let lower = href.to_lowercase();
    FILE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Keeps only links of the given type, preserving document order and ids
pub fn filter_links_by_type(links: Vec<Link>, link_type: LinkType) -> Vec<Link> {
    links
        .into_iter()
        .filter(|link| link.link_type == link_type)
        .collect()
}

/// Keeps only links pointing outside the page's host
pub fn external_links(links: Vec<Link>) -> Vec<Link> {
    links.into_iter().filter(|link| link.is_external).collect()
}

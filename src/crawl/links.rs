// src/crawl/links.rs
// =============================================================================
// This module extracts the links the crawler should follow from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever (Mozilla's HTML parser)
// - Never fails: broken markup is repaired the way a browser would
//
// We also use the `url` crate to resolve relative links to absolute URLs.
//
// Rust concepts:
// - Iterators: walking the DOM tree lazily
// - Option<T>: for hrefs that cannot be resolved
// =============================================================================

use scraper::{ElementRef, Html};
use url::Url;

use super::normalize::same_host;

// Extracts every same-host link from an HTML page, in document order
//
// Parameters:
//   html: the page body
//   page_url: the URL the page was reached through (used to resolve links)
//
// Returns: absolute URLs on the same host as page_url
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='https://other.com'>x</a>"
//   page_url = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    // descendants() is a depth-first pre-order walk, which is document order
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
        // html5ever keeps only the first of duplicated attributes,
        // so this is the first href on the element
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| page_url.join(href).ok())
        .filter(|link| same_host(page_url, link))
        .collect()
}

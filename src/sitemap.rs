// src/sitemap.rs
// =============================================================================
// Renders the crawl result as a sitemap.xml document.
//
// Output shape (sitemaps.org 0.9, 2-space indentation, discovery order):
//
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com</loc>
//     </url>
//   </urlset>
//
// The document is described with serde structs and written by quick-xml.
// An empty sitemap is written as an open/close pair, not a self-closing tag.
// =============================================================================

use anyhow::{Context, Result};
use quick_xml::se::Serializer;
use serde::Serialize;
use std::path::Path;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// The struct name is not used: the root tag comes from `rename`
#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    // "@" makes quick-xml write this field as an attribute
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    url: Vec<UrlEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct UrlEntry<'a> {
    loc: &'a str,
}

/// Renders `urls` as a sitemap document
pub fn render(urls: &[String]) -> Result<String> {
    // quick-xml would write `<urlset .../>` for an empty list
    if urls.is_empty() {
        return Ok(format!(r#"<urlset xmlns="{}"></urlset>"#, SITEMAP_NAMESPACE));
    }

    let urlset = UrlSet {
        xmlns: SITEMAP_NAMESPACE,
        url: urls.iter().map(|loc| UrlEntry { loc }).collect(),
    };

    let mut xml = String::new();
    let mut serializer = Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    urlset
        .serialize(serializer)
        .context("Failed to encode sitemap")?;

    Ok(xml)
}

/// Renders `urls` and writes them to `path`, replacing any existing file
pub fn write_sitemap(path: &Path, urls: &[String]) -> Result<()> {
    let xml = render(urls)?;
    std::fs::write(path, xml)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(())
}

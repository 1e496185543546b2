// src/crawl/normalize.rs
// =============================================================================
// URL identity for the crawler.
//
// Two links that point at "the same page" should only be crawled once.
// We decide that by turning every URL into a canonical key:
//
//   scheme://host[:port]/path   (one trailing '/' removed)
//
// URLs with a query string are ignored completely. Parameterized URLs
// (pagination, sorting, tracking ids) can produce an endless number of pages.
// The fragment (#section) is never part of the key.
// =============================================================================

use url::Url;

// Returns the canonical key for a URL, or None if the URL must not be crawled
//
// Examples:
//   https://ex.com/        -> Some("https://ex.com")
//   https://ex.com/a/      -> Some("https://ex.com/a")
//   https://ex.com/a#top   -> Some("https://ex.com/a")
//   https://ex.com/a?x=1   -> None
pub fn normalize(url: &Url) -> Option<String> {
    // `https://ex.com/a?` has an empty query, which is not a query string
    if url.query().is_some_and(|q| !q.is_empty()) {
        return None;
    }

    let mut key = format!("{}://{}{}", url.scheme(), host_of(url), url.path());

    if key.ends_with('/') {
        key.pop();
    }

    Some(key)
}

// Same-origin rule: the link must live on exactly the same host as the page
// that contained it. The scheme is not compared and subdomains do not count.
pub fn same_host(page: &Url, link: &Url) -> bool {
    match (page.host_str(), link.host_str()) {
        (Some(a), Some(b)) => a == b && page.port() == link.port(),
        _ => false,
    }
}

// Host with its explicit port, e.g. "127.0.0.1:8080"
fn host_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

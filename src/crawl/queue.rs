// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself: a depth-first walk of the site.
//
// How it works:
// 1. Push the start URL on a stack (the work-list)
// 2. Pop a URL, compute its canonical key
// 3. Skip it if the key is empty or was already visited
// 4. Otherwise record it, fetch the page and extract same-host links
// 5. Push the links in reverse so the first link on the page is popped next
// 6. Repeat until the stack is empty
//
// The visited check in step 3 is the only thing that stops the crawl, and it
// is enough: every canonical key is recorded at most once, so a finite site
// (even one full of cycles) always finishes.
//
// Rust concepts:
// - HashSet: To track visited keys (O(1) lookup)
// - Vec as a stack: push()/pop() give last-in-first-out order
// - Url: For resolving links and comparing hosts
// =============================================================================

use std::collections::HashSet;
use url::Url;

use super::fetch::Fetcher;
use super::links::extract_links;
use super::normalize::normalize;
use crate::diagnostics::Diagnostics;

// Everything one crawl run mutates. It is created by crawl_site(), grows
// while the crawl runs, and is turned into a CrawlReport at the end.
#[derive(Debug, Default)]
struct CrawlContext {
    // Canonical keys seen so far. Never shrinks.
    visited: HashSet<String>,
    // Canonical keys in the order they were discovered
    pages: Vec<String>,
}

impl CrawlContext {
    // Records a key. Returns false if it had already been seen.
    fn visit(&mut self, key: &str) -> bool {
        if !self.visited.insert(key.to_string()) {
            return false;
        }
        self.pages.push(key.to_string());
        true
    }
}

/// Result of a finished crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Canonical URLs in discovery order (depth-first pre-order)
    pub pages: Vec<String>,
}

// Crawls one website with a fetcher and a place to send progress messages
pub struct Crawler<'a> {
    fetcher: Fetcher,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Crawler<'a> {
    pub fn new(fetcher: Fetcher, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            fetcher,
            diagnostics,
        }
    }

    // Crawls a website starting from `base`, then from each extra URL
    //
    // Parameters:
    //   base: the start page; its host is where the crawl stays
    //   extra_urls: more start points, resolved relative to `base`
    //
    // Returns: every discovered page, in discovery order
    //
    // Extra URLs that cannot be resolved are reported and skipped. Pages that
    // fail to load are still listed, they just contribute no links.
    pub async fn crawl_site(&self, base: &Url, extra_urls: &[String]) -> CrawlReport {
        let mut ctx = CrawlContext::default();

        self.crawl_from(base.clone(), &mut ctx).await;

        for extra in extra_urls {
            match base.join(extra) {
                Ok(url) => self.crawl_from(url, &mut ctx).await,
                // Reported even without --verbose: the user asked for this URL
                Err(e) => log::warn!("Invalid URL added via flag: {} ({})", extra, e),
            }
        }

        CrawlReport { pages: ctx.pages }
    }

    // Depth-first walk from one start URL, sharing `ctx` with earlier walks
    async fn crawl_from(&self, start: Url, ctx: &mut CrawlContext) {
        // The flag tells whether the URL was found on a page or is a start URL
        let mut stack = vec![(start, false)];

        while let Some((url, found_on_page)) = stack.pop() {
            // Query strings are out of scope, and each page is crawled once
            let key = match normalize(&url) {
                Some(key) => key,
                None => continue,
            };
            if !ctx.visit(&key) {
                continue;
            }

            if found_on_page {
                self.diagnostics.log(&format!("Found link: {}", key));
            }
            self.diagnostics.log(&format!("Crawling: {}", key));

            // The page is already recorded, so a failure only ends this branch
            let html = match self.fetcher.fetch_html(&key).await {
                Ok(html) => html,
                Err(e) => {
                    self.diagnostics.log(&format!("Skipping {}: {}", key, e));
                    continue;
                }
            };

            // Links resolve against the URL we arrived through, not the key
            let links = extract_links(&html, &url);
            log::debug!("{} links on {}", links.len(), key);

            // Already-visited links would only be skipped again on pop
            for link in links.into_iter().rev() {
                if let Some(found) = normalize(&link) {
                    if !ctx.visited.contains(&found) {
                        stack.push((link, true));
                    }
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a stack instead of recursion?
//    - A recursive async fn needs boxing, and deep sites could overflow
//    - Popping from the end of a Vec gives the same order as recursion
//      as long as each page's links are pushed in reverse
//
// 2. Why check `visited` on pop and not only on push?
//    - A link can be pushed twice before either copy is crawled
//      (page A links to B and C, and B also links to C)
//    - The check on pop is what guarantees each page is crawled once
//
// 3. Why fetch the key and not the original URL?
//    - The key is what ends up in the sitemap; fetching it means the
//      sitemap only lists URLs we actually requested
// -----------------------------------------------------------------------------

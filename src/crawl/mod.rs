// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - normalize: canonical keys for URLs, and the same-host rule
// - links: finds the links on an HTML page
// - fetch: downloads pages over HTTP
// - queue: the depth-first crawl that ties them together
//
// Features:
// - Depth-first crawling starting from a URL
// - Same-host restriction (doesn't crawl external sites)
// - URLs with query strings are skipped
// - No depth limit: the visited set alone ends the crawl
// =============================================================================

mod fetch;
mod links;
mod normalize;
mod queue;

// Re-export the public crawling API
pub use fetch::Fetcher;
pub use queue::Crawler;

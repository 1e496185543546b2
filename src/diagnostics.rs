// src/diagnostics.rs
// =============================================================================
// Progress messages from the crawler ("Crawling: ...", "Found link: ...").
//
// Instead of a global "verbose" flag, the crawler is handed something that
// implements `Diagnostics`. The CLI picks `Verbose` when --verbose is set and
// `Silent` otherwise. Messages never change what gets crawled.
// =============================================================================

pub trait Diagnostics {
    fn log(&self, message: &str);
}

/// Drops every message
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn log(&self, _message: &str) {}
}

/// Forwards messages to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct Verbose;

impl Diagnostics for Verbose {
    fn log(&self, message: &str) {
        log::info!("{}", message);
    }
}

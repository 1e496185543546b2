// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// a Rust struct and attributes (the #[...] things).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// All the options of one sitemap run
//
// `domain` is optional at the parser level so that a missing domain prints
// our own usage hint (see main.rs) instead of clap's error.
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-crawler",
    version,
    about = "Crawl a website and write a sitemap.xml of its pages",
    long_about = "sitemap-crawler follows every link on a website that stays on the same host, \
                  skips URLs with query strings, and writes the pages it found to sitemap.xml."
)]
pub struct Cli {
    /// The domain to generate a sitemap for (e.g., https://example.com)
    #[arg(long)]
    pub domain: Option<String>,

    /// Additional URL to include in the sitemap (can be repeated)
    ///
    /// Relative URLs are resolved against --domain.
    #[arg(long = "add-url", value_name = "URL")]
    pub add_urls: Vec<String>,

    /// Print every page as it is crawled
    #[arg(long)]
    pub verbose: bool,

    /// Where to write the sitemap
    #[arg(long, default_value = "sitemap.xml")]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Also print the discovered URLs as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sitemap-crawler", "--domain", "https://example.com"]);
        assert_eq!(cli.domain.as_deref(), Some("https://example.com"));
        assert!(cli.add_urls.is_empty());
        assert!(!cli.verbose);
        assert!(!cli.json);
        assert_eq!(cli.output, PathBuf::from("sitemap.xml"));
        assert_eq!(cli.timeout, 10);
    }

    #[test]
    fn test_repeated_add_url() {
        let cli = Cli::parse_from([
            "sitemap-crawler",
            "--domain",
            "https://example.com",
            "--add-url",
            "/hidden",
            "--add-url",
            "https://example.com/other",
            "--verbose",
        ]);
        assert_eq!(cli.add_urls, vec!["/hidden", "https://example.com/other"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_domain_is_optional() {
        let cli = Cli::parse_from(["sitemap-crawler"]);
        assert!(cli.domain.is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (--verbose turns on progress messages)
// 3. Crawl the website
// 4. Write sitemap.xml
// 5. Exit with proper code (0 = success, 1 = sitemap not written, 2 = bad input)
// =============================================================================

mod cli;
mod crawl;
mod diagnostics;
mod sitemap;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use cli::Cli;
use crawl::{Crawler, Fetcher};
use diagnostics::{Diagnostics, Silent, Verbose};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected errors (e.g. the HTTP client could not be built)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(cli).await
}

// Why the --domain value cannot be crawled
#[derive(Debug, Error)]
enum DomainError {
    #[error("Please provide a domain using the --domain flag")]
    Missing,

    #[error("Invalid domain: {0}")]
    Invalid(#[from] url::ParseError),
}

// Turns the --domain value into the crawl's base URL
//
// Examples:
//   None / Some("")            -> Missing
//   Some("example.com")        -> Invalid (no scheme)
//   Some("https://example.com") -> Ok
fn parse_domain(domain: Option<&str>) -> Result<Url, DomainError> {
    match domain {
        Some(domain) if !domain.is_empty() => Ok(Url::parse(domain)?),
        _ => Err(DomainError::Missing),
    }
}

// Crawls and writes the sitemap, returning the process exit code
async fn execute(cli: Cli) -> Result<i32> {
    // Without a valid domain there is nothing to crawl and nothing is written
    let base = match parse_domain(cli.domain.as_deref()) {
        Ok(url) => url,
        Err(e @ DomainError::Missing) => {
            println!("{}", e);
            println!("{}", Cli::command().render_usage());
            return Ok(2);
        }
        Err(e) => {
            println!("{}", e);
            return Ok(2);
        }
    };

    let fetcher = Fetcher::new(Duration::from_secs(cli.timeout))?;
    let diagnostics: &dyn Diagnostics = if cli.verbose { &Verbose } else { &Silent };

    let report = Crawler::new(fetcher, diagnostics)
        .crawl_site(&base, &cli.add_urls)
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.pages)?);
    }

    // The crawl result is lost if this fails; there is no partial write
    if let Err(e) = sitemap::write_sitemap(&cli.output, &report.pages) {
        log::error!("{:#}", e);
        return Ok(1);
    }

    diagnostics.log(&format!(
        "Sitemap generated with {} URLs at {}",
        report.pages.len(),
        cli.output.display()
    ));

    Ok(0)
}

// Logs go to stderr so --json output on stdout stays machine-readable.
// RUST_LOG overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("sitemap-crawler").chain(args.iter().copied()))
    }

    fn output_arg(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_parse_domain_missing() {
        assert!(matches!(parse_domain(None), Err(DomainError::Missing)));
        assert!(matches!(parse_domain(Some("")), Err(DomainError::Missing)));
    }

    #[test]
    fn test_parse_domain_without_scheme_is_invalid() {
        let err = parse_domain(Some("example.com")).unwrap_err();
        assert!(matches!(err, DomainError::Invalid(_)));
        assert!(err.to_string().starts_with("Invalid domain:"));
    }

    #[test]
    fn test_parse_domain_valid() {
        let url = parse_domain(Some("https://example.com")).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[tokio::test]
    async fn test_missing_domain_exits_2_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");

        let code = execute(cli(&["--output", &output_arg(&output)])).await.unwrap();
        assert_eq!(code, 2);
        assert!(!output.exists());

        let code = execute(cli(&["--domain", "", "--output", &output_arg(&output)]))
            .await
            .unwrap();
        assert_eq!(code, 2);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_invalid_domain_exits_2_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");

        let code = execute(cli(&["--domain", "example.com", "--output", &output_arg(&output)]))
            .await
            .unwrap();
        assert_eq!(code, 2);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_successful_run_writes_sitemap() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(r#"<a href="/a">a</a>"#, "text/html"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/a"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("", "text/html"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        let root = server.uri();

        let code = execute(cli(&["--domain", &root, "--output", &output_arg(&output)]))
            .await
            .unwrap();
        assert_eq!(code, 0);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains(&format!("<loc>{}</loc>", root)));
        assert!(written.contains(&format!("<loc>{}/a</loc>", root)));
    }

    #[tokio::test]
    async fn test_unwritable_output_exits_1() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing-dir").join("sitemap.xml");

        let code = execute(cli(&["--domain", &server.uri(), "--output", &output_arg(&output)]))
            .await
            .unwrap();
        assert_eq!(code, 1);
    }
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool has a single command, so there are no subcommands: every option
// lives directly on the `Cli` struct. The flags mirror the output modes:
//   (none)      -> summary table of repositories
//   --verbose   -> one detail table per repository (PRs and issues)
//   --json      -> extracted contributions as JSON
//   --query     -> the raw GraphQL response, no extraction at all
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Value parsers: Validate arguments before our code ever sees them
// =============================================================================

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use url::Url;

use crate::config::{self, DEFAULT_ENDPOINT, MAX_PAGE_SIZE};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-contributions",
    version,
    about = "List the third-party GitHub repositories a user has contributed to",
    long_about = "gh-contributions asks the GitHub GraphQL API which repositories a user has \
                  contributed to (excluding their own) and shows the pull requests and issues \
                  they authored there. The API token is read from the GITHUB_TOKEN environment \
                  variable."
)]
pub struct Cli {
    /// GitHub username
    ///
    /// The match against PR/issue authors is case-sensitive
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub username: String,

    /// Show detailed information including PRs and Issues
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the contribution data in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Show the very raw output from the GraphQL query used to retrieve the data
    #[arg(short, long)]
    pub query: bool,

    /// GraphQL endpoint to query (useful for GitHub Enterprise)
    #[arg(
        long,
        env = "GITHUB_GRAPHQL_URL",
        default_value = DEFAULT_ENDPOINT,
        value_parser = config::parse_endpoint
    )]
    pub api_url: Url,

    /// How many contributed-to repositories to request (1-100)
    #[arg(
        long,
        default_value_t = MAX_PAGE_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=MAX_PAGE_SIZE as i64)
    )]
    pub result_page_size: u8,

    /// How many pull requests and issues to request per repository (1-100)
    #[arg(
        long,
        default_value_t = MAX_PAGE_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=MAX_PAGE_SIZE as i64)
    )]
    pub detail_page_size: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["gh-contributions", "-u", "alice", "-v", "-j", "-q"]).unwrap();
        assert_eq!(cli.username, "alice");
        assert!(cli.verbose);
        assert!(cli.json);
        assert!(cli.query);
    }

    #[test]
    fn test_page_size_defaults() {
        let cli = Cli::try_parse_from(["gh-contributions", "--username", "alice"]).unwrap();
        assert_eq!(cli.result_page_size, 100);
        assert_eq!(cli.detail_page_size, 100);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_username_is_required() {
        assert!(Cli::try_parse_from(["gh-contributions"]).is_err());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        assert!(Cli::try_parse_from(["gh-contributions", "-u", ""]).is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        let zero = Cli::try_parse_from(["gh-contributions", "-u", "alice", "--result-page-size", "0"]);
        assert!(zero.is_err());

        let too_big =
            Cli::try_parse_from(["gh-contributions", "-u", "alice", "--detail-page-size", "101"]);
        assert!(too_big.is_err());

        let cli =
            Cli::try_parse_from(["gh-contributions", "-u", "alice", "--detail-page-size", "5"]).unwrap();
        assert_eq!(cli.detail_page_size, 5);
    }

    #[test]
    fn test_api_url_flag() {
        let cli = Cli::try_parse_from([
            "gh-contributions",
            "-u",
            "alice",
            "--api-url",
            "https://github.example.com/api/graphql",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_str(), "https://github.example.com/api/graphql");

        let bad = Cli::try_parse_from(["gh-contributions", "-u", "alice", "--api-url", "not a url"]);
        assert!(bad.is_err());
    }
}

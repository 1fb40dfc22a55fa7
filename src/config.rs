// src/config.rs
// =============================================================================
// Runtime configuration, resolved once in main() and then handed to the
// GitHub client. Nothing here is global: the token is read from the
// environment exactly once and travels inside `Config` from then on.
// =============================================================================

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::cli::Cli;

/// The public GitHub GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// GitHub refuses `first` values above 100 on any connection.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Fixed timeout for the single GraphQL request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Parses and validates a GraphQL endpoint.
///
/// Used as a clap value parser, so a bad `--api-url` is reported as a usage
/// error before any request is made.
pub fn parse_endpoint(input: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(input).map_err(|source| ConfigError::InvalidUrl {
        input: input.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// A GitHub API token that never shows up in `Debug` output or logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Token(Option<String>);

impl Token {
    // A blank value counts as missing
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Token::missing()
        } else {
            Token(Some(value))
        }
    }

    pub fn missing() -> Self {
        Token(None)
    }

    /// Reads the token from `GITHUB_TOKEN`. An unset or empty variable gives
    /// a missing token; the API will then reject the request.
    pub fn from_env() -> Self {
        std::env::var(TOKEN_ENV_VAR)
            .map(Token::new)
            .unwrap_or_else(|_| Token::missing())
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// The raw secret, or an empty string when missing.
    pub fn expose(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Token(<redacted>)"),
            None => f.write_str("Token(<missing>)"),
        }
    }
}

/// Which view of the data gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One row per repository.
    Table,
    /// One table of PRs and issues per repository.
    Detail,
    /// Extracted contributions as JSON.
    Json,
    /// The unmodified API response; extraction is skipped.
    Raw,
}

impl OutputMode {
    // --query wins over --json, which wins over --verbose
    pub fn from_flags(verbose: bool, json: bool, query: bool) -> Self {
        if query {
            OutputMode::Raw
        } else if json {
            OutputMode::Json
        } else if verbose {
            OutputMode::Detail
        } else {
            OutputMode::Table
        }
    }
}

/// Everything the query executor and the renderers need for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub token: Token,
    pub timeout: Duration,
    pub result_page_size: u8,
    pub detail_page_size: u8,
    pub output_mode: OutputMode,
}

impl Config {
    pub fn from_cli(cli: &Cli, token: Token) -> Self {
        Config {
            endpoint: cli.api_url.clone(),
            token,
            timeout: REQUEST_TIMEOUT,
            result_page_size: cli.result_page_size,
            detail_page_size: cli.detail_page_size,
            output_mode: OutputMode::from_flags(cli.verbose, cli.json, cli.query),
        }
    }
}

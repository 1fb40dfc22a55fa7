// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing events go to stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Resolve configuration once (token from GITHUB_TOKEN, endpoint, page sizes)
// 4. Run the GraphQL query, extract contributions, print them
// 5. Exit with proper code (0 = success, 1 = error printed on stderr)
//
// Rust concepts used:
// - async/await: reqwest is async, so main runs inside a tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to pick the output mode
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - resolved runtime settings
mod contributions; // src/contributions/ - filtering the API response
mod github;        // src/github/ - GraphQL query and HTTP client
mod render;        // src/render/ - tables and JSON output

use std::io;

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{Config, Token};
use contributions::ExtractError;
use github::{GithubClient, QueryError};
use render::ReportStyle;

// One request, nothing to run in parallel: a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Only the top-level message; details are in the debug log
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the report on stdout.
// Default level is `warn`; use RUST_LOG=debug to see the request details.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(()) = report printed
//   Err = query, extraction or output failed; nothing was printed on stdout
async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // The token is read here and nowhere else
    let config = Config::from_cli(&cli, Token::from_env());
    debug!(?config, "resolved configuration");

    let client = GithubClient::new(&config)?;
    let raw = client.execute(&cli.username).await.map_err(|e: QueryError| {
        debug!(status = ?e.status(), "contributions query failed");
        e
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // --query skips extraction entirely
    let Some(style) = ReportStyle::for_mode(config.output_mode) else {
        return render::write_raw(&mut out, &raw);
    };

    let contributions = contributions::extract(&raw, &cli.username).map_err(|e: ExtractError| {
        debug!(detail = e.detail(), "unexpected response shape");
        e
    })?;
    info!(
        username = %cli.username,
        repositories = contributions.len(),
        "extracted contributions"
    );

    render::write_contributions(&mut out, style, &cli.username, &contributions)
}

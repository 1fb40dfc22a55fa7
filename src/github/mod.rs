// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub GraphQL API.
//
// Currently implements:
// - The contributions query document and its variables (query.rs)
// - A client that sends it with a bearer token and returns the raw JSON
//   (client.rs)
//
// Turning that JSON into contributions lives in the `contributions` module.
// =============================================================================

mod client;
mod query;

// Re-export the public API so callers can write `github::GithubClient`
pub use client::{GithubClient, QueryError};

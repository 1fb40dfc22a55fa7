// src/contributions/mod.rs
// =============================================================================
// This module turns the raw GraphQL response into the user's contributions.
//
// Submodules:
// - model: API shapes we deserialize, and the Contribution type we print
// - extract: the filter that keeps only PRs/issues the user authored
// =============================================================================

mod extract;
mod model;

pub use extract::{extract, ExtractError};
pub use model::{Contribution, ContributionItem};

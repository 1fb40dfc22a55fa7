// src/contributions/extract.rs
// =============================================================================
// Turns a raw GraphQL response into a list of contributions.
//
// For every repository under data.user.repositoriesContributedTo.nodes we keep
// the name and URL, and only those PRs/issues whose author login is exactly
// the queried username. Order is whatever the API sent (newest first).
//
// This is a pure function: it only reads the response it is given.
// =============================================================================

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::model::{Contribution, ContributionItem, NodeList, RawItem, RawRepositoryNode};

/// JSON pointer to the repository list inside the response.
const NODES_POINTER: &str = "/data/user/repositoriesContributedTo/nodes";

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The response did not have the shape we asked for. This is what an
    /// unknown user or a bad token looks like, so the message stays generic
    /// and the structural detail is kept for logging only.
    #[error("Unable to retrieve contributions. Check the username and your token.")]
    DataShape { detail: String },
}

impl ExtractError {
    pub fn detail(&self) -> &str {
        match self {
            ExtractError::DataShape { detail } => detail,
        }
    }
}

/// Extracts the user's contributions from a raw API response.
pub fn extract(raw: &Value, username: &str) -> Result<Vec<Contribution>, ExtractError> {
    let nodes = raw
        .pointer(NODES_POINTER)
        .filter(|nodes| !nodes.is_null())
        .ok_or_else(|| ExtractError::DataShape {
            detail: format!("response has no {}", NODES_POINTER),
        })?;

    let repositories = Vec::<Option<RawRepositoryNode>>::deserialize(nodes).map_err(|e| {
        ExtractError::DataShape {
            detail: format!("malformed repository node: {}", e),
        }
    })?;

    Ok(repositories
        .into_iter()
        .flatten()
        .map(|repository| to_contribution(repository, username))
        .collect())
}

fn to_contribution(repository: RawRepositoryNode, username: &str) -> Contribution {
    Contribution {
        name: repository.name_with_owner,
        url: repository.url,
        prs: authored_by(repository.pull_requests, username),
        issues: authored_by(repository.issues, username),
    }
}

// Stable filter: kept items stay in their original relative order
fn authored_by(list: NodeList<RawItem>, username: &str) -> Vec<ContributionItem> {
    list.nodes
        .into_iter()
        .flatten()
        .filter(|item| item.is_authored_by(username))
        .map(ContributionItem::from)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Value::pointer?
//    - It follows a JSON Pointer ("/a/b/c") and returns Option<&Value>
//    - A null anywhere along the path also ends in None or a null value,
//      both of which we treat as "wrong shape"
//
// 2. Why Vec::<Option<..>>::deserialize(nodes)?
//    - &serde_json::Value is itself a Deserializer, so we can read typed
//      structs straight out of the borrowed JSON without cloning it
//
// 3. What does .flatten() do on an iterator of Options?
//    - Drops the None entries and unwraps the Some ones
// -----------------------------------------------------------------------------

// src/contributions/model.rs
// =============================================================================
// Data types on both sides of extraction.
//
// Raw*  -> what the GraphQL API sends us (only the fields we asked for)
// Contribution / ContributionItem -> what we print
//
// Rust concepts:
// - serde derive: Deserialize the API shape, Serialize our own
// - Option<T>: GitHub sends `author: null` for deleted accounts ("ghost")
// =============================================================================

use serde::{Deserialize, Serialize};

/// One repository from `repositoriesContributedTo.nodes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRepositoryNode {
    pub name_with_owner: String,
    pub url: String,
    pub pull_requests: NodeList<RawItem>,
    pub issues: NodeList<RawItem>,
}

/// A GraphQL connection reduced to its `nodes` list.
///
/// GitHub types list entries as nullable, so a `null` entry is possible and
/// simply skipped later on.
#[derive(Debug, Deserialize)]
pub struct NodeList<T> {
    pub nodes: Vec<Option<T>>,
}

/// A pull request or an issue; both carry the same fields in our query.
#[derive(Debug, Deserialize)]
pub struct RawItem {
    pub title: String,
    pub url: String,
    pub author: Option<RawAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct RawAuthor {
    pub login: Option<String>,
}

impl RawItem {
    // Exact, case-sensitive login comparison. No author, or an author
    // without a login, never matches.
    pub fn is_authored_by(&self, username: &str) -> bool {
        self.author
            .as_ref()
            .and_then(|author| author.login.as_deref())
            == Some(username)
    }
}

/// A pull request or issue the user authored.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ContributionItem {
    pub title: String,
    pub url: String,
}

impl From<RawItem> for ContributionItem {
    fn from(item: RawItem) -> Self {
        ContributionItem {
            title: item.title,
            url: item.url,
        }
    }
}

/// A third-party repository plus the PRs and issues the user authored there.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub name: String,
    pub url: String,
    pub prs: Vec<ContributionItem>,
    pub issues: Vec<ContributionItem>,
}

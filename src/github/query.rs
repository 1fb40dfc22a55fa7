// src/github/query.rs
// =============================================================================
// The GraphQL document we send and the JSON body that carries it.
//
// The document is a constant. Everything that changes between runs (the
// username and the page sizes) travels in `variables`, so user input is never
// spliced into the query text.
// =============================================================================

use serde::Serialize;

/// Repositories the user contributed to, excluding their own, with the most
/// recent PRs and issues of each repository.
pub const CONTRIBUTIONS_QUERY: &str = r#"
query Contributions($username: String!, $first: Int!, $detailFirst: Int!) {
  user(login: $username) {
    repositoriesContributedTo(
      first: $first,
      contributionTypes: [COMMIT, ISSUE, PULL_REQUEST, REPOSITORY],
      includeUserRepositories: false
    ) {
      nodes {
        nameWithOwner
        url
        pullRequests(
          first: $detailFirst,
          orderBy: {field: CREATED_AT, direction: DESC},
          states: [OPEN, MERGED]
        ) {
          nodes {
            title
            url
            author {
              login
            }
          }
        }
        issues(
          first: $detailFirst,
          orderBy: {field: CREATED_AT, direction: DESC},
          states: [OPEN, CLOSED]
        ) {
          nodes {
            title
            url
            author {
              login
            }
          }
        }
      }
    }
  }
}
"#;

// The POST body: {"query": "...", "variables": {...}}
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables<'a> {
    pub username: &'a str,
    pub first: u8,
    pub detail_first: u8,
}

impl<'a> GraphQlRequest<'a> {
    pub fn contributions(username: &'a str, first: u8, detail_first: u8) -> Self {
        GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: Variables {
                username,
                first,
                detail_first,
            },
        }
    }
}

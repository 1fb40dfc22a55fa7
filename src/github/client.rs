// src/github/client.rs
// =============================================================================
// This module sends the contributions query to the GitHub GraphQL API.
//
// Strategy:
// - Build one reqwest Client with a fixed timeout and a User-Agent
//   (GitHub rejects API requests that don't send one)
// - POST the query document plus variables with a bearer token
// - Hand back the parsed JSON untouched; interpreting it is the job of the
//   contributions module
//
// There is exactly one request per run. No retries, no pagination.
//
// Rust concepts:
// - async functions: For network I/O
// - thiserror: For an error enum callers can match on
// - Borrowing: the client borrows the username for the length of the call
// =============================================================================

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::query::GraphQlRequest;
use crate::config::{Config, Token, TOKEN_ENV_VAR};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Everything that can go wrong while talking to the API
//
// All variants are "transport" failures from the user's point of view: the
// message is printed as-is and nothing else is shown.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Caught locally so we never send a pointless request
    #[error("username must not be empty")]
    EmptyUsername,

    /// The API answered with a 4xx/5xx status
    #[error("GitHub API request failed with HTTP {status}{}", body_suffix(.body))]
    Http { status: StatusCode, body: String },

    /// Connection problems, TLS errors, timeouts
    #[error("GitHub API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response whose body arrived in full but is not JSON
    #[error("GitHub API returned a response that is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl QueryError {
    /// The HTTP status, if the API got far enough to send one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            QueryError::Http { status, .. } => Some(*status),
            QueryError::Transport(e) => e.status(),
            QueryError::EmptyUsername | QueryError::Decode(_) => None,
        }
    }
}

/// Runs the contributions query against one GraphQL endpoint.
///
/// Built once from a resolved [`Config`]; the token is fixed for the lifetime
/// of the client.
pub struct GithubClient {
    http: Client,
    endpoint: Url,
    token: Token,
    result_page_size: u8,
    detail_page_size: u8,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, QueryError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(QueryError::Transport)?;

        Ok(GithubClient {
            http,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
            result_page_size: config.result_page_size,
            detail_page_size: config.detail_page_size,
        })
    }

    // Sends the query for `username` and returns the response body as JSON
    //
    // Returns:
    //   Ok(Value) = the full response, including any GraphQL "errors" entry
    //   Err(QueryError::Http) = non-2xx status; the body is kept for the message
    //   Err(QueryError::Transport) = no usable response (timeout, DNS, TLS, ...)
    pub async fn execute(&self, username: &str) -> Result<Value, QueryError> {
        if username.is_empty() {
            return Err(QueryError::EmptyUsername);
        }

        if self.token.is_missing() {
            warn!(
                "{} is not set; GitHub will most likely reject the request",
                TOKEN_ENV_VAR
            );
        }

        let body =
            GraphQlRequest::contributions(username, self.result_page_size, self.detail_page_size);

        debug!(
            username,
            endpoint = %self.endpoint,
            first = self.result_page_size,
            detail_first = self.detail_page_size,
            "sending contributions query"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(self.token.expose())
            .json(&body)
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            // The body is only used for the error message, so a failed read
            // just leaves it empty
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Http { status, body });
        }

        // The timeout also covers reading the body, so a stalled body is a
        // transport failure; only a complete body gets parsed
        let bytes = response.bytes().await.map_err(QueryError::Transport)?;
        let data: Value = serde_json::from_slice(&bytes).map_err(QueryError::Decode)?;

        if let Some(errors) = data.get("errors") {
            debug!(%errors, "GraphQL response carried errors");
        }

        Ok(data)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why thiserror here but anyhow in main.rs?
//    - QueryError is matched on (tests check the variant, main prints it)
//    - anyhow is for the application edge where we only print the message
//
// 2. What does #[source] do?
//    - It records the underlying reqwest error as the cause, so
//      `std::error::Error::source()` can walk back to it
//
// 3. Why clone the endpoint for every request?
//    - `post()` takes its URL by value; Url is a small owned String inside
//    - We only send one request per run, so it costs nothing noticeable
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputMode, REQUEST_TIMEOUT};
    use mockito::Matcher;
    use serde_json::json;
    use std::time::Duration;

    fn client_for(server: &mockito::Server, token: Token) -> GithubClient {
        client_with_timeout(server, token, REQUEST_TIMEOUT)
    }

    fn client_with_timeout(server: &mockito::Server, token: Token, timeout: Duration) -> GithubClient {
        let config = Config {
            endpoint: Url::parse(&format!("{}/graphql", server.url())).unwrap(),
            token,
            timeout,
            result_page_size: 100,
            detail_page_size: 50,
            output_mode: OutputMode::Table,
        };
        GithubClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_execute_returns_response_unmodified() {
        let response = json!({
            "data": {"user": {"repositoriesContributedTo": {"nodes": []}}},
            "extensions": {"cost": 1}
        });

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer ghp_secret")
            .match_header("user-agent", USER_AGENT)
            .match_body(Matcher::PartialJson(json!({
                "variables": {"username": "alice", "first": 100, "detailFirst": 50}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .create_async()
            .await;

        let client = client_for(&server, Token::new("ghp_secret"));
        let data = client.execute("alice").await.unwrap();

        assert_eq!(data, response);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_is_http_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;

        let client = client_for(&server, Token::new("expired"));
        let err = client.execute("alice").await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        let message = err.to_string();
        assert!(message.contains("401"), "unexpected message: {}", message);
        assert!(message.contains("Bad credentials"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_without_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(502)
            .create_async()
            .await;

        let client = client_for(&server, Token::new("t"));
        let err = client.execute("alice").await.unwrap_err();

        assert!(matches!(err, QueryError::Http { .. }));
        assert_eq!(err.to_string(), "GitHub API request failed with HTTP 502 Bad Gateway");
    }

    #[tokio::test]
    async fn test_missing_token_sends_empty_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", Matcher::Regex("^Bearer ?$".to_string()))
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server, Token::missing());
        let err = client.execute("alice").await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_username_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, Token::new("t"));
        let err = client.execute("").await.unwrap_err();

        assert!(matches!(err, QueryError::EmptyUsername));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = client_for(&server, Token::new("t"));
        let err = client.execute("alice").await.unwrap_err();

        assert!(matches!(err, QueryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_stalled_body_is_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(1500));
                std::io::Write::write_all(w, br#"{"data": null}"#)
            })
            .create_async()
            .await;

        let client = client_with_timeout(&server, Token::new("t"), Duration::from_millis(300));
        let err = client.execute("alice").await.unwrap_err();

        assert!(matches!(err, QueryError::Transport(_)), "unexpected error: {}", err);
        assert!(!err.to_string().contains("not valid JSON"));
    }

    #[tokio::test]
    async fn test_graphql_errors_are_passed_through() {
        let response = json!({
            "data": {"user": null},
            "errors": [{"type": "NOT_FOUND", "message": "Could not resolve to a User"}]
        });

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .create_async()
            .await;

        let client = client_for(&server, Token::new("t"));
        let data = client.execute("nobody").await.unwrap();

        assert_eq!(data, response);
    }
}

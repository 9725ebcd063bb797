//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of GitHub API calls.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! // Identity
//! mock.current_user("octocat").await;
//! mock.user_for_token("good-token", "octocat").await;
//! mock.reject_unknown_tokens().await;
//!
//! // Repository dispatch
//! mock.repo("owner", "repo").dispatch().event_type("deploy").expect(1).mount().await;
//! mock.repo("owner", "repo").dispatch().fail(404, "Not Found").await;
//! ```

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use super::client::OctocrabClient;

/// Create a mock user JSON object as returned by `GET /user`.
fn mock_user(login: &str) -> serde_json::Value {
    json!({
        "login": login,
        "id": 1,
        "node_id": "U_test",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "gravatar_id": "",
        "url": format!("https://api.github.com/users/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "repos_url": format!("https://api.github.com/users/{}/repos", login),
        "type": "User",
        "site_admin": false
    })
}

fn error_body(message: &str) -> serde_json::Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}

/// Matches requests whose `Authorization` header carries `token`,
/// whatever the scheme (`Bearer`, `token`).
struct AuthToken(String);

impl Match for AuthToken {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split_whitespace().last())
            .is_some_and(|token| token == self.0)
    }
}

/// wiremock-based GitHub mock server for testing.
///
/// This provides HTTP-level mocking for GitHub API endpoints, allowing tests
/// to verify actual HTTP requests rather than mocking at the trait level.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to use as the API URL.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get an OctocrabClient configured to use this mock server.
    pub fn client(&self, token: &str) -> OctocrabClient {
        OctocrabClient::with_base_url(&self.server.uri(), token).unwrap()
    }

    /// Mock GET /user for current user, whatever the token.
    pub async fn current_user(&self, login: &str) {
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_user(login)))
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user answering `login` only when `token` is presented.
    pub async fn user_for_token(&self, token: &str, login: &str) {
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(AuthToken(token.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_user(login)))
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user answering 401 for any token without a more specific mock.
    pub async fn reject_unknown_tokens(&self) {
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(error_body("Bad credentials")))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user answering a body that is not a user.
    pub async fn malformed_user(&self) {
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&self.server)
            .await;
    }

    /// Number of `GET /user` requests received so far.
    pub async fn user_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/user")
            .count()
    }

    /// Create a repository context for building mocks.
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }
}

/// Repository context for building mocks.
///
/// Created via `GitHubMockServer::repo()`.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> MockRepoContext<'a> {
    /// Create a dispatch mock builder.
    pub fn dispatch(&self) -> MockDispatchBuilder<'a> {
        MockDispatchBuilder {
            server: self.server,
            owner: self.owner,
            repo: self.repo,
            event_type: None,
            client_payload: None,
            expected_calls: None,
        }
    }
}

/// Builder for `POST /repos/{owner}/{repo}/dispatches` mocks.
pub struct MockDispatchBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
    event_type: Option<String>,
    client_payload: Option<serde_json::Value>,
    expected_calls: Option<u64>,
}

impl MockDispatchBuilder<'_> {
    /// Only match requests with this `event_type`.
    pub fn event_type(mut self, event_type: &str) -> Self {
        self.event_type = Some(event_type.to_string());
        self
    }

    /// Only match requests with this `client_payload`.
    pub fn client_payload(mut self, payload: serde_json::Value) -> Self {
        self.client_payload = Some(payload);
        self
    }

    /// Verify the number of matching calls when the server drops.
    pub fn expect(mut self, calls: u64) -> Self {
        self.expected_calls = Some(calls);
        self
    }

    fn endpoint(&self) -> String {
        format!("/repos/{}/{}/dispatches", self.owner, self.repo)
    }

    /// Mount a mock answering 204 No Content.
    pub async fn mount(self) {
        let mut body = serde_json::Map::new();
        if let Some(event_type) = &self.event_type {
            body.insert("event_type".to_string(), json!(event_type));
        }
        if let Some(payload) = &self.client_payload {
            body.insert("client_payload".to_string(), payload.clone());
        }

        let mut mock = Mock::given(method("POST"))
            .and(path(self.endpoint()))
            .and(body_partial_json(serde_json::Value::Object(body)))
            .respond_with(ResponseTemplate::new(204));
        if let Some(calls) = self.expected_calls {
            mock = mock.expect(calls);
        }
        mock.mount(self.server).await;
    }

    /// Mount a mock answering with an error status.
    pub async fn fail(self, status: u16, message: &str) {
        let mut mock = Mock::given(method("POST"))
            .and(path(self.endpoint()))
            .respond_with(ResponseTemplate::new(status).set_body_json(error_body(message)));
        if let Some(calls) = self.expected_calls {
            mock = mock.expect(calls);
        }
        mock.mount(self.server).await;
    }
}

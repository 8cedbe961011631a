use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

pub const DEFAULT_USER_AGENT: &str = concat!("gh-org-repos/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that can GET a URL and hand back the JSON body.
///
/// [`OrgClient`](crate::client::OrgClient) only talks to the network through this
/// trait, so tests can plug in a canned route table.
#[async_trait]
pub trait JsonFetcher {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

#[async_trait]
impl<F> JsonFetcher for &F
where
    F: JsonFetcher + Sync + ?Sized,
{
    async fn get_json(&self, url: &str) -> Result<Value> {
        (**self).get_json(url).await
    }
}

/// [`JsonFetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client that sends `user_agent` on every request and gives up after `timeout`.
    ///
    /// GitHub rejects requests without a `User-Agent` header.
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self::new(client))
    }

    /// [`HttpFetcher::with_settings`] with the crate's user agent and timeout.
    pub fn from_defaults() -> Result<Self> {
        Self::with_settings(DEFAULT_USER_AGENT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_once(route: &str, body: Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_get_json_returns_body() {
        for (route, payload) in [
            ("/example", json!({"payload": true})),
            ("/holberton", json!({"payload": false})),
        ] {
            let server = serve_once(route, payload.clone()).await;
            let url = format!("{}{}", server.uri(), route);

            let body = HttpFetcher::from_defaults().unwrap().get_json(&url).await.unwrap();
            assert_eq!(body, payload);
            // MockServer verifies `.expect(1)` on drop
        }
    }

    #[tokio::test]
    async fn test_get_json_array_body() {
        let payload = json!([{"name": "episodes.dart"}, {"name": "cpp-netlib"}]);
        let server = serve_once("/orgs/google/repos", payload.clone()).await;
        let url = format!("{}/orgs/google/repos", server.uri());

        let body = HttpFetcher::from_defaults().unwrap().get_json(&url).await.unwrap();
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_defaults_send_crate_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/google"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "google"})))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::from_defaults().unwrap();
        let body = fetcher
            .get_json(&format!("{}/orgs/google", server.uri()))
            .await
            .unwrap();
        assert_eq!(body["login"], "google");
    }

    #[tokio::test]
    async fn test_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/abc"))
            .and(header("user-agent", "test-agent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher =
            HttpFetcher::with_settings("test-agent/1.0", Duration::from_secs(5)).unwrap();
        let body = fetcher
            .get_json(&format!("{}/orgs/abc", server.uri()))
            .await
            .unwrap();
        assert_eq!(body["login"], "abc");
    }

    #[tokio::test]
    async fn test_error_status_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::from_defaults().unwrap();
        let err = fetcher
            .get_json(&format!("{}/orgs/missing", server.uri()))
            .await
            .unwrap_err();
        match err {
            Error::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::from_defaults().unwrap();
        let result = fetcher
            .get_json(&format!("{}/plain", server.uri()))
            .await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}

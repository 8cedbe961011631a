use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::license::has_license;
use crate::memo::Memo;
use crate::models::Repo;
use crate::nested::access_nested_map;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Client for a single GitHub organization.
///
/// The organization payload and the repository list are each fetched at most
/// once per client and kept for its lifetime. Reads need `&mut self` because
/// they may fill those caches.
pub struct OrgClient<F = HttpFetcher> {
    org_name: String,
    base_url: String,
    fetcher: F,
    org: Memo<Value>,
    repos: Memo<Value>,
}

impl OrgClient<HttpFetcher> {
    /// Client that talks to api.github.com with a default HTTP fetcher.
    pub fn github(org_name: impl Into<String>) -> Result<Self> {
        Ok(Self::new(org_name, HttpFetcher::from_defaults()?))
    }
}

impl<F: JsonFetcher> OrgClient<F> {
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            base_url: DEFAULT_API_URL.to_string(),
            fetcher,
            org: Memo::new(),
            repos: Memo::new(),
        }
    }

    /// Point the client at another API root (GitHub Enterprise, a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org_name)
    }

    /// The organization payload, fetched on first use.
    pub async fn org(&mut self) -> Result<&Value> {
        let url = self.org_url();
        let fetcher = &self.fetcher;
        self.org
            .get_or_try_init(|| async move {
                debug!(org = %url, "fetching organization");
                fetcher.get_json(&url).await
            })
            .await
    }

    /// The `repos_url` advertised by the organization payload.
    pub async fn public_repos_url(&mut self) -> Result<String> {
        let org = self.org().await?;
        let url = access_nested_map(org, &["repos_url"])?;
        url.as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::UnexpectedPayload(format!("repos_url is not a string: {url}")))
    }

    /// The raw repository list, fetched on first use.
    pub async fn repos_payload(&mut self) -> Result<&Vec<Value>> {
        if self.repos.is_initialized() {
            debug!(org = %self.org_name, "repository list cached");
        } else {
            let url = self.public_repos_url().await?;
            let fetcher = &self.fetcher;
            self.repos
                .get_or_try_init(|| async move {
                    debug!(repos = %url, "fetching repositories");
                    fetcher.get_json(&url).await
                })
                .await?;
        }

        match self.repos.get() {
            Some(Value::Array(repos)) => Ok(repos),
            Some(other) => Err(Error::UnexpectedPayload(format!(
                "expected a repository list, got {}",
                json_kind(other)
            ))),
            None => Err(Error::UnexpectedPayload(
                "repository list was not fetched".to_string(),
            )),
        }
    }

    /// Names of the organization's public repositories, in API order.
    ///
    /// With `Some(key)`, only repositories whose `license.key` equals `key` are kept.
    pub async fn public_repos(&mut self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.repos_payload().await?;

        repos
            .iter()
            .filter(|repo| license.map_or(true, |key| has_license(repo, key)))
            .map(repo_name)
            .collect()
    }

    /// Like [`OrgClient::public_repos`], but returns the typed repository records.
    pub async fn public_repo_details(&mut self, license: Option<&str>) -> Result<Vec<Repo>> {
        let repos = self.repos_payload().await?;

        repos
            .iter()
            .filter(|repo| license.map_or(true, |key| has_license(repo, key)))
            .map(|repo| {
                repo_name(repo)?;
                serde_json::from_value::<Repo>(repo.clone()).map_err(Error::from)
            })
            .collect()
    }
}

/// The `name` of a repository payload; missing ⇒ `MissingKey("name")`.
fn repo_name(repo: &Value) -> Result<String> {
    let name = access_nested_map(repo, &["name"])?;
    name.as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::UnexpectedPayload(format!("repo name is not a string: {name}")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

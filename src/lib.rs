//! `gh_org_repos` — fetch a GitHub organization and list its public repositories.
//!
//! # Pieces
//! - [`nested::access_nested_map`] walks a key path through JSON objects.
//! - [`fetch::JsonFetcher`] is the single HTTP seam; [`fetch::HttpFetcher`] is the
//!   `reqwest` implementation.
//! - [`memo::Memo`] caches a value the first time it is computed.
//! - [`client::OrgClient`] ties them together: organization payload, `repos_url`,
//!   repository names filtered by [`license::has_license`].
//!
//! ```no_run
//! # async fn run() -> gh_org_repos::Result<()> {
//! let mut client = gh_org_repos::OrgClient::github("google")?;
//! let apache = client.public_repos(Some("apache-2.0")).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod license;
pub mod logging;
pub mod memo;
pub mod models;
pub mod nested;
pub mod report;

pub use client::OrgClient;
pub use error::{Error, Result};
pub use fetch::{HttpFetcher, JsonFetcher};
pub use license::has_license;
pub use memo::Memo;
pub use nested::access_nested_map;

//! License matching and classification for repository payloads.
//!
//! - [`has_license`] — the filter used by `public_repos(license)`.
//! - [`risk`] — maps GitHub license keys to a [`LicenseRisk`](crate::models::LicenseRisk)
//!   for the terminal report.

pub mod risk;

pub use risk::classify_key;

use serde_json::Value;

use crate::nested::access_nested_map;

/// True when `repo.license.key` equals `license_key`.
///
/// A repository without a license (absent field, `null`, missing `key`) simply
/// does not match; this never fails.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    match access_nested_map(repo, &["license", "key"]) {
        Ok(key) => key.as_str() == Some(license_key),
        Err(_) => false,
    }
}

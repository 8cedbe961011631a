use serde::{Deserialize, Deserializer, Serialize};

/// The subset of a GitHub repository payload the report shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub license: Option<RepoLicense>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fork: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
}

impl Repo {
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `license` object GitHub embeds in repository payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoLicense {
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spdx_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LicenseRisk {
    Permissive,
    WeakCopyleft,
    StrongCopyleft,
    Unknown,
}

impl std::fmt::Display for LicenseRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseRisk::Permissive => write!(f, "Permissive"),
            LicenseRisk::WeakCopyleft => write!(f, "Weak Copyleft"),
            LicenseRisk::StrongCopyleft => write!(f, "Strong Copyleft"),
            LicenseRisk::Unknown => write!(f, "Unknown"),
        }
    }
}

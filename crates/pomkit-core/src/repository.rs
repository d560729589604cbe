//! Artifact repositories and distribution management.

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;

/// Remote repository used to resolve dependencies, or a deployment target
/// under `<distributionManagement>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Only meaningful for deployment targets.
    pub unique_version: Option<bool>,
    pub releases: Option<RepositoryPolicy>,
    pub snapshots: Option<RepositoryPolicy>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub layout: Option<String>,
}

/// Repository used to resolve build plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRepository {
    pub releases: Option<RepositoryPolicy>,
    pub snapshots: Option<RepositoryPolicy>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub layout: Option<String>,
}

/// Release or snapshot handling for a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPolicy {
    /// Kept as a string: unset, "true", "false" or a placeholder.
    pub enabled: Option<String>,
    /// "always", "daily", "interval:N" or "never".
    pub update_policy: Option<String>,
    /// "fail", "warn" or "ignore".
    pub checksum_policy: Option<String>,
}

impl RepositoryPolicy {
    /// `Some(true/false)` only when `enabled` holds a literal boolean.
    pub fn is_enabled(&self) -> Option<bool> {
        match self.enabled.as_deref().map(str::trim) {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionManagement {
    pub repository: Option<Repository>,
    pub snapshot_repository: Option<Repository>,
    pub site: Option<Site>,
    pub download_url: Option<String>,
    pub relocation: Option<Relocation>,
    pub status: Option<String>,
}

/// Where the project web site is deployed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// New coordinates for an artifact that has moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub message: Option<String>,
}

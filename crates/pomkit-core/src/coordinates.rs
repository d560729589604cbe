//! The (groupId, artifactId, version) identity triple.

use serde::{Deserialize, Serialize};

/// Identity triple shared by parents, dependencies, extensions, relocations
/// and plugins. Owning types embed it and add their own fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl Coordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
        }
    }

    /// True when none of the three parts are present.
    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.artifact_id.is_none() && self.version.is_none()
    }

    /// Repository layout path without extension, e.g.
    /// `org/apache/ignite/ignite-core/2.14.0/ignite-core-2.14.0`.
    ///
    /// Group and artifact are lowercased with dots turned into slashes; the
    /// file name uses the last artifact segment. Returns `None` unless all
    /// three parts are present.
    pub fn repository_path(&self) -> Option<String> {
        let group = self.group_id.as_deref()?;
        let artifact = self.artifact_id.as_deref()?;
        let version = self.version.as_deref()?;

        let group_path = group.replace('.', "/").to_lowercase();
        let artifact_path = artifact.replace('.', "/").to_lowercase();
        let base_name = artifact_path.rsplit('/').next().unwrap_or(&artifact_path);

        Some(format!(
            "{group_path}/{artifact_path}/{version}/{base_name}-{version}"
        ))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }
}

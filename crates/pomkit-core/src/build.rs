//! Build configuration: resources, plugins and extensions.

use serde::{Deserialize, Serialize};

use crate::Properties;
use crate::coordinates::Coordinates;
use crate::dependency::Dependency;

/// Build settings shared by the project build and profile builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildBase {
    /// Goal or phase run when none is given.
    pub default_goal: Option<String>,
    pub resources: Option<Vec<Resource>>,
    pub test_resources: Option<Vec<Resource>>,
    /// Build output root (usually "target").
    pub directory: Option<String>,
    pub final_name: Option<String>,
    /// Filter property files applied to filtered resources.
    pub filters: Option<Vec<String>>,
    pub plugin_management: Option<PluginManagement>,
    pub plugins: Option<Vec<Plugin>>,
}

/// Project-level build. Profiles use [`BuildBase`] only and cannot set the
/// source/output directories or extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub source_directory: Option<String>,
    pub script_source_directory: Option<String>,
    pub test_source_directory: Option<String>,
    pub output_directory: Option<String>,
    pub test_output_directory: Option<String>,
    pub extensions: Option<Vec<Extension>>,
    #[serde(flatten)]
    pub base: BuildBase,
}

/// Build extension artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

/// A set of files copied into the build output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub target_path: Option<String>,
    /// "true"/"false" as written.
    pub filtering: Option<String>,
    pub directory: Option<String>,
    /// Glob patterns.
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManagement {
    pub plugins: Option<Vec<Plugin>>,
}

/// A build plugin and how it is bound to the lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Whether the plugin contributes build extensions, as written.
    pub extensions: Option<String>,
    pub executions: Option<Vec<PluginExecution>>,
    /// Extra dependencies on the plugin's classpath.
    pub dependencies: Option<Vec<Dependency>>,
    pub inherited: Option<String>,
    pub configuration: Option<Properties>,
}

impl Plugin {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            ..Default::default()
        }
    }

    pub fn execution(&self, id: &str) -> Option<&PluginExecution> {
        self.executions
            .iter()
            .flatten()
            .find(|e| e.id.as_deref() == Some(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginExecution {
    pub id: Option<String>,
    /// Lifecycle phase the goals are bound to.
    pub phase: Option<String>,
    pub goals: Option<Vec<String>>,
    pub inherited: Option<String>,
    pub configuration: Option<Properties>,
}

impl BuildBase {
    /// Find a plugin in `<plugins>` by artifact id.
    pub fn plugin(&self, artifact_id: &str) -> Option<&Plugin> {
        self.plugins
            .iter()
            .flatten()
            .find(|p| p.coordinates.artifact_id.as_deref() == Some(artifact_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_and_execution_lookup() {
        let plugin = Plugin {
            executions: Some(vec![PluginExecution {
                id: Some("default-compile".to_string()),
                phase: Some("compile".to_string()),
                ..Default::default()
            }]),
            ..Plugin::new(Coordinates::new(
                "org.apache.maven.plugins",
                "maven-compiler-plugin",
                "3.11.0",
            ))
        };
        let base = BuildBase {
            plugins: Some(vec![plugin]),
            ..Default::default()
        };

        let found = base.plugin("maven-compiler-plugin").unwrap();
        assert_eq!(
            found.execution("default-compile").unwrap().phase.as_deref(),
            Some("compile")
        );
        assert!(found.execution("missing").is_none());
        assert!(base.plugin("maven-jar-plugin").is_none());
    }
}

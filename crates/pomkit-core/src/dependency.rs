//! Dependencies, exclusions and dependency management.

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Artifact type; the build tool treats absence as "jar".
    #[serde(rename = "type")]
    pub dependency_type: Option<String>,
    pub classifier: Option<String>,
    pub scope: Option<String>,
    pub system_path: Option<String>,
    /// Transitive dependencies to suppress, in declaration order.
    pub exclusions: Option<Vec<Exclusion>>,
    /// Kept as written ("true"/"false"); may be a placeholder.
    pub optional: Option<String>,
}

impl Dependency {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            ..Default::default()
        }
    }

    /// Repository path of the artifact file, e.g.
    /// `com/test/app/1.0/app-1.0-tests.jar`.
    pub fn artifact_path(&self) -> Option<String> {
        let base = self.coordinates.repository_path()?;
        let extension = self
            .dependency_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("jar");
        Some(match self.classifier.as_deref() {
            Some(classifier) if !classifier.is_empty() => {
                format!("{base}-{classifier}.{extension}")
            }
            _ => format!("{base}.{extension}"),
        })
    }

    /// Whether this dependency excludes the given group/artifact pair.
    /// A `*` in the exclusion matches anything.
    pub fn excludes(&self, group_id: &str, artifact_id: &str) -> bool {
        fn matches(pattern: Option<&str>, value: &str) -> bool {
            pattern == Some("*") || pattern == Some(value)
        }

        self.exclusions.iter().flatten().any(|e| {
            matches(e.group_id.as_deref(), group_id) && matches(e.artifact_id.as_deref(), artifact_id)
        })
    }
}

/// Group/artifact pair excluded from transitive resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
}

impl Exclusion {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManagement {
    pub dependencies: Option<Vec<Dependency>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency() -> Dependency {
        Dependency::new(Coordinates::new("com.test", "app", "1.0"))
    }

    #[test]
    fn test_artifact_path_defaults_to_jar() {
        assert_eq!(
            dependency().artifact_path().as_deref(),
            Some("com/test/app/1.0/app-1.0.jar")
        );
    }

    #[test]
    fn test_artifact_path_empty_type_is_jar() {
        let dep = Dependency {
            dependency_type: Some(String::new()),
            ..dependency()
        };
        assert_eq!(
            dep.artifact_path().as_deref(),
            Some("com/test/app/1.0/app-1.0.jar")
        );
    }

    #[test]
    fn test_artifact_path_with_type_and_classifier() {
        let dep = Dependency {
            dependency_type: Some("test-jar".to_string()),
            classifier: Some("tests".to_string()),
            ..dependency()
        };
        assert_eq!(
            dep.artifact_path().as_deref(),
            Some("com/test/app/1.0/app-1.0-tests.test-jar")
        );
    }

    #[test]
    fn test_excludes() {
        let dep = Dependency {
            exclusions: Some(vec![
                Exclusion::new("org.slf4j", "slf4j-log4j12"),
                Exclusion::new("commons-logging", "*"),
            ]),
            ..dependency()
        };

        assert!(dep.excludes("org.slf4j", "slf4j-log4j12"));
        assert!(dep.excludes("commons-logging", "commons-logging"));
        assert!(!dep.excludes("org.slf4j", "slf4j-api"));
        assert!(!dependency().excludes("org.slf4j", "slf4j-api"));
    }
}

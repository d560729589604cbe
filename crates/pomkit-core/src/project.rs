//! The project descriptor root and its project-level records.

use serde::{Deserialize, Serialize};

use crate::Properties;
use crate::build::Build;
use crate::coordinates::Coordinates;
use crate::dependency::{Dependency, DependencyManagement};
use crate::people::{Contributor, Developer};
use crate::profile::Profile;
use crate::reporting::Reporting;
use crate::repository::{DistributionManagement, PluginRepository, Repository};

/// One build-descriptor document (`<project>`).
///
/// Every field is optional: `None` means the element was absent, which is
/// distinct from an element present with empty content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Descriptor model version (e.g., "4.0.0").
    pub model_version: Option<String>,
    /// Parent project reference.
    pub parent: Option<Parent>,
    /// Identity triple of this project.
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Packaging type (e.g., "jar", "war", "pom").
    pub packaging: Option<String>,
    /// Human-readable name.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Project home page.
    pub url: Option<String>,
    pub inception_year: Option<String>,
    pub organization: Option<Organization>,
    pub licenses: Option<Vec<License>>,
    pub developers: Option<Vec<Developer>>,
    pub contributors: Option<Vec<Contributor>>,
    pub mailing_lists: Option<Vec<MailingList>>,
    pub prerequisites: Option<Prerequisites>,
    /// Sub-module directory names.
    pub modules: Option<Vec<String>>,
    pub scm: Option<Scm>,
    pub issue_management: Option<IssueManagement>,
    pub ci_management: Option<CiManagement>,
    pub distribution_management: Option<DistributionManagement>,
    pub dependency_management: Option<DependencyManagement>,
    pub dependencies: Option<Vec<Dependency>>,
    pub repositories: Option<Vec<Repository>>,
    pub plugin_repositories: Option<Vec<PluginRepository>>,
    pub build: Option<Build>,
    pub reporting: Option<Reporting>,
    pub profiles: Option<Vec<Profile>>,
    /// Project-level property bag, used as the default variable resolver.
    pub properties: Option<Properties>,
}

impl Project {
    /// Create an empty project (every field absent).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_id(&self) -> Option<&str> {
        self.coordinates.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.coordinates.artifact_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.coordinates.version.as_deref()
    }

    /// Group id, falling back to the parent's when the project omits it.
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id()
            .or_else(|| self.parent.as_ref()?.coordinates.group_id.as_deref())
    }

    /// Version, falling back to the parent's when the project omits it.
    pub fn effective_version(&self) -> Option<&str> {
        self.version()
            .or_else(|| self.parent.as_ref()?.coordinates.version.as_deref())
    }

    /// Look up a project-level property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)
    }

    /// Set a project-level property, creating the bag if absent.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties
            .get_or_insert_with(Properties::default)
            .insert(key, value);
    }

    /// Iterate over the declared dependencies (empty when absent).
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().flatten()
    }

    /// Find a profile by id.
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .flatten()
            .find(|p| p.id.as_deref() == Some(id))
    }
}

/// Reference to the parent project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Path to the parent descriptor, relative to this one.
    pub relative_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub name: Option<String>,
    pub url: Option<String>,
    /// How the project may be distributed ("repo" or "manual").
    pub distribution: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingList {
    pub name: Option<String>,
    pub subscribe: Option<String>,
    pub unsubscribe: Option<String>,
    pub post: Option<String>,
    pub archive: Option<String>,
    pub other_archives: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisites {
    /// Minimum build tool version.
    pub maven: Option<String>,
}

/// Source control information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scm {
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
    pub tag: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueManagement {
    pub system: Option<String>,
    pub url: Option<String>,
}

/// Continuous integration system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiManagement {
    pub system: Option<String>,
    pub url: Option<String>,
    pub notifiers: Option<Vec<Notifier>>,
}

/// Build notification target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifier {
    /// Notification channel (e.g., "mail").
    #[serde(rename = "type")]
    pub notifier_type: Option<String>,
    pub send_on_error: Option<bool>,
    pub send_on_failure: Option<bool>,
    pub send_on_success: Option<bool>,
    pub send_on_warning: Option<bool>,
    pub address: Option<String>,
    /// Channel-specific settings.
    pub configuration: Option<Properties>,
}

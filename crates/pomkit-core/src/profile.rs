//! Build profiles and their activation conditions.
//!
//! Activation is stored, never evaluated.

use serde::{Deserialize, Serialize};

use crate::Properties;
use crate::build::BuildBase;
use crate::dependency::{Dependency, DependencyManagement};
use crate::reporting::Reporting;
use crate::repository::{DistributionManagement, PluginRepository, Repository};

/// An overlay of project settings. Profiles do not nest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<String>,
    pub activation: Option<Activation>,
    pub build: Option<BuildBase>,
    pub modules: Option<Vec<String>>,
    pub distribution_management: Option<DistributionManagement>,
    pub properties: Option<Properties>,
    pub dependency_management: Option<DependencyManagement>,
    pub dependencies: Option<Vec<Dependency>>,
    pub repositories: Option<Vec<Repository>>,
    pub plugin_repositories: Option<Vec<PluginRepository>>,
    pub reporting: Option<Reporting>,
}

/// Conditions under which a profile applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    pub active_by_default: Option<bool>,
    /// JDK version prefix or range (e.g., "1.8", "[11,)").
    pub jdk: Option<String>,
    pub os: Option<ActivationOs>,
    pub property: Option<ActivationProperty>,
    pub file: Option<ActivationFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationOs {
    pub name: Option<String>,
    pub family: Option<String>,
    pub arch: Option<String>,
    pub version: Option<String>,
}

/// Matches when a property is defined (and optionally equals `value`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationProperty {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationFile {
    pub missing: Option<String>,
    pub exists: Option<String>,
}

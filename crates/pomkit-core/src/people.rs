//! Developers and contributors.

use serde::{Deserialize, Serialize};

use crate::Properties;

/// Fields shared by developers and contributors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub roles: Option<Vec<String>>,
    /// Offset or zone name (e.g., "+1", "Europe/Berlin").
    pub timezone: Option<String>,
    pub properties: Option<Properties>,
}

/// A committer on the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    /// SCM handle.
    pub id: Option<String>,
    #[serde(flatten)]
    pub actor: Actor,
}

/// Someone who contributed without commit access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(flatten)]
    pub actor: Actor,
}

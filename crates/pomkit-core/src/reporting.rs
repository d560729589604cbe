//! Site report generation.

use serde::{Deserialize, Serialize};

use crate::Properties;
use crate::coordinates::Coordinates;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporting {
    pub exclude_defaults: Option<String>,
    pub output_directory: Option<String>,
    pub plugins: Option<Vec<ReportingPlugin>>,
}

/// A plugin run during site generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingPlugin {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub inherited: Option<String>,
    pub report_sets: Option<Vec<ReportSet>>,
    pub configuration: Option<Properties>,
}

/// A group of reports produced by one reporting plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSet {
    pub id: Option<String>,
    pub reports: Option<Vec<String>>,
    pub inherited: Option<String>,
    pub configuration: Option<Properties>,
}

use pomkit_core::reporting::{ReportSet, Reporting, ReportingPlugin};

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

impl FromElement for Reporting {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Reporting {
            exclude_defaults: el.child_text("excludeDefaults"),
            output_directory: el.child_text("outputDirectory"),
            plugins: el.child_list("plugins", "plugin")?,
        })
    }
}

impl ToElement for Reporting {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("excludeDefaults", self.exclude_defaults.as_deref());
        el.push_text("outputDirectory", self.output_directory.as_deref());
        el.push_list("plugins", "plugin", self.plugins.as_deref());
        el
    }
}

impl FromElement for ReportingPlugin {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ReportingPlugin {
            coordinates: el.coordinates(),
            inherited: el.child_text("inherited"),
            report_sets: el.child_list("reportSets", "reportSet")?,
            configuration: el.child("configuration")?,
        })
    }
}

impl ToElement for ReportingPlugin {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_coordinates(&self.coordinates);
        el.push_text("inherited", self.inherited.as_deref());
        el.push_list("reportSets", "reportSet", self.report_sets.as_deref());
        el.push_child("configuration", self.configuration.as_ref());
        el
    }
}

impl FromElement for ReportSet {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ReportSet {
            id: el.child_text("id"),
            reports: el.child_strings("reports", "report")?,
            inherited: el.child_text("inherited"),
            configuration: el.child("configuration")?,
        })
    }
}

impl ToElement for ReportSet {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("id", self.id.as_deref());
        el.push_strings("reports", "report", self.reports.as_deref());
        el.push_text("inherited", self.inherited.as_deref());
        el.push_child("configuration", self.configuration.as_ref());
        el
    }
}

use pomkit_core::dependency::{Dependency, DependencyManagement, Exclusion};

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

impl FromElement for Dependency {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Dependency {
            coordinates: el.coordinates(),
            dependency_type: el.child_text("type"),
            classifier: el.child_text("classifier"),
            scope: el.child_text("scope"),
            system_path: el.child_text("systemPath"),
            exclusions: el.child_list("exclusions", "exclusion")?,
            optional: el.child_text("optional"),
        })
    }
}

impl ToElement for Dependency {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_coordinates(&self.coordinates);
        el.push_text("type", self.dependency_type.as_deref());
        el.push_text("classifier", self.classifier.as_deref());
        el.push_text("scope", self.scope.as_deref());
        el.push_text("systemPath", self.system_path.as_deref());
        el.push_list("exclusions", "exclusion", self.exclusions.as_deref());
        el.push_text("optional", self.optional.as_deref());
        el
    }
}

impl FromElement for Exclusion {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Exclusion {
            group_id: el.child_text("groupId"),
            artifact_id: el.child_text("artifactId"),
        })
    }
}

impl ToElement for Exclusion {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("groupId", self.group_id.as_deref());
        el.push_text("artifactId", self.artifact_id.as_deref());
        el
    }
}

impl FromElement for DependencyManagement {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DependencyManagement {
            dependencies: el.child_list("dependencies", "dependency")?,
        })
    }
}

impl ToElement for DependencyManagement {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_list("dependencies", "dependency", self.dependencies.as_deref());
        el
    }
}

use pomkit_core::profile::{
    Activation, ActivationFile, ActivationOs, ActivationProperty, Profile,
};

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

impl FromElement for Profile {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Profile {
            id: el.child_text("id"),
            activation: el.child("activation")?,
            build: el.child("build")?,
            modules: el.child_strings("modules", "module")?,
            distribution_management: el.child("distributionManagement")?,
            properties: el.child("properties")?,
            dependency_management: el.child("dependencyManagement")?,
            dependencies: el.child_list("dependencies", "dependency")?,
            repositories: el.child_list("repositories", "repository")?,
            plugin_repositories: el.child_list("pluginRepositories", "pluginRepository")?,
            reporting: el.child("reporting")?,
        })
    }
}

impl ToElement for Profile {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("id", self.id.as_deref());
        el.push_child("activation", self.activation.as_ref());
        el.push_child("build", self.build.as_ref());
        el.push_strings("modules", "module", self.modules.as_deref());
        el.push_child("distributionManagement", self.distribution_management.as_ref());
        el.push_child("properties", self.properties.as_ref());
        el.push_child("dependencyManagement", self.dependency_management.as_ref());
        el.push_list("dependencies", "dependency", self.dependencies.as_deref());
        el.push_list("repositories", "repository", self.repositories.as_deref());
        el.push_list(
            "pluginRepositories",
            "pluginRepository",
            self.plugin_repositories.as_deref(),
        );
        el.push_child("reporting", self.reporting.as_ref());
        el
    }
}

impl FromElement for Activation {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Activation {
            active_by_default: el.child_bool("activeByDefault")?,
            jdk: el.child_text("jdk"),
            os: el.child("os")?,
            property: el.child("property")?,
            file: el.child("file")?,
        })
    }
}

impl ToElement for Activation {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_bool("activeByDefault", self.active_by_default);
        el.push_text("jdk", self.jdk.as_deref());
        el.push_child("os", self.os.as_ref());
        el.push_child("property", self.property.as_ref());
        el.push_child("file", self.file.as_ref());
        el
    }
}

impl FromElement for ActivationOs {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ActivationOs {
            name: el.child_text("name"),
            family: el.child_text("family"),
            arch: el.child_text("arch"),
            version: el.child_text("version"),
        })
    }
}

impl ToElement for ActivationOs {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("name", self.name.as_deref());
        el.push_text("family", self.family.as_deref());
        el.push_text("arch", self.arch.as_deref());
        el.push_text("version", self.version.as_deref());
        el
    }
}

impl FromElement for ActivationProperty {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ActivationProperty {
            name: el.child_text("name"),
            value: el.child_text("value"),
        })
    }
}

impl ToElement for ActivationProperty {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("name", self.name.as_deref());
        el.push_text("value", self.value.as_deref());
        el
    }
}

impl FromElement for ActivationFile {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ActivationFile {
            missing: el.child_text("missing"),
            exists: el.child_text("exists"),
        })
    }
}

impl ToElement for ActivationFile {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("missing", self.missing.as_deref());
        el.push_text("exists", self.exists.as_deref());
        el
    }
}

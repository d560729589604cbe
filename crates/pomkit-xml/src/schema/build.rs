use pomkit_core::build::{
    Build, BuildBase, Extension, Plugin, PluginExecution, PluginManagement, Resource,
};

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

impl FromElement for BuildBase {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(BuildBase {
            default_goal: el.child_text("defaultGoal"),
            resources: el.child_list("resources", "resource")?,
            test_resources: el.child_list("testResources", "testResource")?,
            directory: el.child_text("directory"),
            final_name: el.child_text("finalName"),
            filters: el.child_strings("filters", "filter")?,
            plugin_management: el.child("pluginManagement")?,
            plugins: el.child_list("plugins", "plugin")?,
        })
    }
}

impl ToElement for BuildBase {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        encode_base(&mut el, self);
        el
    }
}

fn encode_base(el: &mut Element, base: &BuildBase) {
    el.push_text("defaultGoal", base.default_goal.as_deref());
    el.push_list("resources", "resource", base.resources.as_deref());
    el.push_list("testResources", "testResource", base.test_resources.as_deref());
    el.push_text("directory", base.directory.as_deref());
    el.push_text("finalName", base.final_name.as_deref());
    el.push_strings("filters", "filter", base.filters.as_deref());
    el.push_child("pluginManagement", base.plugin_management.as_ref());
    el.push_list("plugins", "plugin", base.plugins.as_deref());
}

/// The project build shares one element with its [`BuildBase`] fields.
impl FromElement for Build {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Build {
            source_directory: el.child_text("sourceDirectory"),
            script_source_directory: el.child_text("scriptSourceDirectory"),
            test_source_directory: el.child_text("testSourceDirectory"),
            output_directory: el.child_text("outputDirectory"),
            test_output_directory: el.child_text("testOutputDirectory"),
            extensions: el.child_list("extensions", "extension")?,
            base: BuildBase::from_element(el)?,
        })
    }
}

impl ToElement for Build {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("sourceDirectory", self.source_directory.as_deref());
        el.push_text("scriptSourceDirectory", self.script_source_directory.as_deref());
        el.push_text("testSourceDirectory", self.test_source_directory.as_deref());
        el.push_text("outputDirectory", self.output_directory.as_deref());
        el.push_text("testOutputDirectory", self.test_output_directory.as_deref());
        el.push_list("extensions", "extension", self.extensions.as_deref());
        encode_base(&mut el, &self.base);
        el
    }
}

impl FromElement for Extension {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Extension {
            coordinates: el.coordinates(),
        })
    }
}

impl ToElement for Extension {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_coordinates(&self.coordinates);
        el
    }
}

impl FromElement for Resource {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Resource {
            target_path: el.child_text("targetPath"),
            filtering: el.child_text("filtering"),
            directory: el.child_text("directory"),
            includes: el.child_strings("includes", "include")?,
            excludes: el.child_strings("excludes", "exclude")?,
        })
    }
}

impl ToElement for Resource {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("targetPath", self.target_path.as_deref());
        el.push_text("filtering", self.filtering.as_deref());
        el.push_text("directory", self.directory.as_deref());
        el.push_strings("includes", "include", self.includes.as_deref());
        el.push_strings("excludes", "exclude", self.excludes.as_deref());
        el
    }
}

impl FromElement for PluginManagement {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(PluginManagement {
            plugins: el.child_list("plugins", "plugin")?,
        })
    }
}

impl ToElement for PluginManagement {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_list("plugins", "plugin", self.plugins.as_deref());
        el
    }
}

impl FromElement for Plugin {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Plugin {
            coordinates: el.coordinates(),
            extensions: el.child_text("extensions"),
            executions: el.child_list("executions", "execution")?,
            dependencies: el.child_list("dependencies", "dependency")?,
            inherited: el.child_text("inherited"),
            configuration: el.child("configuration")?,
        })
    }
}

impl ToElement for Plugin {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_coordinates(&self.coordinates);
        el.push_text("extensions", self.extensions.as_deref());
        el.push_list("executions", "execution", self.executions.as_deref());
        el.push_list("dependencies", "dependency", self.dependencies.as_deref());
        el.push_text("inherited", self.inherited.as_deref());
        el.push_child("configuration", self.configuration.as_ref());
        el
    }
}

impl FromElement for PluginExecution {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(PluginExecution {
            id: el.child_text("id"),
            phase: el.child_text("phase"),
            goals: el.child_strings("goals", "goal")?,
            inherited: el.child_text("inherited"),
            configuration: el.child("configuration")?,
        })
    }
}

impl ToElement for PluginExecution {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("id", self.id.as_deref());
        el.push_text("phase", self.phase.as_deref());
        el.push_strings("goals", "goal", self.goals.as_deref());
        el.push_text("inherited", self.inherited.as_deref());
        el.push_child("configuration", self.configuration.as_ref());
        el
    }
}

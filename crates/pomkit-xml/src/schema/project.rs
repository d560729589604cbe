use pomkit_core::project::{
    CiManagement, IssueManagement, License, MailingList, Notifier, Organization, Parent,
    Prerequisites, Scm,
};
use pomkit_core::Project;

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

impl FromElement for Project {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Project {
            model_version: el.child_text("modelVersion"),
            parent: el.child("parent")?,
            coordinates: el.coordinates(),
            packaging: el.child_text("packaging"),
            name: el.child_text("name"),
            description: el.child_text("description"),
            url: el.child_text("url"),
            inception_year: el.child_text("inceptionYear"),
            organization: el.child("organization")?,
            licenses: el.child_list("licenses", "license")?,
            developers: el.child_list("developers", "developer")?,
            contributors: el.child_list("contributors", "contributor")?,
            mailing_lists: el.child_list("mailingLists", "mailingList")?,
            prerequisites: el.child("prerequisites")?,
            modules: el.child_strings("modules", "module")?,
            scm: el.child("scm")?,
            issue_management: el.child("issueManagement")?,
            ci_management: el.child("ciManagement")?,
            distribution_management: el.child("distributionManagement")?,
            dependency_management: el.child("dependencyManagement")?,
            dependencies: el.child_list("dependencies", "dependency")?,
            repositories: el.child_list("repositories", "repository")?,
            plugin_repositories: el.child_list("pluginRepositories", "pluginRepository")?,
            build: el.child("build")?,
            reporting: el.child("reporting")?,
            profiles: el.child_list("profiles", "profile")?,
            properties: el.child("properties")?,
        })
    }
}

impl ToElement for Project {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("modelVersion", self.model_version.as_deref());
        el.push_child("parent", self.parent.as_ref());
        el.push_coordinates(&self.coordinates);
        el.push_text("packaging", self.packaging.as_deref());
        el.push_text("name", self.name.as_deref());
        el.push_text("description", self.description.as_deref());
        el.push_text("url", self.url.as_deref());
        el.push_text("inceptionYear", self.inception_year.as_deref());
        el.push_child("organization", self.organization.as_ref());
        el.push_list("licenses", "license", self.licenses.as_deref());
        el.push_list("developers", "developer", self.developers.as_deref());
        el.push_list("contributors", "contributor", self.contributors.as_deref());
        el.push_list("mailingLists", "mailingList", self.mailing_lists.as_deref());
        el.push_child("prerequisites", self.prerequisites.as_ref());
        el.push_strings("modules", "module", self.modules.as_deref());
        el.push_child("scm", self.scm.as_ref());
        el.push_child("issueManagement", self.issue_management.as_ref());
        el.push_child("ciManagement", self.ci_management.as_ref());
        el.push_child("distributionManagement", self.distribution_management.as_ref());
        el.push_child("dependencyManagement", self.dependency_management.as_ref());
        el.push_list("dependencies", "dependency", self.dependencies.as_deref());
        el.push_list("repositories", "repository", self.repositories.as_deref());
        el.push_list(
            "pluginRepositories",
            "pluginRepository",
            self.plugin_repositories.as_deref(),
        );
        el.push_child("build", self.build.as_ref());
        el.push_child("reporting", self.reporting.as_ref());
        el.push_list("profiles", "profile", self.profiles.as_deref());
        el.push_child("properties", self.properties.as_ref());
        el
    }
}

impl FromElement for Parent {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Parent {
            coordinates: el.coordinates(),
            relative_path: el.child_text("relativePath"),
        })
    }
}

impl ToElement for Parent {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_coordinates(&self.coordinates);
        el.push_text("relativePath", self.relative_path.as_deref());
        el
    }
}

impl FromElement for Organization {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Organization {
            name: el.child_text("name"),
            url: el.child_text("url"),
        })
    }
}

impl ToElement for Organization {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("name", self.name.as_deref());
        el.push_text("url", self.url.as_deref());
        el
    }
}

impl FromElement for License {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(License {
            name: el.child_text("name"),
            url: el.child_text("url"),
            distribution: el.child_text("distribution"),
            comments: el.child_text("comments"),
        })
    }
}

impl ToElement for License {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("name", self.name.as_deref());
        el.push_text("url", self.url.as_deref());
        el.push_text("distribution", self.distribution.as_deref());
        el.push_text("comments", self.comments.as_deref());
        el
    }
}

impl FromElement for MailingList {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(MailingList {
            name: el.child_text("name"),
            subscribe: el.child_text("subscribe"),
            unsubscribe: el.child_text("unsubscribe"),
            post: el.child_text("post"),
            archive: el.child_text("archive"),
            other_archives: el.child_strings("otherArchives", "otherArchive")?,
        })
    }
}

impl ToElement for MailingList {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("name", self.name.as_deref());
        el.push_text("subscribe", self.subscribe.as_deref());
        el.push_text("unsubscribe", self.unsubscribe.as_deref());
        el.push_text("post", self.post.as_deref());
        el.push_text("archive", self.archive.as_deref());
        el.push_strings("otherArchives", "otherArchive", self.other_archives.as_deref());
        el
    }
}

impl FromElement for Prerequisites {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Prerequisites {
            maven: el.child_text("maven"),
        })
    }
}

impl ToElement for Prerequisites {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("maven", self.maven.as_deref());
        el
    }
}

impl FromElement for Scm {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Scm {
            connection: el.child_text("connection"),
            developer_connection: el.child_text("developerConnection"),
            tag: el.child_text("tag"),
            url: el.child_text("url"),
        })
    }
}

impl ToElement for Scm {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("connection", self.connection.as_deref());
        el.push_text("developerConnection", self.developer_connection.as_deref());
        el.push_text("tag", self.tag.as_deref());
        el.push_text("url", self.url.as_deref());
        el
    }
}

impl FromElement for IssueManagement {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(IssueManagement {
            system: el.child_text("system"),
            url: el.child_text("url"),
        })
    }
}

impl ToElement for IssueManagement {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("system", self.system.as_deref());
        el.push_text("url", self.url.as_deref());
        el
    }
}

impl FromElement for CiManagement {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(CiManagement {
            system: el.child_text("system"),
            url: el.child_text("url"),
            notifiers: el.child_list("notifiers", "notifier")?,
        })
    }
}

impl ToElement for CiManagement {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("system", self.system.as_deref());
        el.push_text("url", self.url.as_deref());
        el.push_list("notifiers", "notifier", self.notifiers.as_deref());
        el
    }
}

impl FromElement for Notifier {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Notifier {
            notifier_type: el.child_text("type"),
            send_on_error: el.child_bool("sendOnError")?,
            send_on_failure: el.child_bool("sendOnFailure")?,
            send_on_success: el.child_bool("sendOnSuccess")?,
            send_on_warning: el.child_bool("sendOnWarning")?,
            address: el.child_text("address"),
            configuration: el.child("configuration")?,
        })
    }
}

impl ToElement for Notifier {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("type", self.notifier_type.as_deref());
        el.push_bool("sendOnError", self.send_on_error);
        el.push_bool("sendOnFailure", self.send_on_failure);
        el.push_bool("sendOnSuccess", self.send_on_success);
        el.push_bool("sendOnWarning", self.send_on_warning);
        el.push_text("address", self.address.as_deref());
        el.push_child("configuration", self.configuration.as_ref());
        el
    }
}

use pomkit_core::repository::{
    DistributionManagement, PluginRepository, Relocation, Repository, RepositoryPolicy, Site,
};

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

impl FromElement for Repository {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Repository {
            unique_version: el.child_bool("uniqueVersion")?,
            releases: el.child("releases")?,
            snapshots: el.child("snapshots")?,
            id: el.child_text("id"),
            name: el.child_text("name"),
            url: el.child_text("url"),
            layout: el.child_text("layout"),
        })
    }
}

impl ToElement for Repository {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_bool("uniqueVersion", self.unique_version);
        el.push_child("releases", self.releases.as_ref());
        el.push_child("snapshots", self.snapshots.as_ref());
        el.push_text("id", self.id.as_deref());
        el.push_text("name", self.name.as_deref());
        el.push_text("url", self.url.as_deref());
        el.push_text("layout", self.layout.as_deref());
        el
    }
}

impl FromElement for PluginRepository {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(PluginRepository {
            releases: el.child("releases")?,
            snapshots: el.child("snapshots")?,
            id: el.child_text("id"),
            name: el.child_text("name"),
            url: el.child_text("url"),
            layout: el.child_text("layout"),
        })
    }
}

impl ToElement for PluginRepository {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_child("releases", self.releases.as_ref());
        el.push_child("snapshots", self.snapshots.as_ref());
        el.push_text("id", self.id.as_deref());
        el.push_text("name", self.name.as_deref());
        el.push_text("url", self.url.as_deref());
        el.push_text("layout", self.layout.as_deref());
        el
    }
}

impl FromElement for RepositoryPolicy {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(RepositoryPolicy {
            enabled: el.child_text("enabled"),
            update_policy: el.child_text("updatePolicy"),
            checksum_policy: el.child_text("checksumPolicy"),
        })
    }
}

impl ToElement for RepositoryPolicy {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("enabled", self.enabled.as_deref());
        el.push_text("updatePolicy", self.update_policy.as_deref());
        el.push_text("checksumPolicy", self.checksum_policy.as_deref());
        el
    }
}

impl FromElement for DistributionManagement {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DistributionManagement {
            repository: el.child("repository")?,
            snapshot_repository: el.child("snapshotRepository")?,
            site: el.child("site")?,
            download_url: el.child_text("downloadUrl"),
            relocation: el.child("relocation")?,
            status: el.child_text("status"),
        })
    }
}

impl ToElement for DistributionManagement {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_child("repository", self.repository.as_ref());
        el.push_child("snapshotRepository", self.snapshot_repository.as_ref());
        el.push_child("site", self.site.as_ref());
        el.push_text("downloadUrl", self.download_url.as_deref());
        el.push_child("relocation", self.relocation.as_ref());
        el.push_text("status", self.status.as_deref());
        el
    }
}

impl FromElement for Site {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Site {
            id: el.child_text("id"),
            name: el.child_text("name"),
            url: el.child_text("url"),
        })
    }
}

impl ToElement for Site {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("id", self.id.as_deref());
        el.push_text("name", self.name.as_deref());
        el.push_text("url", self.url.as_deref());
        el
    }
}

impl FromElement for Relocation {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Relocation {
            coordinates: el.coordinates(),
            message: el.child_text("message"),
        })
    }
}

impl ToElement for Relocation {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_coordinates(&self.coordinates);
        el.push_text("message", self.message.as_deref());
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_policies() {
        let el = Element::parse(
            r#"<repository>
                <releases><enabled>true</enabled></releases>
                <snapshots><enabled>false</enabled><updatePolicy>never</updatePolicy></snapshots>
                <id>central</id>
                <url>https://repo.example.org/maven2</url>
            </repository>"#,
        )
        .unwrap();

        let repo = Repository::from_element(&el).unwrap();
        assert_eq!(repo.id.as_deref(), Some("central"));
        assert_eq!(repo.releases.as_ref().and_then(|p| p.is_enabled()), Some(true));
        let snapshots = repo.snapshots.as_ref().unwrap();
        assert_eq!(snapshots.is_enabled(), Some(false));
        assert_eq!(snapshots.update_policy.as_deref(), Some("never"));
        assert_eq!(repo.unique_version, None);
        assert_eq!(repo.layout, None);
    }

    #[test]
    fn test_distribution_management() {
        let el = Element::parse(
            r#"<distributionManagement>
                <repository><uniqueVersion>true</uniqueVersion><id>releases</id></repository>
                <snapshotRepository><uniqueVersion>false</uniqueVersion><id>snapshots</id></snapshotRepository>
                <site><id>site</id><url>scp://host/site</url></site>
                <downloadUrl>https://dl</downloadUrl>
                <relocation><groupId>new.group</groupId><message>moved</message></relocation>
                <status>deployed</status>
            </distributionManagement>"#,
        )
        .unwrap();

        let dm = DistributionManagement::from_element(&el).unwrap();
        assert_eq!(dm.repository.as_ref().unwrap().unique_version, Some(true));
        assert_eq!(dm.snapshot_repository.as_ref().unwrap().unique_version, Some(false));
        assert_eq!(dm.site.as_ref().unwrap().url.as_deref(), Some("scp://host/site"));
        let relocation = dm.relocation.as_ref().unwrap();
        assert_eq!(relocation.coordinates.group_id.as_deref(), Some("new.group"));
        assert_eq!(relocation.coordinates.artifact_id, None);
        assert_eq!(relocation.message.as_deref(), Some("moved"));

        let round_trip = DistributionManagement::from_element(&dm.to_element("distributionManagement")).unwrap();
        assert_eq!(round_trip, dm);
    }
}

use std::io::Write;

use pomkit_core::build::{BuildBase, Plugin};
use pomkit_core::dependency::Dependency;
use pomkit_core::repository::{DistributionManagement, RepositoryPolicy};
use pomkit_core::{Coordinates, Project, Properties};
use pomkit_xml::{EncodeOptions, from_path, from_str, to_string};

const FIXTURE: &str = include_str!("fixtures/project.xml");

fn project() -> Project {
    from_str(FIXTURE).unwrap()
}

fn assert_key_values(bag: Option<&Properties>) {
    let bag = bag.expect("bag present");
    assert_eq!(bag.len(), 3);
    assert_eq!(bag.get("key"), Some("value"));
    assert_eq!(bag.get("key2"), Some("value2"));
    assert_eq!(bag.get("key3"), Some("value3"));
}

fn assert_tag_coordinates(coordinates: &Coordinates) {
    assert_eq!(coordinates.group_id.as_deref(), Some("groupId"));
    assert_eq!(coordinates.artifact_id.as_deref(), Some("artifactId"));
    assert_eq!(coordinates.version.as_deref(), Some("version"));
}

fn assert_dependency(dep: &Dependency) {
    assert_tag_coordinates(&dep.coordinates);
    assert_eq!(dep.dependency_type.as_deref(), Some("type"));
    assert_eq!(dep.classifier.as_deref(), Some("classifier"));
    assert_eq!(dep.scope.as_deref(), Some("scope"));
    assert_eq!(dep.system_path.as_deref(), Some("systemPath"));
    assert_eq!(dep.optional.as_deref(), Some("optional"));

    let exclusions = dep.exclusions.as_ref().unwrap();
    assert_eq!(exclusions.len(), 1);
    assert_eq!(exclusions[0].group_id.as_deref(), Some("groupId"));
    assert_eq!(exclusions[0].artifact_id.as_deref(), Some("artifactId"));
}

fn assert_single_dependency(deps: Option<&Vec<Dependency>>) {
    let deps = deps.unwrap();
    assert_eq!(deps.len(), 1);
    assert_dependency(&deps[0]);
}

fn assert_policy(policy: Option<&RepositoryPolicy>) {
    let policy = policy.unwrap();
    assert_eq!(policy.enabled.as_deref(), Some("enabled"));
    assert_eq!(policy.update_policy.as_deref(), Some("updatePolicy"));
    assert_eq!(policy.checksum_policy.as_deref(), Some("checksumPolicy"));
    assert_eq!(policy.is_enabled(), None);
}

fn assert_plugin(plugin: &Plugin) {
    assert_tag_coordinates(&plugin.coordinates);
    assert_eq!(plugin.extensions.as_deref(), Some("extensions"));
    assert_eq!(plugin.inherited.as_deref(), Some("inherited"));
    assert_key_values(plugin.configuration.as_ref());

    let executions = plugin.executions.as_ref().unwrap();
    assert_eq!(executions.len(), 1);
    let execution = &executions[0];
    assert_eq!(execution.id.as_deref(), Some("id"));
    assert_eq!(execution.phase.as_deref(), Some("phase"));
    assert_eq!(execution.goals, Some(vec!["goal".to_string()]));
    assert_eq!(execution.inherited.as_deref(), Some("inherited"));
    assert_key_values(execution.configuration.as_ref());

    assert_single_dependency(plugin.dependencies.as_ref());
}

fn assert_build_base(base: &BuildBase) {
    assert_eq!(base.default_goal.as_deref(), Some("defaultGoal"));
    assert_eq!(base.directory.as_deref(), Some("directory"));
    assert_eq!(base.final_name.as_deref(), Some("finalName"));
    assert_eq!(base.filters, Some(vec!["filter1".to_string()]));

    for resources in [base.resources.as_ref(), base.test_resources.as_ref()] {
        let resources = resources.unwrap();
        assert_eq!(resources.len(), 1);
        let resource = &resources[0];
        assert_eq!(resource.target_path.as_deref(), Some("targetPath"));
        assert_eq!(resource.filtering.as_deref(), Some("filtering"));
        assert_eq!(resource.directory.as_deref(), Some("directory"));
        assert_eq!(resource.includes, Some(vec!["include".to_string()]));
        assert_eq!(resource.excludes, Some(vec!["exclude".to_string()]));
    }

    let managed = base
        .plugin_management
        .as_ref()
        .and_then(|pm| pm.plugins.as_ref())
        .unwrap();
    assert_eq!(managed.len(), 1);
    assert_plugin(&managed[0]);

    let plugins = base.plugins.as_ref().unwrap();
    assert_eq!(plugins.len(), 1);
    assert_plugin(&plugins[0]);
}

fn assert_distribution(dm: &DistributionManagement) {
    assert_eq!(dm.download_url.as_deref(), Some("downloadUrl"));
    assert_eq!(dm.status.as_deref(), Some("status"));

    for repo in [dm.repository.as_ref(), dm.snapshot_repository.as_ref()] {
        let repo = repo.unwrap();
        assert_eq!(repo.unique_version, Some(true));
        assert_eq!(repo.id.as_deref(), Some("id"));
        assert_eq!(repo.name.as_deref(), Some("name"));
        assert_eq!(repo.url.as_deref(), Some("url"));
        assert_eq!(repo.layout.as_deref(), Some("layout"));
        assert_policy(repo.releases.as_ref());
        assert_policy(repo.snapshots.as_ref());
    }

    let relocation = dm.relocation.as_ref().unwrap();
    assert_tag_coordinates(&relocation.coordinates);
    assert_eq!(relocation.message.as_deref(), Some("message"));

    let site = dm.site.as_ref().unwrap();
    assert_eq!(site.id.as_deref(), Some("id"));
    assert_eq!(site.name.as_deref(), Some("name"));
    assert_eq!(site.url.as_deref(), Some("url"));
}

#[test]
fn test_parent() {
    let project = project();
    let parent = project.parent.as_ref().unwrap();
    assert_eq!(parent.coordinates.group_id.as_deref(), Some("com.test"));
    assert_eq!(parent.coordinates.artifact_id.as_deref(), Some("test-application"));
    assert_eq!(parent.coordinates.version.as_deref(), Some("1.0.0"));
    assert_eq!(parent.relative_path.as_deref(), Some("../pom.xml"));
}

#[test]
fn test_project_fields() {
    let project = project();
    assert_eq!(project.model_version.as_deref(), Some("4.0.0"));
    assert_eq!(project.group_id(), Some("com.test"));
    assert_eq!(project.artifact_id(), Some("test-application"));
    assert_eq!(project.version(), Some("1.0.0"));
    assert_eq!(project.packaging.as_deref(), Some("war"));
    assert_eq!(project.name.as_deref(), Some("pomkit-test"));
    assert_eq!(project.description.as_deref(), Some("descriptor mapping test"));
    assert_eq!(project.url.as_deref(), Some("testUrl"));
    assert_eq!(project.inception_year.as_deref(), Some("2020"));
    assert_eq!(
        project.modules,
        Some(vec!["module1".to_string(), "module2".to_string()])
    );
    assert_eq!(
        project.coordinates.repository_path().as_deref(),
        Some("com/test/test-application/1.0.0/test-application-1.0.0")
    );
}

#[test]
fn test_organization_and_licenses() {
    let project = project();
    let org = project.organization.as_ref().unwrap();
    assert_eq!(org.name.as_deref(), Some("name"));
    assert_eq!(org.url.as_deref(), Some("url"));

    let licenses = project.licenses.as_ref().unwrap();
    assert_eq!(licenses.len(), 1);
    assert_eq!(licenses[0].name.as_deref(), Some("name"));
    assert_eq!(licenses[0].url.as_deref(), Some("url"));
    assert_eq!(licenses[0].distribution.as_deref(), Some("manual"));
    assert_eq!(licenses[0].comments.as_deref(), Some("comments"));
}

#[test]
fn test_developers_and_contributors() {
    let project = project();

    let developers = project.developers.as_ref().unwrap();
    assert_eq!(developers.len(), 1);
    assert_eq!(developers[0].id.as_deref(), Some("id"));

    let contributors = project.contributors.as_ref().unwrap();
    assert_eq!(contributors.len(), 1);

    for actor in [&developers[0].actor, &contributors[0].actor] {
        assert_eq!(actor.name.as_deref(), Some("name"));
        assert_eq!(actor.email.as_deref(), Some("email"));
        assert_eq!(actor.url.as_deref(), Some("url"));
        assert_eq!(actor.organization.as_deref(), Some("organization"));
        assert_eq!(actor.organization_url.as_deref(), Some("organizationUrl"));
        assert_eq!(actor.timezone.as_deref(), Some("+1"));
        assert_eq!(
            actor.roles,
            Some(vec!["role1".to_string(), "role2".to_string()])
        );
        assert_key_values(actor.properties.as_ref());
    }
}

#[test]
fn test_mailing_lists_and_prerequisites() {
    let project = project();
    let lists = project.mailing_lists.as_ref().unwrap();
    assert_eq!(lists.len(), 1);
    let list = &lists[0];
    assert_eq!(list.name.as_deref(), Some("name"));
    assert_eq!(list.subscribe.as_deref(), Some("subscribe"));
    assert_eq!(list.unsubscribe.as_deref(), Some("unsubscribe"));
    assert_eq!(list.post.as_deref(), Some("post"));
    assert_eq!(list.archive.as_deref(), Some("archive"));
    assert_eq!(
        list.other_archives,
        Some(vec!["archive1".to_string(), "archive2".to_string()])
    );

    assert_eq!(
        project.prerequisites.as_ref().and_then(|p| p.maven.as_deref()),
        Some("2.0")
    );
}

#[test]
fn test_scm_issue_and_ci_management() {
    let project = project();

    let scm = project.scm.as_ref().unwrap();
    assert_eq!(scm.connection.as_deref(), Some("connection"));
    assert_eq!(scm.developer_connection.as_deref(), Some("developerConnection"));
    assert_eq!(scm.tag.as_deref(), Some("tag"));
    assert_eq!(scm.url.as_deref(), Some("url"));

    let issues = project.issue_management.as_ref().unwrap();
    assert_eq!(issues.system.as_deref(), Some("system"));
    assert_eq!(issues.url.as_deref(), Some("url"));

    let ci = project.ci_management.as_ref().unwrap();
    assert_eq!(ci.system.as_deref(), Some("system"));
    assert_eq!(ci.url.as_deref(), Some("url"));

    let notifiers = ci.notifiers.as_ref().unwrap();
    assert_eq!(notifiers.len(), 1);
    let notifier = &notifiers[0];
    assert_eq!(notifier.notifier_type.as_deref(), Some("type"));
    assert_eq!(notifier.address.as_deref(), Some("address"));
    assert_eq!(notifier.send_on_error, Some(true));
    assert_eq!(notifier.send_on_failure, Some(true));
    assert_eq!(notifier.send_on_success, Some(true));
    assert_eq!(notifier.send_on_warning, Some(true));
    assert_key_values(notifier.configuration.as_ref());
}

#[test]
fn test_distribution_management() {
    let project = project();
    assert_distribution(project.distribution_management.as_ref().unwrap());
}

#[test]
fn test_dependencies() {
    let project = project();
    assert_single_dependency(project.dependencies.as_ref());
    assert_single_dependency(
        project
            .dependency_management
            .as_ref()
            .and_then(|dm| dm.dependencies.as_ref()),
    );
    assert_eq!(project.dependencies().count(), 1);
}

#[test]
fn test_repositories() {
    let project = project();

    let repos = project.repositories.as_ref().unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].id.as_deref(), Some("id"));
    assert_eq!(repos[0].layout.as_deref(), Some("layout"));
    assert_eq!(repos[0].unique_version, None);
    assert_policy(repos[0].releases.as_ref());
    assert_policy(repos[0].snapshots.as_ref());

    let plugin_repos = project.plugin_repositories.as_ref().unwrap();
    assert_eq!(plugin_repos.len(), 1);
    assert_eq!(plugin_repos[0].name.as_deref(), Some("name"));
    assert_eq!(plugin_repos[0].url.as_deref(), Some("url"));
    assert_policy(plugin_repos[0].releases.as_ref());
    assert_policy(plugin_repos[0].snapshots.as_ref());
}

#[test]
fn test_build() {
    let project = project();
    let build = project.build.as_ref().unwrap();
    assert_eq!(build.source_directory.as_deref(), Some("sourceDirectory"));
    assert_eq!(build.script_source_directory.as_deref(), Some("scriptSourceDirectory"));
    assert_eq!(build.test_source_directory.as_deref(), Some("testSourceDirectory"));
    assert_eq!(build.output_directory.as_deref(), Some("outputDirectory"));
    assert_eq!(build.test_output_directory.as_deref(), Some("testOutputDirectory"));

    let extensions = build.extensions.as_ref().unwrap();
    assert_eq!(extensions.len(), 1);
    assert_tag_coordinates(&extensions[0].coordinates);

    assert_build_base(&build.base);
}

#[test]
fn test_reporting() {
    let project = project();
    let reporting = project.reporting.as_ref().unwrap();
    assert_eq!(reporting.exclude_defaults.as_deref(), Some("excludeDefaults"));
    assert_eq!(reporting.output_directory.as_deref(), Some("outputDirectory"));

    let plugins = reporting.plugins.as_ref().unwrap();
    assert_eq!(plugins.len(), 1);
    let plugin = &plugins[0];
    assert_tag_coordinates(&plugin.coordinates);
    assert_eq!(plugin.inherited.as_deref(), Some("inherited"));
    assert_key_values(plugin.configuration.as_ref());

    let sets = plugin.report_sets.as_ref().unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].id.as_deref(), Some("id"));
    assert_eq!(sets[0].inherited.as_deref(), Some("inherited"));
    assert_eq!(sets[0].reports, Some(vec!["report".to_string()]));
    assert_key_values(sets[0].configuration.as_ref());
}

#[test]
fn test_profile() {
    let project = project();
    let profiles = project.profiles.as_ref().unwrap();
    assert_eq!(profiles.len(), 1);
    let profile = project.profile("id").unwrap();

    let activation = profile.activation.as_ref().unwrap();
    assert_eq!(activation.active_by_default, Some(true));
    assert_eq!(activation.jdk.as_deref(), Some("jdk"));
    let os = activation.os.as_ref().unwrap();
    assert_eq!(os.name.as_deref(), Some("name"));
    assert_eq!(os.family.as_deref(), Some("family"));
    assert_eq!(os.arch.as_deref(), Some("arch"));
    assert_eq!(os.version.as_deref(), Some("version"));
    let property = activation.property.as_ref().unwrap();
    assert_eq!(property.name.as_deref(), Some("name"));
    assert_eq!(property.value.as_deref(), Some("value"));
    let file = activation.file.as_ref().unwrap();
    assert_eq!(file.missing.as_deref(), Some("missing"));
    assert_eq!(file.exists.as_deref(), Some("exists"));

    assert_build_base(profile.build.as_ref().unwrap());
    assert_eq!(profile.modules, Some(vec!["module1".to_string()]));
    assert_distribution(profile.distribution_management.as_ref().unwrap());
    assert_key_values(profile.properties.as_ref());
    assert_single_dependency(
        profile
            .dependency_management
            .as_ref()
            .and_then(|dm| dm.dependencies.as_ref()),
    );
    assert_single_dependency(profile.dependencies.as_ref());
    assert_eq!(profile.repositories.as_ref().map(Vec::len), Some(1));
    assert_eq!(profile.plugin_repositories.as_ref().map(Vec::len), Some(1));

    let reporting = profile.reporting.as_ref().unwrap();
    let plugin = &reporting.plugins.as_ref().unwrap()[0];
    assert_key_values(plugin.configuration.as_ref());
    assert_key_values(plugin.report_sets.as_ref().unwrap()[0].configuration.as_ref());
}

#[test]
fn test_project_properties() {
    let project = project();
    assert_key_values(project.properties.as_ref());
    assert_eq!(project.property("key2"), Some("value2"));
}

#[test]
fn test_round_trip_with_added_plugin() {
    let mut project = project();
    let ignite = Plugin {
        configuration: Some(Properties::new()),
        ..Plugin::new(Coordinates::new("org.apache.ignite", "ignite-core", "2.14.0"))
    };
    project
        .build
        .as_mut()
        .unwrap()
        .base
        .plugins
        .get_or_insert_with(Vec::new)
        .push(ignite);

    for options in [
        EncodeOptions::compact(),
        EncodeOptions::compact().with_prefix("  ").with_indent("    "),
        EncodeOptions::pretty(),
    ] {
        let xml = to_string(&project, &options).unwrap();
        let parsed = from_str(&xml).unwrap();
        assert_eq!(parsed, project);
    }

    let xml = to_string(&project, &EncodeOptions::compact()).unwrap();
    assert!(xml.contains(
        "<plugin><groupId>org.apache.ignite</groupId><artifactId>ignite-core</artifactId><version>2.14.0</version><configuration></configuration></plugin>"
    ));
}

#[test]
fn test_reencoding_is_stable() {
    let first = to_string(&project(), &EncodeOptions::pretty()).unwrap();
    let second = to_string(&from_str(&first).unwrap(), &EncodeOptions::pretty()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let loaded = from_path(file.path()).unwrap();
    assert_eq!(loaded, project());
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = from_path(dir.path().join("pom.xml"));
    assert!(matches!(result, Err(pomkit_xml::XmlError::Io(_))));
}

#[test]
fn test_expand_with_fixture_properties() {
    let mut project = project();
    project.set_property("combined", "${key}-${key2}");
    assert_eq!(project.expand("${combined}").unwrap(), "value-value2");
    assert_eq!(
        project.expand_with_builtins("${project.artifactId}:${project.version}").unwrap(),
        "test-application:1.0.0"
    );
}

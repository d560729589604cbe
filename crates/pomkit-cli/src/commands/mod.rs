//! CLI command implementations.

pub mod expand;
pub mod fmt;

use std::path::Path;

use anyhow::{Context, Result};
use pomkit_core::{Coordinates, Project};

pub(crate) fn load(path: &Path) -> Result<Project> {
    pomkit_xml::from_path(path).with_context(|| format!("failed to load {}", path.display()))
}

pub fn validate(path: &Path) -> Result<()> {
    match pomkit_xml::from_path(path) {
        Ok(project) => {
            println!("{} is valid ({})", path.display(), project.coordinates);
            Ok(())
        }
        Err(e) if e.is_structural() => {
            println!("Descriptor error: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

pub fn show(path: &Path, json: bool) -> Result<()> {
    let project = load(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        print!("{}", summary(&project));
    }
    Ok(())
}

fn summary(project: &Project) -> String {
    let mut lines = vec![effective_coordinates(project).to_string()];

    if let Some(packaging) = &project.packaging {
        lines.push(format!("packaging: {packaging}"));
    }
    if let Some(name) = &project.name {
        lines.push(format!("name: {name}"));
    }
    if let Some(parent) = &project.parent {
        lines.push(format!("parent: {}", parent.coordinates));
    }
    if let Some(modules) = &project.modules {
        lines.push(format!("modules: {}", modules.join(", ")));
    }
    lines.push(format!("dependencies: {}", project.dependencies().count()));
    if let Some(profiles) = &project.profiles {
        let ids: Vec<&str> = profiles.iter().filter_map(|p| p.id.as_deref()).collect();
        lines.push(format!("profiles: {}", ids.join(", ")));
    }
    if let Some(props) = &project.properties {
        lines.push(format!("properties: {}", props.len()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The project's coordinates with group and version inherited from the
/// parent when omitted.
fn effective_coordinates(project: &Project) -> Coordinates {
    Coordinates {
        group_id: project.effective_group_id().map(str::to_string),
        artifact_id: project.coordinates.artifact_id.clone(),
        version: project.effective_version().map(str::to_string),
    }
}

pub fn path(path: &Path) -> Result<()> {
    let project = load(path)?;
    for line in repository_paths(&project) {
        println!("{line}");
    }
    Ok(())
}

fn repository_paths(project: &Project) -> Vec<String> {
    let mut lines = Vec::new();

    let coordinates = effective_coordinates(project);
    match coordinates.repository_path() {
        Some(base) => {
            let packaging = project.packaging.as_deref().unwrap_or("jar");
            lines.push(format!("{base}.{packaging}"));
        }
        None => tracing::warn!(project = %coordinates, "Project coordinates are incomplete"),
    }

    for dep in project.dependencies() {
        match dep.artifact_path() {
            Some(path) => lines.push(path),
            None => tracing::warn!(dependency = %dep.coordinates, "Skipping dependency without full coordinates"),
        }
    }
    lines
}

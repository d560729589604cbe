use std::path::Path;

use anyhow::{Context, Result};
use pomkit_core::variables::{self, ProjectResolver, Resolver};
use pomkit_core::{Project, Properties};
use tracing::warn;

/// Parse a `-D key=value` argument.
pub fn parse_define(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {arg:?}")),
    }
}

pub fn run(path: &Path, template: &str, builtins: bool, defines: &[(String, String)]) -> Result<()> {
    let project = super::load(path)?;
    println!("{}", expand_template(&project, template, builtins, defines)?);
    Ok(())
}

fn expand_template(
    project: &Project,
    template: &str,
    builtins: bool,
    defines: &[(String, String)],
) -> Result<String> {
    if builtins {
        let resolver = defines
            .iter()
            .fold(ProjectResolver::new(project), |r, (k, v)| r.with_property(k, v));
        expand_with(template, &resolver)
    } else {
        let mut props = project.properties.clone().unwrap_or_default();
        props.extend(defines.iter().cloned());
        expand_with(template, &props)
    }
}

fn expand_with<R: Resolver>(template: &str, resolver: &R) -> Result<String> {
    for name in variables::unresolved_references(template, resolver) {
        warn!(variable = %name, "Unresolved placeholder expands to an empty string");
    }
    variables::expand(template, resolver).context("failed to expand template")
}

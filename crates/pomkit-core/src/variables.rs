//! Variable expansion for descriptor values.
//!
//! Placeholders look like `${name}` and are resolved through a [`Resolver`],
//! by default the project's property bag. A resolved value that contains
//! further placeholders is expanded before substitution, so
//! `{a: "${b}", b: "x"}` turns `${a}` into `x`.
//!
//! Missing keys expand to the empty string. This matches the descriptor
//! tooling convention but silently drops data; use
//! [`unresolved_references`] to find such keys first.
//!
//! [`ProjectResolver`] adds the built-in names:
//! - `${project.groupId}`, `${project.artifactId}`, `${project.version}`
//! - `${project.packaging}`, `${project.name}`, `${project.description}`
//! - `${project.url}`, `${project.modelVersion}`
//! - `${project.parent.groupId}`, `${project.parent.artifactId}`,
//!   `${project.parent.version}`
//!
//! `pom.` is accepted in place of `project.`.
//!
//! `${}` and a `${` with no closing brace are not placeholders and stay in
//! the output as written. Shell-style expanders drop them instead.

use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use crate::project::Project;
use crate::{Error, Properties, Result};

/// Maximum nesting of transitive resolutions before expansion fails.
pub const MAX_EXPANSION_DEPTH: usize = 32;

/// Upper bound in bytes for any expanded string.
pub const MAX_EXPANDED_LEN: usize = 1 << 20;

// Regex for matching ${...} placeholders
static VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Source of placeholder values.
pub trait Resolver {
    /// Value for `name`, or `None` if the name is unknown.
    fn resolve(&self, name: &str) -> Option<String>;
}

impl Resolver for Properties {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl Resolver for HashMap<String, String> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Resolver for BTreeMap<String, String> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, name: &str) -> Option<String> {
        (**self).resolve(name)
    }
}

/// Expand every `${name}` in `template`.
///
/// Fails with [`Error::CyclicReference`] when a key refers back to itself
/// (directly or transitively) or nesting exceeds [`MAX_EXPANSION_DEPTH`],
/// and with [`Error::ExpansionTooLarge`] when any expanded string grows past
/// [`MAX_EXPANDED_LEN`] bytes.
pub fn expand<R: Resolver + ?Sized>(template: &str, resolver: &R) -> Result<String> {
    Expansion {
        resolver,
        chain: Vec::new(),
        expanded: HashMap::new(),
    }
    .expand(template)
}

/// State for one [`expand`] call. Each key is expanded at most once.
struct Expansion<'r, R: ?Sized> {
    resolver: &'r R,
    chain: Vec<String>,
    expanded: HashMap<String, String>,
}

impl<R: Resolver + ?Sized> Expansion<'_, R> {
    fn expand(&mut self, template: &str) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut last = 0;

        for caps in VAR_REGEX.captures_iter(template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            output.push_str(&template[last..whole.start()]);
            last = whole.end();

            let value = self.value_of(name.as_str())?;
            output.push_str(&value);
            check_len(&output)?;
        }

        output.push_str(&template[last..]);
        check_len(&output)?;
        Ok(output)
    }

    fn value_of(&mut self, name: &str) -> Result<String> {
        if let Some(done) = self.expanded.get(name) {
            return Ok(done.clone());
        }
        let Some(value) = self.resolver.resolve(name) else {
            return Ok(String::new());
        };
        if !value.contains("${") {
            return Ok(value);
        }

        let revisited = self.chain.iter().any(|k| k == name);
        self.chain.push(name.to_string());
        if revisited || self.chain.len() > MAX_EXPANSION_DEPTH {
            return Err(Error::CyclicReference {
                chain: self.chain.join(" -> "),
            });
        }
        let expanded = self.expand(&value)?;
        self.chain.pop();
        self.expanded.insert(name.to_string(), expanded.clone());
        Ok(expanded)
    }
}

fn check_len(output: &str) -> Result<()> {
    if output.len() > MAX_EXPANDED_LEN {
        return Err(Error::ExpansionTooLarge {
            limit: MAX_EXPANDED_LEN,
        });
    }
    Ok(())
}

/// Placeholder names in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    VAR_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Names reachable from `template` that the resolver cannot answer and
/// that would therefore expand to nothing.
pub fn unresolved_references<R: Resolver + ?Sized>(template: &str, resolver: &R) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    collect_unresolved(template, resolver, &mut seen, &mut missing);
    missing
}

fn collect_unresolved<R: Resolver + ?Sized>(
    template: &str,
    resolver: &R,
    seen: &mut HashSet<String>,
    missing: &mut Vec<String>,
) {
    for name in placeholders(template) {
        if !seen.insert(name.to_string()) {
            continue;
        }
        match resolver.resolve(name) {
            Some(value) => collect_unresolved(&value, resolver, seen, missing),
            None => missing.push(name.to_string()),
        }
    }
}

/// Resolves from extra overrides, then the project's property bag, then the
/// built-in `project.*` names.
#[derive(Debug, Clone)]
pub struct ProjectResolver<'a> {
    project: &'a Project,
    overrides: HashMap<String, String>,
}

impl<'a> ProjectResolver<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            overrides: HashMap::new(),
        }
    }

    /// Add a value that takes precedence over the project's properties.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    fn builtin(&self, name: &str) -> Option<String> {
        let path = name
            .strip_prefix("project.")
            .or_else(|| name.strip_prefix("pom."))?;
        let project = self.project;
        let parent = project.parent.as_ref().map(|p| &p.coordinates);
        let parts: Vec<&str> = path.split('.').collect();

        let value = match parts.as_slice() {
            ["groupId"] => project.effective_group_id(),
            ["artifactId"] => project.artifact_id(),
            ["version"] => project.effective_version(),
            ["packaging"] => project.packaging.as_deref(),
            ["name"] => project.name.as_deref(),
            ["description"] => project.description.as_deref(),
            ["url"] => project.url.as_deref(),
            ["modelVersion"] => project.model_version.as_deref(),
            ["parent", "groupId"] => parent.and_then(|p| p.group_id.as_deref()),
            ["parent", "artifactId"] => parent.and_then(|p| p.artifact_id.as_deref()),
            ["parent", "version"] => parent.and_then(|p| p.version.as_deref()),
            _ => None,
        };
        value.map(str::to_string)
    }
}

impl Resolver for ProjectResolver<'_> {
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(value) = self.overrides.get(name) {
            return Some(value.clone());
        }
        if let Some(value) = self.project.property(name) {
            return Some(value.to_string());
        }
        self.builtin(name)
    }
}

impl Project {
    /// Expand placeholders against the project's property bag only.
    pub fn expand(&self, template: &str) -> Result<String> {
        match &self.properties {
            Some(props) => expand(template, props),
            None => expand(template, &Properties::new()),
        }
    }

    /// Expand placeholders against the property bag and built-in
    /// `project.*` names.
    pub fn expand_with_builtins(&self, template: &str) -> Result<String> {
        expand(template, &ProjectResolver::new(self))
    }

    /// Expand each string in a list.
    pub fn expand_all(&self, templates: &[String]) -> Result<Vec<String>> {
        templates.iter().map(|t| self.expand(t)).collect()
    }

    /// Expand every value in a map, keeping keys as-is.
    pub fn expand_map(&self, map: &HashMap<String, String>) -> Result<HashMap<String, String>> {
        map.iter()
            .map(|(k, v)| Ok((k.clone(), self.expand(v)?)))
            .collect()
    }

    /// Placeholders in `template` that the property bag cannot resolve.
    pub fn unresolved_references(&self, template: &str) -> Vec<String> {
        match &self.properties {
            Some(props) => unresolved_references(template, props),
            None => placeholders(template)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>(),
        }
    }
}

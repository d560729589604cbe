use std::path::Path;

use anyhow::{Context, Result};
use pomkit_xml::EncodeOptions;
use tracing::info;

/// Re-encode a descriptor to stdout or to `output`. Attributes, comments and
/// unknown elements in the input are not carried over.
pub fn run(path: &Path, options: &EncodeOptions, output: Option<&Path>) -> Result<()> {
    let project = super::load(path)?;
    let mut xml = pomkit_xml::to_string(&project, options)?;
    xml.push('\n');

    match output {
        Some(out) => {
            std::fs::write(out, &xml).with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), bytes = xml.len(), "Wrote descriptor");
        }
        None => print!("{xml}"),
    }
    Ok(())
}

//! Descriptor XML mapping for pomkit.
//!
//! This crate handles:
//! - Decoding `<project>` documents into [`pomkit_core::Project`]
//! - Encoding a project back to markup with configurable layout
//! - The open-ended property bag codec
//!
//! ```
//! let project = pomkit_xml::from_str("<project><name>demo</name></project>").unwrap();
//! assert_eq!(project.name.as_deref(), Some("demo"));
//!
//! let xml = pomkit_xml::to_string(&project, &pomkit_xml::EncodeOptions::compact()).unwrap();
//! assert_eq!(xml, "<project><name>demo</name></project>");
//! ```

pub mod element;
pub mod error;
pub mod properties;
pub mod schema;
pub mod writer;

use std::io::{Read, Write};
use std::path::Path;

use pomkit_core::Project;
use tracing::debug;

pub use element::Element;
pub use error::{XmlError, XmlResult};
pub use properties::{decode_properties, encode_properties};
pub use schema::{FromElement, ToElement};
pub use writer::EncodeOptions;

/// Tag of the document root.
pub const ROOT_ELEMENT: &str = "project";

/// Decode a project from a UTF-8 string.
pub fn from_str(input: &str) -> XmlResult<Project> {
    decode(Element::parse(input)?)
}

/// Decode a project from raw bytes, honoring a BOM or declared encoding.
pub fn from_slice(input: &[u8]) -> XmlResult<Project> {
    decode(Element::parse_bytes(input)?)
}

pub fn from_reader<R: Read>(mut reader: R) -> XmlResult<Project> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_slice(&buf)
}

pub fn from_path(path: impl AsRef<Path>) -> XmlResult<Project> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading descriptor");
    from_slice(&std::fs::read(path)?)
}

fn decode(root: Element) -> XmlResult<Project> {
    debug!(
        root = %root.name,
        elements = root.count(),
        "Decoding descriptor"
    );
    Project::from_element(&root)
}

/// Encode a project under a `<project>` root.
pub fn to_string(project: &Project, options: &EncodeOptions) -> XmlResult<String> {
    let root = project.to_element(ROOT_ELEMENT);
    let xml = writer::write_to_string(&root, options)?;
    debug!(
        elements = root.count(),
        bytes = xml.len(),
        "Encoded descriptor"
    );
    Ok(xml)
}

pub fn to_vec(project: &Project, options: &EncodeOptions) -> XmlResult<Vec<u8>> {
    Ok(to_string(project, options)?.into_bytes())
}

pub fn to_writer<W: Write>(mut writer: W, project: &Project, options: &EncodeOptions) -> XmlResult<()> {
    writer.write_all(to_string(project, options)?.as_bytes())?;
    Ok(())
}

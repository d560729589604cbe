//! Descriptor parsing and encoding errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    #[error("end tag </{0}> has no matching start tag")]
    UnmatchedEnd(String),

    #[error("document has no root element")]
    MissingRoot,

    #[error("document has more than one root element: <{0}>")]
    MultipleRoots(String),

    #[error("text outside the root element: {0:?}")]
    TextOutsideRoot(String),

    #[error("<{item}> must be inside <{wrapper}>, found directly under <{parent}>")]
    StrayItem {
        parent: String,
        item: String,
        wrapper: String,
    },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("invalid element name: {0:?}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl XmlError {
    /// True for errors caused by the input document's structure, as opposed
    /// to I/O or encode-time failures.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            XmlError::Syntax(_)
                | XmlError::UnexpectedEof(_)
                | XmlError::UnmatchedEnd(_)
                | XmlError::MissingRoot
                | XmlError::MultipleRoots(_)
                | XmlError::TextOutsideRoot(_)
                | XmlError::StrayItem { .. }
                | XmlError::InvalidValue { .. }
        )
    }
}

pub type XmlResult<T> = std::result::Result<T, XmlError>;

//! Serializing element trees back to markup.

use quick_xml::escape::escape;

use crate::element::Element;
use crate::{XmlError, XmlResult};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Output layout.
///
/// Every line starts with `prefix` followed by `indent` repeated once per
/// nesting level. With both empty the document is written on one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub indent: String,
    pub prefix: String,
    /// Emit an XML declaration before the root element.
    pub declaration: bool,
}

impl EncodeOptions {
    /// Single-line output, no declaration.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Four-space indentation with a declaration.
    pub fn pretty() -> Self {
        Self {
            indent: "    ".to_string(),
            prefix: String::new(),
            declaration: true,
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    fn is_compact(&self) -> bool {
        self.indent.is_empty() && self.prefix.is_empty()
    }
}

/// Serialize `root` to a string.
pub fn write_to_string(root: &Element, options: &EncodeOptions) -> XmlResult<String> {
    let mut writer = TreeWriter {
        out: String::new(),
        options,
        at_start: true,
    };
    if options.declaration {
        writer.line(0);
        writer.out.push_str(DECLARATION);
    }
    writer.element(root, 0)?;
    Ok(writer.out)
}

struct TreeWriter<'a> {
    out: String,
    options: &'a EncodeOptions,
    at_start: bool,
}

impl TreeWriter<'_> {
    fn element(&mut self, element: &Element, depth: usize) -> XmlResult<()> {
        check_name(&element.name)?;

        self.line(depth);
        self.out.push('<');
        self.out.push_str(&element.name);
        self.out.push('>');
        self.out.push_str(&escape(element.text.as_str()));

        if !element.children.is_empty() {
            for child in &element.children {
                self.element(child, depth + 1)?;
            }
            self.line(depth);
        }

        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
        Ok(())
    }

    fn line(&mut self, depth: usize) {
        if self.options.is_compact() {
            return;
        }
        if self.at_start {
            self.at_start = false;
        } else {
            self.out.push('\n');
        }
        self.out.push_str(&self.options.prefix);
        for _ in 0..depth {
            self.out.push_str(&self.options.indent);
        }
    }
}

/// Reject names that would produce malformed markup. Property keys come
/// from callers and are not otherwise checked.
fn check_name(name: &str) -> XmlResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(XmlError::InvalidName(name.to_string()))
    }
}

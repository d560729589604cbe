//! Generic element tree built from markup.
//!
//! The tree keeps element names and text only; attributes, comments,
//! processing instructions and the declaration are dropped.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::{XmlError, XmlResult};

/// One markup element with its direct text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written (e.g., "project", "ns:key").
    pub name: String,
    /// Direct text and CDATA content, unescaped. Whitespace-only text is
    /// dropped from elements that have children.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a leaf element with text content.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Name without a namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children whose local name is `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.local_name() == name)
    }

    /// Last direct child named `name`; later occurrences override earlier ones.
    pub fn last_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().rev().find(|c| c.local_name() == name)
    }

    /// Total number of elements in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }

    /// Parse a UTF-8 document into its root element.
    pub fn parse(input: &str) -> XmlResult<Element> {
        build_tree(Reader::from_str(input))
    }

    /// Parse raw bytes. The encoding is taken from a BOM or the XML
    /// declaration and defaults to UTF-8.
    pub fn parse_bytes(input: &[u8]) -> XmlResult<Element> {
        build_tree(Reader::from_reader(input))
    }
}

fn build_tree(mut reader: Reader<&[u8]>) -> XmlResult<Element> {
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = decode(&reader, start.name().as_ref())?;
                stack.push(Element::new(name));
            }
            Event::Empty(start) => {
                let name = decode(&reader, start.name().as_ref())?;
                attach(&mut stack, &mut root, Element::new(name))?;
            }
            Event::End(end) => {
                let Some(mut element) = stack.pop() else {
                    return Err(XmlError::UnmatchedEnd(decode(&reader, end.name().as_ref())?));
                };
                if !element.children.is_empty() && element.text.trim().is_empty() {
                    element.text.clear();
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(quick_xml::Error::from)?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None => reject_outside_root(&text)?,
                }
            }
            Event::CData(cdata) => {
                let bytes = cdata.into_inner();
                let text = decode(&reader, &bytes)?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None => reject_outside_root(&text)?,
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof(open.name.clone()));
    }
    root.ok_or(XmlError::MissingRoot)
}

fn decode(reader: &Reader<&[u8]>, bytes: &[u8]) -> XmlResult<String> {
    let decoded = reader
        .decoder()
        .decode(bytes)
        .map_err(quick_xml::Error::from)?;
    Ok(decoded.into_owned())
}

/// Only whitespace (and a byte order mark) may appear before or after the
/// root element.
fn reject_outside_root(text: &str) -> XmlResult<()> {
    let stray = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if stray.is_empty() {
        Ok(())
    } else {
        Err(XmlError::TextOutsideRoot(stray.to_string()))
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(XmlError::MultipleRoots(element.name)),
    }
    Ok(())
}

//! Tag bindings between the element tree and the model records.
//!
//! Each record implements [`FromElement`] and [`ToElement`]. Decoding
//! matches children by local name, ignores anything it does not know and
//! resolves repeated singular elements to their last occurrence. Encoding
//! emits fields in schema order and omits absent ones.

mod build;
mod dependency;
mod people;
mod profile;
mod project;
mod reporting;
mod repository;

use pomkit_core::Coordinates;

use crate::element::Element;
use crate::{XmlError, XmlResult};

/// Build a record from the element that holds it.
pub trait FromElement: Sized {
    fn from_element(element: &Element) -> XmlResult<Self>;
}

/// Produce the element for a record under the given tag.
pub trait ToElement {
    fn to_element(&self, name: &str) -> Element;
}

impl Element {
    pub(crate) fn child_text(&self, name: &str) -> Option<String> {
        self.last_child(name).map(|c| c.text.clone())
    }

    pub(crate) fn child_bool(&self, name: &str) -> XmlResult<Option<bool>> {
        self.last_child(name)
            .map(|c| parse_bool(name, &c.text))
            .transpose()
    }

    pub(crate) fn child<T: FromElement>(&self, name: &str) -> XmlResult<Option<T>> {
        self.last_child(name).map(T::from_element).transpose()
    }

    /// Items of a `<wrapper><item/>...</wrapper>` collection. Repeated
    /// wrappers are concatenated in document order.
    pub(crate) fn child_list<T: FromElement>(
        &self,
        wrapper: &str,
        item: &str,
    ) -> XmlResult<Option<Vec<T>>> {
        self.check_stray(wrapper, item)?;
        let mut wrappers = self.children_named(wrapper).peekable();
        if wrappers.peek().is_none() {
            return Ok(None);
        }

        let mut items = Vec::new();
        for element in wrappers {
            for child in element.children_named(item) {
                items.push(T::from_element(child)?);
            }
        }
        Ok(Some(items))
    }

    pub(crate) fn child_strings(&self, wrapper: &str, item: &str) -> XmlResult<Option<Vec<String>>> {
        self.check_stray(wrapper, item)?;
        let mut wrappers = self.children_named(wrapper).peekable();
        if wrappers.peek().is_none() {
            return Ok(None);
        }

        Ok(Some(
            wrappers
                .flat_map(|w| w.children_named(item))
                .map(|c| c.text.clone())
                .collect(),
        ))
    }

    pub(crate) fn coordinates(&self) -> Coordinates {
        Coordinates {
            group_id: self.child_text("groupId"),
            artifact_id: self.child_text("artifactId"),
            version: self.child_text("version"),
        }
    }

    fn check_stray(&self, wrapper: &str, item: &str) -> XmlResult<()> {
        if self.children_named(item).next().is_some() {
            return Err(XmlError::StrayItem {
                parent: self.name.clone(),
                item: item.to_string(),
                wrapper: wrapper.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn push_text(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(Element::with_text(name, value));
        }
    }

    pub(crate) fn push_bool(&mut self, name: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.push(Element::with_text(name, value.to_string()));
        }
    }

    pub(crate) fn push_child<T: ToElement>(&mut self, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.push(value.to_element(name));
        }
    }

    pub(crate) fn push_list<T: ToElement>(&mut self, wrapper: &str, item: &str, values: Option<&[T]>) {
        if let Some(values) = values {
            let mut list = Element::new(wrapper);
            for value in values {
                list.push(value.to_element(item));
            }
            self.push(list);
        }
    }

    pub(crate) fn push_strings(&mut self, wrapper: &str, item: &str, values: Option<&[String]>) {
        if let Some(values) = values {
            let mut list = Element::new(wrapper);
            for value in values {
                list.push(Element::with_text(item, value.as_str()));
            }
            self.push(list);
        }
    }

    pub(crate) fn push_coordinates(&mut self, coordinates: &Coordinates) {
        self.push_text("groupId", coordinates.group_id.as_deref());
        self.push_text("artifactId", coordinates.artifact_id.as_deref());
        self.push_text("version", coordinates.version.as_deref());
    }
}

/// Boolean text forms: 1, t, T, TRUE, true, True and their false
/// counterparts. Surrounding whitespace is ignored and empty text is false.
fn parse_bool(field: &str, text: &str) -> XmlResult<bool> {
    match text.trim() {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        other => Err(XmlError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a boolean, found {other:?}"),
        }),
    }
}

//! Property bag codec.
//!
//! A bag's keys are its child element names, so it cannot use the fixed
//! tag-to-field bindings in [`crate::schema`]. Every immediate child is
//! accepted as a key and its direct text becomes the value; nested markup
//! inside a value is not kept.

use pomkit_core::Properties;

use crate::element::Element;
use crate::schema::{FromElement, ToElement};
use crate::writer::{EncodeOptions, write_to_string};
use crate::XmlResult;

/// Decode the children of a properties-bearing element. Repeated keys keep
/// the last value.
pub fn decode_properties(element: &Element) -> Properties {
    let mut props = Properties::new();
    for child in &element.children {
        props.insert(child.name.clone(), child.text.clone());
    }
    props
}

/// Encode a bag as `<name>` with one child per entry, in key order. An empty
/// bag produces an empty `<name>` element.
pub fn encode_properties(name: &str, props: &Properties) -> Element {
    let mut element = Element::new(name);
    for (key, value) in props.iter() {
        element.push(Element::with_text(key, value));
    }
    element
}

/// Parse a standalone bag such as `<properties><a>1</a></properties>`.
pub fn parse_properties(input: &str) -> XmlResult<Properties> {
    Ok(decode_properties(&Element::parse(input)?))
}

/// Serialize a bag under the given element name.
pub fn properties_to_string(
    name: &str,
    props: &Properties,
    options: &EncodeOptions,
) -> XmlResult<String> {
    write_to_string(&encode_properties(name, props), options)
}

impl FromElement for Properties {
    fn from_element(element: &Element) -> XmlResult<Self> {
        Ok(decode_properties(element))
    }
}

impl ToElement for Properties {
    fn to_element(&self, name: &str) -> Element {
        encode_properties(name, self)
    }
}

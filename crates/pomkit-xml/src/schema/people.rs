use pomkit_core::people::{Actor, Contributor, Developer};

use super::{FromElement, ToElement};
use crate::element::Element;
use crate::XmlResult;

fn decode_actor(el: &Element) -> XmlResult<Actor> {
    Ok(Actor {
        name: el.child_text("name"),
        email: el.child_text("email"),
        url: el.child_text("url"),
        organization: el.child_text("organization"),
        organization_url: el.child_text("organizationUrl"),
        roles: el.child_strings("roles", "role")?,
        timezone: el.child_text("timezone"),
        properties: el.child("properties")?,
    })
}

fn encode_actor(el: &mut Element, actor: &Actor) {
    el.push_text("name", actor.name.as_deref());
    el.push_text("email", actor.email.as_deref());
    el.push_text("url", actor.url.as_deref());
    el.push_text("organization", actor.organization.as_deref());
    el.push_text("organizationUrl", actor.organization_url.as_deref());
    el.push_strings("roles", "role", actor.roles.as_deref());
    el.push_text("timezone", actor.timezone.as_deref());
    el.push_child("properties", actor.properties.as_ref());
}

impl FromElement for Developer {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Developer {
            id: el.child_text("id"),
            actor: decode_actor(el)?,
        })
    }
}

impl ToElement for Developer {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.push_text("id", self.id.as_deref());
        encode_actor(&mut el, &self.actor);
        el
    }
}

impl FromElement for Contributor {
    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Contributor {
            actor: decode_actor(el)?,
        })
    }
}

impl ToElement for Contributor {
    fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        encode_actor(&mut el, &self.actor);
        el
    }
}

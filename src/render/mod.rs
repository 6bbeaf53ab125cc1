//! Reference renderer for the generated-string contract.
//!
//! Generated builders turn catalog entries into HTML attributes of the form
//! `data-<key>[:<subkey>][__<modifier>...]="<expression>"`. `Element` is the
//! minimal element model needed to check that contract: a tag plus
//! attributes, rendered sorted by name so output is deterministic.

mod binding;

pub use binding::{AppliedModifier, DataAttribute, ModifierArg};

use crate::catalog::AttributeDefinition;
use crate::error::BindError;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
struct RenderedAttribute {
    name: String,
    value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// HTML element carrying attributes only.
pub struct Element {
    tag: String,
    // Keyed by base name; the rendered name may carry modifiers.
    attributes: BTreeMap<String, RenderedAttribute>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Plain `name="value"` attribute.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.insert(name.to_string(), name.to_string(), Some(value.to_string()));
        self
    }

    /// Valueless attribute (`open`, `disabled`).
    pub fn flag(mut self, name: &str) -> Self {
        self.insert(name.to_string(), name.to_string(), None);
        self
    }

    /// Append a `property:value` pair to the inline style.
    pub fn style(mut self, property: &str, value: &str) -> Self {
        let declaration = format!("{property}:{value}");
        let merged = match self.attributes.get("style").and_then(|a| a.value.as_deref()) {
            Some(existing) if !existing.is_empty() => format!("{existing};{declaration}"),
            _ => declaration,
        };
        self.insert("style".into(), "style".into(), Some(merged));
        self
    }

    pub fn remove_attr(mut self, name: &str) -> Self {
        self.attributes.remove(name);
        self
    }

    /// Place a data attribute, replacing any previous one with the same base
    /// name.
    pub fn data(mut self, attribute: DataAttribute<'_>) -> Self {
        let value = attribute.value().map(str::to_string);
        self.insert(attribute.base_name(), attribute.name(), value);
        self
    }

    /// Place `attribute` only when `condition` holds.
    pub fn if_data(self, condition: bool, attribute: DataAttribute<'_>) -> Self {
        if condition { self.data(attribute) } else { self }
    }

    /// Removal form: drops the attribute for `definition`/`subkey` whatever
    /// modifiers it was rendered with.
    pub fn remove_data(mut self, definition: &AttributeDefinition, subkey: &str) -> Self {
        self.attributes
            .remove(&binding::base_name(definition, Some(subkey)));
        self
    }

    /// Toggle form for bool attributes: `true` places the bare attribute,
    /// `false` removes it.
    pub fn set_data(self, definition: &AttributeDefinition, enabled: bool) -> Result<Self, BindError> {
        let attribute = definition.present()?;
        if enabled {
            Ok(self.data(attribute))
        } else {
            Ok(self.remove_data(definition, ""))
        }
    }

    pub fn has_attribute(&self, base_name: &str) -> bool {
        self.attributes.contains_key(base_name)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn render_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for attribute in self.attributes.values() {
            write!(out, " {}", attribute.name)?;
            if let Some(value) = &attribute.value {
                write!(out, "=\"{}\"", escape_attribute(value))?;
            }
        }
        write!(out, "></{}>", self.tag)
    }

    fn insert(&mut self, key: String, name: String, value: Option<String>) {
        self.attributes.insert(key, RenderedAttribute { name, value });
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(f)
    }
}

// Only the delimiter is escaped: expressions routinely contain `&&`, `<` and
// quotes of the other kind, and the runtime reads them verbatim.
fn escape_attribute(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains('"') {
        value.replace('"', "&quot;").into()
    } else {
        value.into()
    }
}

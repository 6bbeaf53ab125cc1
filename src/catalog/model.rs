//! Built representation of catalog entries.
//!
//! `Modifier` and `AttributeDefinition` are what downstream consumers see
//! after `build_catalog` succeeds: descriptions are final (doc footer
//! appended), modifiers are resolved and shared between definitions.

use crate::catalog::identity::{ValueKind, wire_name};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Reusable modifier descriptor (`__debounce.500ms.leading`, `__window`, ...).
pub struct Modifier {
    pub name: String,
    pub description: String,
    /// Modifier family; several descriptors may share one (`debounce`).
    pub type_key: String,
    pub kind: ValueKind,
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Modifier {
    pub fn new(
        name: &str,
        description: &str,
        type_key: &str,
        kind: ValueKind,
        prefix: &str,
        suffix: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            type_key: type_key.to_string(),
            kind,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// First required field left empty, if any. The suffix is optional.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.description.trim().is_empty() {
            return Some("description");
        }
        if self.type_key.trim().is_empty() {
            return Some("type");
        }
        if self.prefix.is_empty() {
            return Some("prefix");
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Value shape of an attribute plus the modifiers it permits, in the order
/// generated builders list them.
pub struct AttributeType {
    pub customizable_by_suffix: bool,
    pub value: ValueKind,
    pub modifiers: Vec<Arc<Modifier>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One generated `data-*` attribute.
pub struct AttributeDefinition {
    pub name: String,
    pub key: String,
    pub description: String,
    pub doc_url: Option<String>,
    pub attr_type: AttributeType,
}

impl AttributeDefinition {
    pub fn wire_name(&self) -> String {
        wire_name(&self.key)
    }

    pub fn is_bool(&self) -> bool {
        self.attr_type.value == ValueKind::Bool
    }

    /// Resolve a permitted modifier by name.
    pub fn permitted_modifier(&self, name: &str) -> Option<&Arc<Modifier>> {
        self.attr_type.modifiers.iter().find(|m| m.name == name)
    }

    pub fn modifier_names(&self) -> impl Iterator<Item = &str> {
        self.attr_type.modifiers.iter().map(|m| m.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reports_first_empty_field() {
        let complete = Modifier::new("Once", "Run once.", "once", ValueKind::Bool, "once", "");
        assert_eq!(complete.missing_field(), None);

        let mut no_prefix = complete.clone();
        no_prefix.prefix.clear();
        assert_eq!(no_prefix.missing_field(), Some("prefix"));

        let mut blank = complete.clone();
        blank.description = "   ".into();
        blank.prefix.clear();
        assert_eq!(blank.missing_field(), Some("description"));
    }

    #[test]
    fn permitted_modifier_looks_up_by_name() {
        let window = Arc::new(Modifier::new(
            "Window",
            "Attach to window.",
            "window",
            ValueKind::Bool,
            "window",
            "",
        ));
        let def = AttributeDefinition {
            name: "DatastarOn".into(),
            key: "on".into(),
            description: "Listen.".into(),
            doc_url: None,
            attr_type: AttributeType {
                customizable_by_suffix: true,
                value: ValueKind::String,
                modifiers: vec![window.clone()],
            },
        };
        assert!(Arc::ptr_eq(def.permitted_modifier("Window").unwrap(), &window));
        assert!(def.permitted_modifier("Stop").is_none());
        assert_eq!(def.wire_name(), "data-on");
        assert!(!def.is_bool());
    }
}

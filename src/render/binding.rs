//! A catalog attribute bound to a key, an expression and modifiers.
//!
//! `DataAttribute` is the runtime shape of one generated builder call: it
//! checks modifiers against what the definition permits and knows how to
//! spell itself on the wire.

use crate::catalog::{AttributeDefinition, Modifier, ValueKind};
use crate::error::BindError;
use std::sync::Arc;
use std::time::Duration;

/// Argument passed to a modifier constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModifierArg {
    /// Bool modifiers take no value (`__window`).
    Flag,
    Text(String),
    Duration(Duration),
}

impl From<&str> for ModifierArg {
    fn from(value: &str) -> Self {
        ModifierArg::Text(value.to_string())
    }
}

impl From<String> for ModifierArg {
    fn from(value: String) -> Self {
        ModifierArg::Text(value)
    }
}

impl From<Duration> for ModifierArg {
    fn from(value: Duration) -> Self {
        ModifierArg::Duration(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Modifier plus the argument it was applied with.
pub struct AppliedModifier {
    modifier: Arc<Modifier>,
    arg: ModifierArg,
}

impl AppliedModifier {
    /// Check `arg` against the modifier's value kind. Text arguments must be
    /// usable inside an attribute name; seconds modifiers need at least 1s.
    pub(crate) fn new(
        attribute: &str,
        modifier: Arc<Modifier>,
        arg: ModifierArg,
    ) -> Result<Self, BindError> {
        let accepted = match &arg {
            ModifierArg::Flag => modifier.kind == ValueKind::Bool,
            ModifierArg::Text(_) => modifier.kind == ValueKind::String,
            ModifierArg::Duration(_) => modifier.kind.is_duration(),
        };
        if !accepted {
            return Err(BindError::ArgumentMismatch {
                modifier: modifier.name.clone(),
                expected: modifier.kind,
            });
        }
        match &arg {
            ModifierArg::Text(text) => check_token(attribute, text)?,
            ModifierArg::Duration(d)
                if modifier.kind == ValueKind::DurationSec && d.as_secs() == 0 =>
            {
                return Err(BindError::SubSecondDuration {
                    modifier: modifier.name.clone(),
                    millis: d.as_millis(),
                });
            }
            _ => {}
        }
        Ok(Self { modifier, arg })
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    /// Wire token without the leading `__`: `debounce.500ms.leading`.
    pub fn token(&self) -> String {
        let value = match (&self.arg, self.modifier.kind) {
            (ModifierArg::Flag, _) => String::new(),
            (ModifierArg::Text(text), _) => text.clone(),
            (ModifierArg::Duration(d), ValueKind::DurationSec) => d.as_secs().to_string(),
            (ModifierArg::Duration(d), _) => d.as_millis().to_string(),
        };
        format!("{}{}{}", self.modifier.prefix, value, self.modifier.suffix)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One `data-*` attribute ready to be placed on an element.
pub struct DataAttribute<'a> {
    definition: &'a AttributeDefinition,
    subkey: Option<String>,
    value: Option<String>,
    modifiers: Vec<AppliedModifier>,
}

impl AttributeDefinition {
    /// Bind an expression, optionally under an inline key. An empty `subkey`
    /// means no key (`data-signals="{...}"`).
    pub fn bind(&self, subkey: &str, expression: &str) -> Result<DataAttribute<'_>, BindError> {
        if self.is_bool() {
            return Err(BindError::ValueKindMismatch {
                attribute: self.name.clone(),
                expected: ValueKind::Bool,
            });
        }
        let subkey = normalize_subkey(self, subkey)?;
        Ok(DataAttribute {
            definition: self,
            subkey,
            value: Some(expression.to_string()),
            modifiers: Vec::new(),
        })
    }

    /// Bind an expression to an attribute that takes no key.
    pub fn expression(&self, expression: &str) -> Result<DataAttribute<'_>, BindError> {
        self.bind("", expression)
    }

    /// Presence form of a bool attribute (`data-ignore`).
    pub fn present(&self) -> Result<DataAttribute<'_>, BindError> {
        if !self.is_bool() {
            return Err(BindError::ValueKindMismatch {
                attribute: self.name.clone(),
                expected: self.attr_type.value,
            });
        }
        Ok(DataAttribute {
            definition: self,
            subkey: None,
            value: None,
            modifiers: Vec::new(),
        })
    }
}

fn normalize_subkey(def: &AttributeDefinition, subkey: &str) -> Result<Option<String>, BindError> {
    if subkey.is_empty() {
        return Ok(None);
    }
    if !def.attr_type.customizable_by_suffix {
        return Err(BindError::SubkeyNotAllowed {
            attribute: def.name.clone(),
            subkey: subkey.to_string(),
        });
    }
    check_token(&def.name, subkey)?;
    Ok(Some(subkey.to_string()))
}

// Rejects anything that would end the attribute name early or read as a
// modifier separator.
fn check_token(attribute: &str, token: &str) -> Result<(), BindError> {
    let invalid = token.trim().is_empty()
        || token.contains("__")
        || token
            .chars()
            .any(|c| c.is_ascii_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'));
    if invalid {
        return Err(BindError::InvalidToken {
            attribute: attribute.to_string(),
            token: token.to_string(),
        });
    }
    Ok(())
}

impl<'a> DataAttribute<'a> {
    /// Append a permitted modifier. Modifiers render in call order and each
    /// may appear once.
    pub fn modifier(mut self, name: &str, arg: impl Into<ModifierArg>) -> Result<Self, BindError> {
        let definition = self.definition;
        let attribute = &definition.name;
        let modifier = definition
            .permitted_modifier(name)
            .ok_or_else(|| BindError::ModifierNotPermitted {
                attribute: attribute.clone(),
                modifier: name.to_string(),
            })?;
        if self
            .modifiers
            .iter()
            .any(|applied| Arc::ptr_eq(&applied.modifier, modifier))
        {
            return Err(BindError::RepeatedModifier {
                attribute: attribute.clone(),
                modifier: name.to_string(),
            });
        }
        let applied = AppliedModifier::new(attribute, modifier.clone(), arg.into())?;
        self.modifiers.push(applied);
        Ok(self)
    }

    /// Append a bool modifier.
    pub fn flag(self, name: &str) -> Result<Self, BindError> {
        self.modifier(name, ModifierArg::Flag)
    }

    pub fn definition(&self) -> &'a AttributeDefinition {
        self.definition
    }

    pub fn subkey(&self) -> Option<&str> {
        self.subkey.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn modifiers(&self) -> &[AppliedModifier] {
        &self.modifiers
    }

    /// Name without modifiers; elements key attributes by it so the removal
    /// form can find an attribute regardless of its modifiers.
    pub fn base_name(&self) -> String {
        base_name(self.definition, self.subkey.as_deref())
    }

    /// Full attribute name: `data-on:click__window__debounce.1s.notrailing`.
    pub fn name(&self) -> String {
        let mut name = self.base_name();
        for applied in &self.modifiers {
            name.push_str("__");
            name.push_str(&applied.token());
        }
        name
    }
}

pub(crate) fn base_name(def: &AttributeDefinition, subkey: Option<&str>) -> String {
    match subkey.filter(|s| !s.is_empty()) {
        Some(subkey) => format!("{}:{subkey}", def.wire_name()),
        None => def.wire_name(),
    }
}

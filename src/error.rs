//! Error types for catalog construction and attribute binding.
//!
//! Catalog errors are fatal configuration problems: callers abort the build
//! and report the message; there is no partial catalog. Binding errors come
//! from misuse of a valid catalog (wrong modifier, wrong argument kind) and
//! are reported to whoever assembled the attribute.

use crate::catalog::ValueKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A modifier descriptor left one of its required fields empty.
    #[error("modifier {modifier} is malformed: {field} is unset")]
    MalformedModifierConfig {
        modifier: String,
        field: &'static str,
    },

    /// A documentation URL could not be parsed or fetched successfully.
    #[error("documentation link {url} is unreachable: {reason}")]
    UnreachableDocumentation { url: String, reason: String },

    #[error("duplicate modifier {0}")]
    DuplicateModifier(String),

    #[error("duplicate attribute {0}")]
    DuplicateAttribute(String),

    #[error("attribute {attribute} is invalid: {reason}")]
    InvalidAttribute { attribute: String, reason: String },

    #[error("attribute {attribute} references unknown modifier {modifier}")]
    UnknownModifier { attribute: String, modifier: String },

    /// Bindings look modifiers up by name, so the registry id must match it.
    #[error("modifier {id} is registered under a different name ({name})")]
    ModifierIdMismatch { id: String, name: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("{attribute} does not accept a key suffix (got '{subkey}')")]
    SubkeyNotAllowed { attribute: String, subkey: String },

    #[error("{attribute} does not permit modifier {modifier}")]
    ModifierNotPermitted { attribute: String, modifier: String },

    #[error("modifier {modifier} expects a {expected} argument")]
    ArgumentMismatch {
        modifier: String,
        expected: ValueKind,
    },

    /// Subkeys and text arguments end up in the attribute name.
    #[error("{attribute} cannot place '{token}' in an attribute name")]
    InvalidToken { attribute: String, token: String },

    #[error("modifier {modifier} takes whole seconds (got {millis}ms)")]
    SubSecondDuration { modifier: String, millis: u128 },

    #[error("{attribute} already applies modifier {modifier}")]
    RepeatedModifier { attribute: String, modifier: String },

    #[error("{attribute} takes a {expected} value")]
    ValueKindMismatch {
        attribute: String,
        expected: ValueKind,
    },
}

//! Builder-method names the external generator emits for each definition.
//!
//! Generated element types expose `DATASTAR_ON(...)`,
//! `IfDATASTAR_ON(cond, ...)`, `DATASTAR_ONRemove(...)` and, for bool
//! attributes, `DATASTAR_IGNORE_MORPHSet(bool)`. Modifier constructors are
//! scoped by element and attribute: `ButtonOnModWindow()`.

use crate::catalog::{AttributeDefinition, Modifier};
use serde::Serialize;

// Leading word of every definition name; dropped from modifier constructors.
const NAME_PREFIX: &str = "Datastar";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuilderMethods {
    pub primary: String,
    pub conditional: String,
    pub removal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<String>,
}

pub fn builder_methods(def: &AttributeDefinition) -> BuilderMethods {
    let primary = method_name(def);
    BuilderMethods {
        conditional: format!("If{primary}"),
        removal: format!("{primary}Remove"),
        toggle: def.is_bool().then(|| format!("{primary}Set")),
        primary,
    }
}

/// `DatastarJSONSignals` -> `DATASTAR_JSON_SIGNALS`.
pub fn method_name(def: &AttributeDefinition) -> String {
    split_words(&def.name)
        .iter()
        .map(|w| w.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `("pre", DatastarJSONSignals, Terse)` -> `PreJsonSignalsModTerse`.
pub fn modifier_constructor(tag: &str, def: &AttributeDefinition, modifier: &Modifier) -> String {
    let words = split_words(&def.name);
    let attribute: String = words
        .iter()
        .skip(usize::from(words.first().map(String::as_str) == Some(NAME_PREFIX)))
        .map(|w| title_case(w))
        .collect();
    format!("{}{attribute}Mod{}", title_case(tag), modifier.name)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Split a PascalCase identifier, keeping acronyms together:
/// `OnSignalPatch` -> `On Signal Patch`, `JSONSignals` -> `JSON Signals`.
fn split_words(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

//! Named set of shared modifier descriptors.
//!
//! The registry is an explicit list of `(identifier, descriptor)` pairs.
//! `validate` walks that list in order and stops at the first incomplete
//! descriptor, so a misconfigured table never reaches the catalog.

use crate::catalog::model::Modifier;
use crate::error::CatalogError;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
/// Modifier descriptors keyed by registry identifier, in declaration order.
pub struct ModifierRegistry {
    entries: Vec<(String, Arc<Modifier>)>,
    by_id: BTreeMap<String, usize>,
}

impl ModifierRegistry {
    /// Collect entries, rejecting duplicate identifiers.
    ///
    /// Completeness is not checked here; call `validate` before handing the
    /// registry to the catalog builder.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, Modifier)>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for (id, modifier) in entries {
            let id = id.into();
            if registry.by_id.contains_key(&id) {
                return Err(CatalogError::DuplicateModifier(id));
            }
            registry.by_id.insert(id.clone(), registry.entries.len());
            registry.entries.push((id, Arc::new(modifier)));
        }
        Ok(registry)
    }

    /// Fail fast on the first descriptor with an unset field or an identifier
    /// that differs from its name.
    pub fn validate(self) -> Result<Self, CatalogError> {
        for (id, modifier) in &self.entries {
            if id.trim().is_empty() {
                return Err(CatalogError::MalformedModifierConfig {
                    modifier: format!("<unnamed entry for {}>", modifier.name),
                    field: "identifier",
                });
            }
            if let Some(field) = modifier.missing_field() {
                return Err(CatalogError::MalformedModifierConfig {
                    modifier: id.clone(),
                    field,
                });
            }
            if *id != modifier.name {
                return Err(CatalogError::ModifierIdMismatch {
                    id: id.clone(),
                    name: modifier.name.clone(),
                });
            }
        }
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Modifier>> {
        self.by_id.get(id).map(|&idx| &self.entries[idx].1)
    }

    /// Identifier of the entry holding `modifier`, compared by identity.
    pub fn id_of(&self, modifier: &Arc<Modifier>) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, candidate)| Arc::ptr_eq(candidate, modifier))
            .map(|(id, _)| id.as_str())
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Modifier>)> {
        self.entries.iter().map(|(id, m)| (id.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ValueKind;

    fn once() -> Modifier {
        Modifier::new("Once", "Run once.", "once", ValueKind::Bool, "once", "")
    }

    fn delay_ms() -> Modifier {
        Modifier::new(
            "DelayMs",
            "Delay in milliseconds.",
            "delay",
            ValueKind::DurationMs,
            "delay.",
            "ms",
        )
    }

    #[test]
    fn validate_accepts_complete_entries_in_order() {
        let registry = ModifierRegistry::from_entries([("Once", once()), ("DelayMs", delay_ms())])
            .unwrap()
            .validate()
            .unwrap();
        let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["Once", "DelayMs"]);
        assert_eq!(registry.get("DelayMs").unwrap().suffix, "ms");
        assert!(registry.get("Stop").is_none());
    }

    #[test]
    fn validate_names_the_offending_entry() {
        let mut broken = delay_ms();
        broken.prefix.clear();
        let err = ModifierRegistry::from_entries([("Once", once()), ("DelayMs", broken)])
            .unwrap()
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::MalformedModifierConfig {
                modifier: "DelayMs".into(),
                field: "prefix",
            }
        );
        assert_eq!(err.to_string(), "modifier DelayMs is malformed: prefix is unset");
    }

    #[test]
    fn identifier_must_match_modifier_name() {
        let err = ModifierRegistry::from_entries([("Once", once()), ("Delay", delay_ms())])
            .unwrap()
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ModifierIdMismatch {
                id: "Delay".into(),
                name: "DelayMs".into(),
            }
        );
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let err = ModifierRegistry::from_entries([("Once", once()), ("Once", once())]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateModifier("Once".into()));
    }

    #[test]
    fn id_of_uses_identity() {
        let registry = ModifierRegistry::from_entries([("Once", once())]).unwrap();
        let shared = registry.get("Once").unwrap().clone();
        assert_eq!(registry.id_of(&shared), Some("Once"));
        assert_eq!(registry.id_of(&Arc::new(once())), None);
    }
}

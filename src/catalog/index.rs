//! Validated, indexed catalog of attribute definitions.
//!
//! Building resolves every modifier reference against the registry and is
//! strict about duplicates and malformed keys, so generators never consume a
//! catalog that would emit colliding or unparsable attributes.

use crate::catalog::definitions::AttributeSpec;
use crate::catalog::identity::{is_valid_key, wire_name};
use crate::catalog::model::{AttributeDefinition, AttributeType};
use crate::catalog::registry::ModifierRegistry;
use crate::docs::{LinkChecker, annotate};
use crate::error::CatalogError;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone)]
/// Ordered attribute definitions plus lookups by name and key.
pub struct Catalog {
    attributes: Vec<AttributeDefinition>,
    by_name: BTreeMap<String, usize>,
    by_key: BTreeMap<String, usize>,
    modifiers: ModifierRegistry,
}

impl Catalog {
    /// Resolve `specs` against a validated `registry`, annotating
    /// descriptions with documentation links checked by `checker`.
    pub fn build(
        specs: &[AttributeSpec],
        registry: ModifierRegistry,
        checker: &dyn LinkChecker,
    ) -> Result<Self, CatalogError> {
        let mut attributes = Vec::with_capacity(specs.len());
        for spec in specs {
            let (description, doc_url) = match spec.doc_url() {
                Some(url) => (annotate(spec.description, &url, checker)?, Some(url)),
                None => (spec.description.to_string(), None),
            };
            let mut modifiers = Vec::with_capacity(spec.modifiers.len());
            for id in spec.modifiers {
                let modifier = registry.get(id).ok_or_else(|| CatalogError::UnknownModifier {
                    attribute: spec.name.to_string(),
                    modifier: id.to_string(),
                })?;
                modifiers.push(modifier.clone());
            }
            debug!(attribute = spec.name, modifiers = modifiers.len(), "resolved attribute");
            attributes.push(AttributeDefinition {
                name: spec.name.to_string(),
                key: spec.key.to_string(),
                description,
                doc_url,
                attr_type: AttributeType {
                    customizable_by_suffix: spec.customizable_by_suffix,
                    value: spec.value,
                    modifiers,
                },
            });
        }
        Self::from_parts(attributes, registry)
    }

    /// Index already-resolved definitions. Used by `build` and by the JSON
    /// loader.
    pub fn from_parts(
        attributes: Vec<AttributeDefinition>,
        modifiers: ModifierRegistry,
    ) -> Result<Self, CatalogError> {
        let mut by_name = BTreeMap::new();
        let mut by_key = BTreeMap::new();
        for (idx, def) in attributes.iter().enumerate() {
            validate_definition(def)?;
            if by_name.insert(def.name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateAttribute(def.name.clone()));
            }
            // Two keys rendering to the same wire name would collide in output.
            if by_key.insert(def.wire_name(), idx).is_some() {
                return Err(CatalogError::DuplicateAttribute(def.key.clone()));
            }
            for modifier in &def.attr_type.modifiers {
                if modifiers.id_of(modifier).is_none() {
                    return Err(CatalogError::UnknownModifier {
                        attribute: def.name.clone(),
                        modifier: modifier.name.clone(),
                    });
                }
            }
        }
        Ok(Self {
            attributes,
            by_name,
            by_key,
            modifiers,
        })
    }

    /// Look up a definition by builder name (`DatastarOn`).
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.by_name.get(name).map(|&idx| &self.attributes[idx])
    }

    /// Look up a definition by key (`on`, `datastar-class`) or wire name
    /// without the `data-` prefix (`class`).
    pub fn by_key(&self, key: &str) -> Option<&AttributeDefinition> {
        self.by_key
            .get(&wire_name(key))
            .map(|&idx| &self.attributes[idx])
    }

    /// Definitions in declaration order.
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Documentation URLs in declaration order, deduplicated.
    pub fn doc_urls(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.attributes
            .iter()
            .filter_map(|def| def.doc_url.as_deref())
            .filter(|url| seen.insert(*url))
            .collect()
    }
}

fn validate_definition(def: &AttributeDefinition) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidAttribute {
        attribute: if def.name.is_empty() {
            def.key.clone()
        } else {
            def.name.clone()
        },
        reason,
    };
    if def.name.trim().is_empty() {
        return Err(invalid("name must not be empty".into()));
    }
    if !def.name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid(format!("name must be alphanumeric, got {}", def.name)));
    }
    if !is_valid_key(&def.key) {
        return Err(invalid(format!(
            "key must match ^[a-z0-9]+(-[a-z0-9]+)*$, got '{}'",
            def.key
        )));
    }
    if def.description.trim().is_empty() {
        return Err(invalid("description must not be empty".into()));
    }
    let mut seen = BTreeSet::new();
    for name in def.modifier_names() {
        if !seen.insert(name) {
            return Err(invalid(format!("modifier {name} listed more than once")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Modifier, ValueKind};
    use crate::docs::NoopLinkChecker;

    fn registry() -> ModifierRegistry {
        ModifierRegistry::from_entries([
            (
                "Case",
                Modifier::new("Case", "Casing.", "case", ValueKind::String, "case.", ""),
            ),
            (
                "Once",
                Modifier::new("Once", "Once.", "once", ValueKind::Bool, "once", ""),
            ),
        ])
        .unwrap()
        .validate()
        .unwrap()
    }

    const SPEC_REF: AttributeSpec = AttributeSpec {
        name: "DatastarRef",
        key: "ref",
        description: "Element reference.",
        doc_anchor: Some("data-ref"),
        customizable_by_suffix: false,
        value: ValueKind::String,
        modifiers: &["Case"],
    };

    #[test]
    fn build_shares_modifiers_and_indexes_keys() {
        let specs = [
            SPEC_REF,
            AttributeSpec {
                name: "DatastarClass",
                key: "datastar-class",
                doc_anchor: None,
                customizable_by_suffix: true,
                ..SPEC_REF
            },
        ];
        let catalog = Catalog::build(&specs, registry(), &NoopLinkChecker).unwrap();
        assert_eq!(catalog.len(), 2);

        let reference = catalog.attribute("DatastarRef").unwrap();
        assert!(reference.description.ends_with("See: https://data-star.dev/reference/attributes#data-ref"));
        let class = catalog.by_key("datastar-class").unwrap();
        assert_eq!(class.description, "Element reference.");
        assert_eq!(catalog.by_key("class").unwrap().name, "DatastarClass");
        assert!(std::sync::Arc::ptr_eq(
            &reference.attr_type.modifiers[0],
            &class.attr_type.modifiers[0]
        ));
        assert_eq!(catalog.doc_urls(), ["https://data-star.dev/reference/attributes#data-ref"]);
    }

    #[test]
    fn unknown_modifier_reference_fails() {
        let specs = [AttributeSpec {
            modifiers: &["Case", "Stop"],
            ..SPEC_REF
        }];
        let err = Catalog::build(&specs, registry(), &NoopLinkChecker).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownModifier {
                attribute: "DatastarRef".into(),
                modifier: "Stop".into(),
            }
        );
    }

    #[test]
    fn duplicates_and_bad_keys_fail() {
        let err = Catalog::build(&[SPEC_REF, SPEC_REF], registry(), &NoopLinkChecker).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateAttribute("DatastarRef".into()));

        let colliding = AttributeSpec {
            name: "DatastarRefAlias",
            key: "datastar-ref",
            ..SPEC_REF
        };
        let err = Catalog::build(&[SPEC_REF, colliding], registry(), &NoopLinkChecker).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateAttribute("datastar-ref".into()));

        let bad_key = AttributeSpec {
            key: "Ref",
            ..SPEC_REF
        };
        let err = Catalog::build(&[bad_key], registry(), &NoopLinkChecker).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAttribute { .. }), "{err}");

        let repeated = AttributeSpec {
            modifiers: &["Once", "Once"],
            ..SPEC_REF
        };
        let err = Catalog::build(&[repeated], registry(), &NoopLinkChecker).unwrap_err();
        assert!(err.to_string().contains("listed more than once"), "{err}");
    }
}

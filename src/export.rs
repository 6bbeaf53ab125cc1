//! JSON form of a validated catalog.
//!
//! Exports are what external generators read. Modifiers are listed once and
//! referenced by registry identifier from each attribute; derived fields
//! (`wire_name`, `methods`) are emitted for convenience and ignored on load.

use crate::catalog::{AttributeDefinition, AttributeType, Catalog, Modifier, ModifierRegistry, ValueKind};
use crate::naming::{BuilderMethods, builder_methods};
use crate::schema_loader::{
    SchemaLoadResult, load_bundled_schema, load_schema_from_path, validate_instance,
};
use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

pub const SCHEMA_VERSION: &str = "datastar_catalog_v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub schema_version: String,
    pub modifiers: Vec<ModifierEntry>,
    pub attributes: Vec<AttributeEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModifierEntry {
    pub id: String,
    #[serde(flatten)]
    pub modifier: Modifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub name: String,
    pub key: String,
    #[serde(default, skip_deserializing)]
    pub wire_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    pub customizable_by_suffix: bool,
    pub value: ValueKind,
    pub modifiers: Vec<String>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub methods: Option<BuilderMethods>,
}

impl Catalog {
    pub fn to_document(&self) -> CatalogDocument {
        let registry = self.modifiers();
        let modifiers = registry
            .iter()
            .map(|(id, modifier)| ModifierEntry {
                id: id.to_string(),
                modifier: Modifier::clone(modifier),
            })
            .collect();
        let attributes = self
            .attributes()
            .iter()
            .map(|def| AttributeEntry {
                name: def.name.clone(),
                key: def.key.clone(),
                wire_name: def.wire_name(),
                description: def.description.clone(),
                doc_url: def.doc_url.clone(),
                customizable_by_suffix: def.attr_type.customizable_by_suffix,
                value: def.attr_type.value,
                modifiers: def
                    .attr_type
                    .modifiers
                    .iter()
                    // Every modifier came from this registry; from_parts checked it.
                    .filter_map(|m| registry.id_of(m).map(str::to_string))
                    .collect(),
                methods: Some(builder_methods(def)),
            })
            .collect();
        CatalogDocument {
            schema_version: SCHEMA_VERSION.to_string(),
            modifiers,
            attributes,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_document()).context("serializing catalog")
    }

    /// Write the export, creating parent directories as needed.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), attributes = self.len(), "wrote catalog");
        Ok(())
    }

    /// Load an export, validating it against the bundled schema and
    /// re-running registry and index validation.
    pub fn load(path: &Path) -> Result<Self> {
        let schema = load_bundled_schema()?;
        load_with(path, &schema)
    }

    /// Same as `load`, against a schema file on disk.
    pub fn load_with_schema(path: &Path, schema_path: &Path) -> Result<Self> {
        let schema = load_schema_from_path(schema_path)?;
        load_with(path, &schema)
    }
}

fn load_with(path: &Path, schema: &SchemaLoadResult) -> Result<Catalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    let label = format!("catalog {}", path.display());
    validate_instance(schema, &value, &label)?;

    let document: CatalogDocument =
        serde_json::from_value(value).with_context(|| format!("decoding {}", path.display()))?;
    if document.schema_version != schema.schema_version {
        bail!(
            "{label} declares schema_version '{}', expected '{}'",
            document.schema_version,
            schema.schema_version
        );
    }
    from_document(document).with_context(|| format!("validating {}", path.display()))
}

/// Rebuild a catalog from its exported form.
pub fn from_document(document: CatalogDocument) -> Result<Catalog> {
    let registry = ModifierRegistry::from_entries(
        document
            .modifiers
            .into_iter()
            .map(|entry| (entry.id, entry.modifier)),
    )?
    .validate()?;

    let mut attributes = Vec::with_capacity(document.attributes.len());
    for entry in document.attributes {
        let mut modifiers = Vec::with_capacity(entry.modifiers.len());
        for id in &entry.modifiers {
            let modifier = registry.get(id).ok_or_else(|| {
                anyhow!("attribute {} references unknown modifier {id}", entry.name)
            })?;
            modifiers.push(modifier.clone());
        }
        attributes.push(AttributeDefinition {
            name: entry.name,
            key: entry.key,
            description: entry.description,
            doc_url: entry.doc_url,
            attr_type: AttributeType {
                customizable_by_suffix: entry.customizable_by_suffix,
                value: entry.value,
                modifiers,
            },
        });
    }
    Ok(Catalog::from_parts(attributes, registry)?)
}

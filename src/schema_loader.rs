//! JSON Schema handling for exported catalogs.
//!
//! The schema ships inside the crate so exports can be checked without a
//! repository checkout; callers may still point at another copy on disk.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const BUNDLED_SCHEMA: &str = include_str!("../schema/datastar_catalog.schema.json");

// Where the schema_version const lives inside the schema payload.
const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Compiled schema plus the version it pins.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

pub(crate) fn load_bundled_schema() -> Result<SchemaLoadResult> {
    let value: Value =
        serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled catalog schema")?;
    compile(value, "bundled catalog schema")
}

pub(crate) fn load_schema_from_path(path: &Path) -> Result<SchemaLoadResult> {
    let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing schema {}", path.display()))?;
    compile(value, &path.display().to_string())
}

fn compile(value: Value, label: &str) -> Result<SchemaLoadResult> {
    let schema_version = extract_schema_version(&value)
        .ok_or_else(|| anyhow!("{label} is missing a schema_version const"))?;
    let compiled = JSONSchema::compile(&value)
        .map_err(|err| anyhow!("compiling {label}: {err}"))?;
    Ok(SchemaLoadResult {
        schema_version,
        compiled,
    })
}

/// Validate `instance`, collecting every violation into one error.
pub(crate) fn validate_instance(
    schema: &SchemaLoadResult,
    instance: &Value,
    label: &str,
) -> Result<()> {
    if let Err(errors) = schema.compiled.validate(instance) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{label} failed schema validation:\n{details}");
    }
    Ok(())
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_schema_compiles_and_pins_version() {
        let schema = load_bundled_schema().unwrap();
        assert_eq!(schema.schema_version, "datastar_catalog_v1");
    }

    #[test]
    fn violations_are_listed() {
        let schema = load_bundled_schema().unwrap();
        let bad = json!({
            "schema_version": "datastar_catalog_v1",
            "modifiers": [],
            "attributes": [{
                "name": "DatastarOn",
                "key": "On",
                "description": "",
                "customizable_by_suffix": true,
                "value": "string",
                "modifiers": []
            }]
        });
        let err = validate_instance(&schema, &bad, "fixture").unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("fixture failed schema validation"), "{text}");
        assert!(text.contains("/attributes/0/key"), "{text}");
        assert!(text.contains("/attributes/0/description"), "{text}");
    }

    #[test]
    fn schema_without_version_const_is_rejected() {
        let err = compile(json!({"type": "object"}), "fixture").err().unwrap();
        assert!(err.to_string().contains("missing a schema_version const"));
    }
}

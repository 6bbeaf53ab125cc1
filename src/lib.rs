//! Declarative catalog of Datastar `data-*` attributes.
//!
//! The crate owns the attribute and modifier tables that builder-method
//! generators consume, the checks that keep those tables complete, and a
//! small reference renderer for the wire format generated builders emit:
//! `data-<key>[:<subkey>][__<modifier>...]="<expression>"`.
//!
//! `build_catalog` is the entry point. It validates the modifier registry,
//! resolves every attribute against it, and returns an immutable `Catalog`
//! or the first configuration error. Documentation links are only fetched
//! when a live `LinkChecker` is passed to `build_catalog_with`.

pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod export;
pub mod logging;
pub mod naming;
pub mod render;
mod schema_loader;

pub use catalog::{
    AttributeDefinition, AttributeSpec, AttributeType, Catalog, DATASTAR_ATTRIBUTES, Modifier,
    ModifierRegistry, ValueKind, datastar_modifiers,
};
pub use config::CatalogConfig;
pub use docs::{HttpLinkChecker, LinkChecker, NoopLinkChecker, annotate};
pub use error::{BindError, CatalogError};
pub use export::{CatalogDocument, SCHEMA_VERSION};
pub use naming::{BuilderMethods, builder_methods, method_name, modifier_constructor};
pub use render::{AppliedModifier, DataAttribute, Element, ModifierArg};

use tracing::info;

/// Build the Datastar catalog without touching the network.
pub fn build_catalog() -> Result<Catalog, CatalogError> {
    build_catalog_with(&NoopLinkChecker)
}

/// Build the Datastar catalog, verifying documentation links with `checker`.
pub fn build_catalog_with(checker: &dyn LinkChecker) -> Result<Catalog, CatalogError> {
    let registry = ModifierRegistry::from_entries(datastar_modifiers())?.validate()?;
    let catalog = Catalog::build(DATASTAR_ATTRIBUTES, registry, checker)?;
    info!(
        attributes = catalog.len(),
        modifiers = catalog.modifiers().len(),
        "built datastar catalog"
    );
    Ok(catalog)
}

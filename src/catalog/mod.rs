//! Datastar attribute catalog wiring.
//!
//! `definitions` holds the literal tables, `registry` the shared modifier
//! descriptors, and `index` the validated `Catalog` built from both. Types in
//! `model` are what generators and the renderer consume.

pub mod definitions;
pub mod identity;
pub mod index;
pub mod model;
pub mod registry;

pub use definitions::{AttributeSpec, DATASTAR_ATTRIBUTES, datastar_modifiers};
pub use identity::{ValueKind, is_valid_key, wire_name};
pub use index::Catalog;
pub use model::{AttributeDefinition, AttributeType, Modifier};
pub use registry::ModifierRegistry;

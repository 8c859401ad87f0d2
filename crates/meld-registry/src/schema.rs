//! Schema translation between bounded contexts
//!
//! Contexts name the same data differently. A schema morphism maps
//! field names of one schema onto another, and instances move along it
//! in both directions: `pull_back` reads target data through the
//! morphism (never creating dangling fields), `push_forward` renames
//! source data into the target schema. Fields the morphism or the
//! instance lacks are omitted, never errors.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field-name mapping from a source schema onto a target schema.
pub type SchemaMorphism = BTreeMap<String, String>;

/// A record instance: a value per field name.
pub type SchemaInstance = BTreeMap<String, Value>;

/// Reindex a target instance through the morphism, producing a source
/// instance. The safe direction: it only reads existing data.
pub fn pull_back(morphism: &SchemaMorphism, target: &SchemaInstance) -> SchemaInstance {
    morphism
        .iter()
        .filter_map(|(source_field, target_field)| {
            target
                .get(target_field)
                .map(|value| (source_field.clone(), value.clone()))
        })
        .collect()
}

/// Rename a source instance along the morphism, producing a target
/// instance. Target fields outside the morphism's image are absent.
pub fn push_forward(morphism: &SchemaMorphism, source: &SchemaInstance) -> SchemaInstance {
    morphism
        .iter()
        .filter_map(|(source_field, target_field)| {
            source
                .get(source_field)
                .map(|value| (target_field.clone(), value.clone()))
        })
        .collect()
}

/// Check that a morphism carries both ends of a foreign-key constraint,
/// so the constraint can hold in the target schema.
pub fn preserves_constraint(morphism: &SchemaMorphism, fk_source: &str, fk_target: &str) -> bool {
    morphism.contains_key(fk_source) && morphism.contains_key(fk_target)
}

//! Schema-derived key order.
//!
//! A [`KeyOrderProvider`] turns a schema reference into the schema's field keys
//! in declaration order, which the sort uses to place form fields.

use crate::error::SchemaError;
use ahash::AHashMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// `$ref` chains longer than this are treated as cycles.
const MAX_REF_DEPTH: usize = 32;

/// Looks up the canonical key order of a schema.
///
/// Implementations may suspend (e.g. fetch the schema remotely). A lookup that
/// is abandoned should fail with [`SchemaError::Cancelled`].
pub trait KeyOrderProvider {
    fn keys_in_order(
        &self,
        schema_ref: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, SchemaError>> + Send;
}

/// An in-memory registry of JSON Schema documents.
///
/// Keys are the dotted paths of leaf properties in declaration order, e.g.
/// `traits.email`, `traits.name.first`. Local `$ref`s are followed.
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaKeyOrder {
    schemas: AHashMap<String, Value>,
}

impl JsonSchemaKeyOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema_ref: impl Into<String>, schema: Value) -> Self {
        self.insert(schema_ref, schema);
        self
    }

    pub fn insert(&mut self, schema_ref: impl Into<String>, schema: Value) {
        self.schemas.insert(schema_ref.into(), schema);
    }

    pub fn insert_str(&mut self, schema_ref: &str, schema: &str) -> Result<(), SchemaError> {
        let schema = serde_json::from_str(schema).map_err(|e| SchemaError::InvalidSchema {
            schema_ref: schema_ref.to_string(),
            message: e.to_string(),
        })?;
        self.insert(schema_ref, schema);
        Ok(())
    }

    /// Registers the schema stored at `path` under `schema_ref`.
    pub fn load_file(&mut self, schema_ref: &str, path: impl AsRef<Path>) -> Result<(), SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded schema '{}' from '{}'", schema_ref, path.display());
        self.insert_str(schema_ref, &content)
    }

    pub fn contains(&self, schema_ref: &str) -> bool {
        self.schemas.contains_key(schema_ref)
    }

    /// The schema's keys in declaration order.
    pub fn keys_for(&self, schema_ref: &str) -> Result<Vec<String>, SchemaError> {
        let root = self
            .schemas
            .get(schema_ref)
            .ok_or_else(|| SchemaError::UnknownSchema(schema_ref.to_string()))?;

        if !root.is_object() {
            return Err(SchemaError::InvalidSchema {
                schema_ref: schema_ref.to_string(),
                message: "schema document must be an object".to_string(),
            });
        }

        let mut keys = Vec::new();
        collect_keys(root, root, "", &mut keys).map_err(|message| SchemaError::InvalidSchema {
            schema_ref: schema_ref.to_string(),
            message,
        })?;
        Ok(keys)
    }
}

impl KeyOrderProvider for JsonSchemaKeyOrder {
    async fn keys_in_order(&self, schema_ref: &str) -> Result<Vec<String>, SchemaError> {
        self.keys_for(schema_ref)
    }
}

/// Follows `$ref`s until reaching a schema without one.
fn resolve<'a>(root: &'a Value, mut schema: &'a Value) -> Result<&'a Value, String> {
    for _ in 0..MAX_REF_DEPTH {
        let Some(reference) = schema.get("$ref") else {
            return Ok(schema);
        };
        let reference = reference
            .as_str()
            .ok_or_else(|| "$ref must be a string".to_string())?;
        let pointer = reference
            .strip_prefix('#')
            .ok_or_else(|| format!("unsupported non-local reference '{}'", reference))?;
        schema = root
            .pointer(pointer)
            .ok_or_else(|| format!("unresolvable reference '{}'", reference))?;
    }
    Err(format!("reference chain exceeds {} hops", MAX_REF_DEPTH))
}

fn collect_keys(
    root: &Value,
    schema: &Value,
    prefix: &str,
    keys: &mut Vec<String>,
) -> Result<(), String> {
    let schema = resolve(root, schema)?;
    let Some(properties) = schema.get("properties") else {
        return Ok(());
    };
    let properties = properties
        .as_object()
        .ok_or_else(|| format!("'properties' of '{}' must be an object", prefix))?;

    for (name, property) in properties {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        if resolve(root, property)?.get("properties").is_some() {
            if path.matches('.').count() >= MAX_REF_DEPTH {
                return Err(format!("schema nesting at '{}' is too deep", path));
            }
            collect_keys(root, property, &path, keys)?;
        } else {
            keys.push(path);
        }
    }
    Ok(())
}

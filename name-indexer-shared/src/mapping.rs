//! Mapping synthesis for custom field types.
//!
//! The name-matching plugin requires field types (e.g. `rni_name`, `rni_date`)
//! that fluent client APIs cannot express, so the mapping for a record shape is
//! synthesized here as a raw JSON document and registered through the
//! low-level mapping API. The synthesizer is pure: a shape description plus a
//! type-override table in, a mapping document out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Errors that can occur during mapping synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A required identifier in the shape description is missing, empty, or
    /// repeated.
    #[error("Invalid shape descriptor: {0}")]
    InvalidShapeDescriptor(String),
}

impl MappingError {
    /// Create an invalid shape descriptor error.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShapeDescriptor(msg.into())
    }
}

/// One field of a record shape: its name and its primitive type before any
/// override is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as it appears in indexed documents.
    pub name: String,
    /// Primitive field type (e.g. "string", "date", "keyword").
    pub primitive_type: String,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, primitive_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primitive_type: primitive_type.into(),
        }
    }
}

/// Lookup table from primitive-type names to the custom types recognized by
/// the indexing plugin. Lookups are exact-match and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOverrides(BTreeMap<String, String>);

impl TypeOverrides {
    /// Create an empty override table (every primitive type passes through).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override, replacing any existing entry for the same primitive
    /// type.
    pub fn with(mut self, primitive_type: impl Into<String>, custom_type: impl Into<String>) -> Self {
        self.0.insert(primitive_type.into(), custom_type.into());
        self
    }

    /// Resolve a primitive type to its custom type, or return it unchanged
    /// when no override is registered.
    pub fn resolve<'a>(&'a self, primitive_type: &'a str) -> &'a str {
        self.0
            .get(primitive_type)
            .map(String::as_str)
            .unwrap_or(primitive_type)
    }

    /// Number of registered overrides.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no overrides.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TypeOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A synthesized mapping document.
///
/// The document has a single top-level key (the shape name) holding a
/// `properties` object with one `{ "type": ... }` entry per field:
///
/// ```json
/// {
///   "person": {
///     "properties": {
///       "full_name": { "type": "rni_name" },
///       "date_of_birth": { "type": "rni_date" }
///     }
///   }
/// }
/// ```
///
/// Constructed once per shape, handed to a mapping-registration call, then
/// discarded. Never mutated after synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingDocument {
    shape_name: String,
    body: Value,
}

impl MappingDocument {
    /// Synthesize a mapping document for a record shape.
    ///
    /// Each field's type is resolved through the override table: the table
    /// value when the primitive type is a key, the primitive type verbatim
    /// otherwise. An empty field list is valid and produces an empty
    /// `properties` object.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidShapeDescriptor`] when the shape name is
    /// empty, a field name is empty, or a field name repeats. A repeated name
    /// would collapse in the JSON object and silently drop a field, so it is
    /// rejected up front.
    pub fn synthesize(
        shape_name: &str,
        fields: &[FieldDescriptor],
        overrides: &TypeOverrides,
    ) -> Result<Self, MappingError> {
        if shape_name.is_empty() {
            return Err(MappingError::invalid_shape("shape name is empty"));
        }

        let mut properties = Map::with_capacity(fields.len());
        for field in fields {
            if field.name.is_empty() {
                return Err(MappingError::invalid_shape(format!(
                    "field with type '{}' has an empty name",
                    field.primitive_type
                )));
            }
            let resolved = overrides.resolve(&field.primitive_type);
            let previous = properties.insert(field.name.clone(), json!({ "type": resolved }));
            if previous.is_some() {
                return Err(MappingError::invalid_shape(format!(
                    "duplicate field name '{}'",
                    field.name
                )));
            }
        }

        Ok(Self {
            shape_name: shape_name.to_string(),
            body: json!({ shape_name: { "properties": properties } }),
        })
    }

    /// The shape name, i.e. the document's single top-level key.
    pub fn shape_name(&self) -> &str {
        &self.shape_name
    }

    /// The full document, including the top-level shape key.
    pub fn as_value(&self) -> &Value {
        &self.body
    }

    /// The inner `{ "properties": ... }` body, for registration APIs that key
    /// the mapping by index rather than by type.
    pub fn properties_body(&self) -> Value {
        self.body[&self.shape_name].clone()
    }

    /// Consume the document, returning the full JSON value.
    pub fn into_value(self) -> Value {
        self.body
    }
}

impl std::fmt::Display for MappingDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

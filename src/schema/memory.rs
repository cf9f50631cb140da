//! Loader over schemas held in memory.

use super::descriptor::schema_key;
use super::{Schema, SchemaLoader, SchemaObjects};
use crate::error::{SchemaError, SchemaResult};
use crate::model::SchemaObject;
use std::collections::BTreeMap;

/// A [`SchemaLoader`] backed by a map of schemas built in code.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::model::{AttributeType, SchemaObject};
/// use ldap_schema::{InMemorySchemaLoader, Schema, SchemaLoader};
///
/// let loader = InMemorySchemaLoader::new().with_schema(
///     Schema::new("local").with_dependencies(["system"]),
///     [SchemaObject::from(
///         AttributeType::new("1.3.6.1.4.1.32473.2.1")
///             .with_names(["badgeNumber"])
///             .with_syntax("1.3.6.1.4.1.1466.115.121.1.27"),
///     )],
/// );
///
/// let schema = loader.schema("LOCAL").unwrap();
/// let objects = loader.load_schema_objects(&schema).unwrap();
/// assert_eq!(objects.attribute_types[0].header.schema_name, "local");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaLoader {
    schemas: BTreeMap<String, (Schema, SchemaObjects)>,
}

impl InMemorySchemaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema and its objects, replacing any schema of the same name.
    pub fn with_schema<I>(mut self, schema: Schema, objects: I) -> Self
    where
        I: IntoIterator<Item = SchemaObject>,
    {
        self.insert(schema, objects.into_iter().collect());
        self
    }

    /// Add a schema and its objects, replacing any schema of the same name.
    pub fn insert(&mut self, schema: Schema, mut objects: SchemaObjects) {
        objects.set_schema_name(&schema.name);
        self.schemas.insert(schema.key(), (schema, objects));
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaLoader for InMemorySchemaLoader {
    fn schema(&self, name: &str) -> Option<Schema> {
        self.schemas
            .get(&schema_key(name))
            .map(|(schema, _)| schema.clone())
    }

    fn all_schemas(&self) -> Vec<Schema> {
        self.schemas
            .values()
            .map(|(schema, _)| schema.clone())
            .collect()
    }

    fn load_schema_objects(&self, schema: &Schema) -> SchemaResult<SchemaObjects> {
        self.schemas
            .get(&schema.key())
            .map(|(_, objects)| objects.clone())
            .ok_or_else(|| SchemaError::schema_not_found(&schema.name))
    }
}

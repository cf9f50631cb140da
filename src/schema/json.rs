//! Loader reading schemas from JSON documents.
//!
//! Each document describes one schema:
//!
//! ```json
//! {
//!   "schema": { "name": "core", "dependencies": ["system"] },
//!   "attributeTypes": [
//!     { "oid": "2.5.4.3", "names": ["cn", "commonName"], "superior": "name" }
//!   ],
//!   "objectClasses": [
//!     { "oid": "2.5.6.6", "names": ["person"], "superiors": ["top"], "must": ["sn", "cn"] }
//!   ]
//! }
//! ```
//!
//! The object groups are `syntaxCheckers`, `normalizers`, `comparators`,
//! `syntaxes`, `matchingRules`, `attributeTypes` and `objectClasses`; all of
//! them are optional.

use super::{InMemorySchemaLoader, Schema, SchemaLoader, SchemaObjects, embedded};
use crate::error::{SchemaError, SchemaResult};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    schema: Schema,
    #[serde(flatten)]
    objects: SchemaObjects,
}

/// A [`SchemaLoader`] over parsed JSON schema documents.
///
/// Documents are parsed once, when the loader is created.
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaLoader {
    inner: InMemorySchemaLoader,
}

impl JsonSchemaLoader {
    /// Create a loader over the schema documents shipped with the library:
    /// system, core, cosine, inetorgperson, collective, nis (disabled) and
    /// other.
    pub fn embedded() -> SchemaResult<Self> {
        Self::from_documents(embedded::documents())
    }

    /// Create a loader from JSON document strings.
    pub fn from_documents<I, S>(documents: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loader = Self::default();
        for document in documents {
            loader.add_document(document.as_ref())?;
        }
        Ok(loader)
    }

    /// Create a loader from every `*.json` file of a directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> SchemaResult<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loader = Self::default();
        for path in paths {
            debug!("Reading schema document {}", path.display());
            let content = fs::read_to_string(&path)?;
            loader.add_document(&content)?;
        }
        info!(
            "Read {} schema documents from {}",
            loader.inner.len(),
            dir.as_ref().display()
        );
        Ok(loader)
    }

    /// Parse one document and add its schema.
    ///
    /// Two documents describing the same schema name are rejected.
    pub fn add_document(&mut self, content: &str) -> SchemaResult<()> {
        let document: SchemaDocument = serde_json::from_str(content)?;
        if self.inner.schema(&document.schema.name).is_some() {
            return Err(SchemaError::invalid_configuration(format!(
                "Schema '{}' is defined by more than one document",
                document.schema.name
            )));
        }

        debug!(
            "Parsed schema '{}' with {} objects",
            document.schema.name,
            document.objects.len()
        );
        self.inner.insert(document.schema, document.objects);
        Ok(())
    }
}

impl SchemaLoader for JsonSchemaLoader {
    fn schema(&self, name: &str) -> Option<Schema> {
        self.inner.schema(name)
    }

    fn all_schemas(&self) -> Vec<Schema> {
        self.inner.all_schemas()
    }

    fn load_schema_objects(&self, schema: &Schema) -> SchemaResult<SchemaObjects> {
        self.inner.load_schema_objects(schema)
    }
}

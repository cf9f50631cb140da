//! Adding and deleting individual schema objects.

use super::core::SchemaManager;
use crate::error::SchemaViolation;
use crate::model::SchemaObject;
use crate::schema::SchemaObjects;
use crate::schema::descriptor::schema_key;
use crate::validation::SchemaValidator;
use log::{debug, info, warn};

impl SchemaManager {
    /// Validate and register a single schema object.
    ///
    /// An object without a schema name is assigned to the configured default
    /// schema. The owning schema must be loaded and enabled.
    ///
    /// # Arguments
    ///
    /// * `object` - Any schema object, or a value convertible into one
    ///
    /// # Returns
    ///
    /// `true` if the object was registered. Otherwise the reason is available
    /// through [`errors`](Self::errors) and the registries are unchanged.
    pub fn add(&mut self, object: impl Into<SchemaObject>) -> bool {
        self.errors.clear();
        let mut object = object.into();
        if object.header().schema_name.is_empty() {
            object.header_mut().schema_name = self.config.default_schema.clone();
        }

        let key = schema_key(&object.header().schema_name);
        let state = self
            .schemas
            .get(&key)
            .map(|loaded| loaded.schema.enabled);
        match state {
            None => {
                let violation = SchemaViolation::SchemaNotLoaded {
                    oid: object.oid().to_string(),
                    schema: object.header().schema_name.clone(),
                };
                self.record(violation);
                return false;
            }
            Some(false) => {
                let violation = SchemaViolation::SchemaDisabled {
                    oid: object.oid().to_string(),
                    schema: object.header().schema_name.clone(),
                };
                self.record(violation);
                return false;
            }
            Some(true) => {}
        }

        if !self.register_object(object.clone()) {
            return false;
        }
        if let Some(loaded) = self.schemas.get_mut(&key) {
            loaded
                .objects
                .get_or_insert_with(SchemaObjects::new)
                .push(object);
        }
        true
    }

    /// Unregister a schema object by OID or name.
    ///
    /// Refused with [`SchemaViolation::InUse`] while other registered objects
    /// reference it, and with [`SchemaViolation::NotFound`] if nothing is
    /// registered under `id`.
    pub fn delete(&mut self, id: &str) -> bool {
        self.errors.clear();
        match self.registries.unregister(id) {
            Ok(removed) => {
                let key = schema_key(&removed.header().schema_name);
                if let Some(objects) = self
                    .schemas
                    .get_mut(&key)
                    .and_then(|loaded| loaded.objects.as_mut())
                {
                    objects.remove(removed.oid());
                }
                info!("Deleted {} {}", removed.kind(), removed.oid());
                true
            }
            Err(violation) => {
                self.record(violation);
                false
            }
        }
    }

    /// Validate an object against the current registries and register it,
    /// recording the violation on failure.
    pub(super) fn register_object(&mut self, object: SchemaObject) -> bool {
        let validated = SchemaValidator::new(&self.registries, &self.factory, &self.config)
            .validate(object);
        let registered = validated.and_then(|object| {
            let (kind, oid) = (object.kind(), object.oid().to_string());
            self.registries.register(object)?;
            Ok((kind, oid))
        });

        match registered {
            Ok((kind, oid)) => {
                debug!("Registered {} {}", kind, oid);
                true
            }
            Err(violation) => {
                self.record(violation);
                false
            }
        }
    }

    pub(super) fn record(&mut self, violation: SchemaViolation) {
        warn!("Schema object rejected: {}", violation);
        self.errors.push(violation);
    }
}

//! Enabling and disabling schemas.

use super::core::SchemaManager;
use crate::error::{SchemaError, SchemaResult, SchemaViolation};
use crate::schema::dependencies::{Visit, dependency_order};
use crate::schema::descriptor::schema_key;
use log::{debug, info};
use std::collections::BTreeSet;

impl SchemaManager {
    /// Enable schemas together with everything they depend on.
    ///
    /// Dependencies that are not loaded are loaded, disabled ones are enabled.
    /// Schemas that are already enabled are left alone.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::SchemaNotFound`] - A name is unknown to the loader
    /// * [`SchemaError::MissingDependency`] - A dependency is unknown to the loader
    /// * [`SchemaError::DependencyCycle`] - The schemas depend on each other in a loop
    pub fn enable(&mut self, names: &[&str]) -> SchemaResult<bool> {
        self.errors.clear();
        let order = dependency_order(names, |name, dependent| {
            if self.is_enabled(name) {
                return Ok(Visit::Satisfied);
            }
            match (self.descriptor(name), dependent) {
                (Some(schema), _) => Ok(Visit::Expand(schema)),
                (None, Some(schema)) => Err(SchemaError::MissingDependency {
                    schema: schema.name.clone(),
                    dependency: name.to_string(),
                }),
                (None, None) => Err(SchemaError::schema_not_found(name)),
            }
        })?;

        let pending = self.fetch_objects(order)?;
        Ok(self.apply(pending))
    }

    /// Disable loaded schemas, unregistering their objects.
    ///
    /// Disabled schemas stay loaded and keep their objects, so enabling them
    /// again does not go back to the loader.
    ///
    /// # Returns
    ///
    /// `Ok(false)` without changing anything if objects outside `names` still
    /// reference objects of these schemas; [`errors`](Self::errors) then lists
    /// one [`SchemaViolation::InUse`] per referenced object.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::SchemaNotLoaded`] - A name is not loaded
    /// * [`SchemaError::SchemaInUse`] - An enabled schema outside `names` depends on one of them
    pub fn disable(&mut self, names: &[&str]) -> SchemaResult<bool> {
        self.errors.clear();
        let keys: BTreeSet<String> = self
            .loaded_keys(names)?
            .into_iter()
            .filter(|key| self.schemas.get(key).is_some_and(|l| l.schema.enabled))
            .collect();
        self.check_dependents(&keys, true)?;

        if !self.deregister_schemas(&keys) {
            return Ok(false);
        }
        for key in &keys {
            if let Some(loaded) = self.schemas.get_mut(key) {
                loaded.schema.enabled = false;
                info!("Disabled schema '{}'", loaded.schema.name);
            }
        }
        Ok(true)
    }

    /// Unregister every object owned by the schemas in `keys`.
    ///
    /// Nothing is removed if an object outside these schemas references one of
    /// their objects; the references are recorded as violations instead.
    pub(super) fn deregister_schemas(&mut self, keys: &BTreeSet<String>) -> bool {
        if keys.is_empty() {
            return true;
        }
        let owned: BTreeSet<String> = self
            .registries
            .headers()
            .filter(|header| keys.contains(&schema_key(&header.schema_name)))
            .map(|header| header.oid.clone())
            .collect();

        let violations: Vec<SchemaViolation> = owned
            .iter()
            .filter_map(|oid| {
                let used_by: Vec<String> = self
                    .registries
                    .users_of(oid)
                    .into_iter()
                    .filter(|user| !owned.contains(*user))
                    .map(str::to_string)
                    .collect();
                if used_by.is_empty() {
                    None
                } else {
                    Some(SchemaViolation::InUse {
                        oid: oid.clone(),
                        used_by,
                    })
                }
            })
            .collect();
        if !violations.is_empty() {
            for violation in violations {
                self.record(violation);
            }
            return false;
        }

        for oid in &owned {
            self.registries.remove(oid);
        }
        debug!("Unregistered {} objects", owned.len());
        true
    }
}

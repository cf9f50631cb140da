//! Loading, unloading and verifying schemas.
//!
//! All dependency checks and loader reads happen before the registries are
//! touched, so a call failing with a [`SchemaError`] leaves the manager as it
//! was. Objects are then registered kind by kind; within a batch, attribute
//! types and object classes are ordered so superiors come first.

use super::core::{LoadedSchema, SchemaManager};
use crate::error::{SchemaError, SchemaResult, SchemaViolation, ValidationResult};
use crate::model::{AttributeType, ObjectClass, SchemaObject, SchemaObjectHeader};
use crate::schema::dependencies::{Visit, dependency_order};
use crate::schema::descriptor::schema_key;
use crate::schema::{Schema, SchemaObjects};
use log::{info, trace};
use std::collections::{BTreeSet, HashSet};

impl SchemaManager {
    /// Load and enable schemas.
    ///
    /// Every dependency of a schema in `names` must either be part of the
    /// batch or already loaded and enabled. Schemas that are already enabled
    /// are skipped; loaded but disabled ones are enabled.
    ///
    /// # Arguments
    ///
    /// * `names` - Schema names, case-insensitive
    ///
    /// # Returns
    ///
    /// `Ok(true)` if every object was registered, `Ok(false)` if some objects
    /// were rejected (see [`errors`](Self::errors)).
    ///
    /// # Errors
    ///
    /// * [`SchemaError::SchemaNotFound`] - A name is unknown to the loader
    /// * [`SchemaError::MissingDependency`] - A dependency is neither loaded nor in the batch
    /// * [`SchemaError::DependencyCycle`] - The schemas depend on each other in a loop
    pub fn load(&mut self, names: &[&str]) -> SchemaResult<bool> {
        self.errors.clear();
        let batch: HashSet<String> = names.iter().map(|name| schema_key(name)).collect();

        let order = dependency_order(names, |name, dependent| {
            if self.is_enabled(name) {
                return Ok(Visit::Satisfied);
            }
            if batch.contains(&schema_key(name)) {
                return self
                    .descriptor(name)
                    .map(Visit::Expand)
                    .ok_or_else(|| SchemaError::schema_not_found(name));
            }
            Err(match dependent {
                Some(schema) => SchemaError::MissingDependency {
                    schema: schema.name.clone(),
                    dependency: name.to_string(),
                },
                None => SchemaError::schema_not_found(name),
            })
        })?;

        let pending = self.fetch_objects(order)?;
        Ok(self.apply(pending))
    }

    /// Load a schema together with every schema it transitively depends on.
    ///
    /// Equivalent to [`enable`](Self::enable) with a single name.
    pub fn load_with_deps(&mut self, name: &str) -> SchemaResult<bool> {
        self.enable(&[name])
    }

    /// Load every schema the loader marks as enabled.
    pub fn load_all_enabled(&mut self) -> SchemaResult<bool> {
        let names: Vec<String> = self
            .loader
            .all_schemas()
            .into_iter()
            .filter(|schema| schema.enabled)
            .map(|schema| schema.name)
            .collect();
        info!("Loading {} enabled schemas", names.len());
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        self.load(&names)
    }

    /// Record schemas as loaded but disabled, without registering anything.
    ///
    /// Schemas that are already loaded keep their state.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaNotFound`] if a name is unknown to the
    /// loader, before any schema is recorded.
    pub fn load_disabled(&mut self, names: &[&str]) -> SchemaResult<bool> {
        self.errors.clear();
        let schemas = names
            .iter()
            .map(|name| {
                self.loader
                    .schema(name)
                    .ok_or_else(|| SchemaError::schema_not_found(*name))
            })
            .collect::<SchemaResult<Vec<_>>>()?;

        for mut schema in schemas {
            if self.schemas.contains_key(&schema.key()) {
                continue;
            }
            info!("Schema '{}' loaded disabled", schema.name);
            schema.enabled = false;
            self.schemas.insert(
                schema.key(),
                LoadedSchema {
                    schema,
                    objects: None,
                },
            );
        }
        Ok(true)
    }

    /// Check whether schemas would load cleanly, without changing anything.
    ///
    /// The load runs against a copy of the manager; only the violations it
    /// reports are kept in [`errors`](Self::errors).
    pub fn verify(&mut self, names: &[&str]) -> SchemaResult<bool> {
        let mut scratch = self.clone();
        let result = scratch.load(names);
        self.errors = scratch.errors;
        result
    }

    /// Unload schemas, unregistering the objects of those that are enabled.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::SchemaNotLoaded`] - A name is not loaded
    /// * [`SchemaError::SchemaInUse`] - A loaded schema outside `names` depends on one of them
    pub fn unload(&mut self, names: &[&str]) -> SchemaResult<bool> {
        self.errors.clear();
        let keys = self.loaded_keys(names)?;
        self.check_dependents(&keys, false)?;

        let enabled: BTreeSet<String> = keys
            .iter()
            .filter(|key| self.schemas.get(*key).is_some_and(|l| l.schema.enabled))
            .cloned()
            .collect();
        if !self.deregister_schemas(&enabled) {
            return Ok(false);
        }

        for key in &keys {
            if let Some(loaded) = self.schemas.remove(key) {
                info!("Unloaded schema '{}'", loaded.schema.name);
            }
        }
        Ok(true)
    }

    /// Descriptor of a schema, preferring the manager's own copy.
    pub(super) fn descriptor(&self, name: &str) -> Option<Schema> {
        match self.schemas.get(&schema_key(name)) {
            Some(loaded) => Some(loaded.schema.clone()),
            None => self.loader.schema(name),
        }
    }

    /// Keys of loaded schemas, failing on the first name that is not loaded.
    pub(super) fn loaded_keys(&self, names: &[&str]) -> SchemaResult<BTreeSet<String>> {
        names
            .iter()
            .map(|name| {
                let key = schema_key(name);
                if self.schemas.contains_key(&key) {
                    Ok(key)
                } else {
                    Err(SchemaError::schema_not_loaded(*name))
                }
            })
            .collect()
    }

    /// Fail if a loaded schema outside `keys` depends on one of them.
    pub(super) fn check_dependents(
        &self,
        keys: &BTreeSet<String>,
        enabled_only: bool,
    ) -> SchemaResult<()> {
        for (key, loaded) in &self.schemas {
            if keys.contains(key) || (enabled_only && !loaded.schema.enabled) {
                continue;
            }
            if let Some(required) = keys.iter().find(|k| loaded.schema.depends_on(k)) {
                let schema = self
                    .schemas
                    .get(required)
                    .map_or_else(|| required.clone(), |l| l.schema.name.clone());
                return Err(SchemaError::SchemaInUse {
                    schema,
                    dependent: loaded.schema.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Read the objects of every schema in `order` that is not yet enabled.
    ///
    /// Objects cached from an earlier load are reused; the loader is only
    /// asked for schemas the manager has never enabled.
    pub(super) fn fetch_objects(
        &self,
        order: Vec<Schema>,
    ) -> SchemaResult<Vec<(Schema, SchemaObjects)>> {
        let mut pending = Vec::with_capacity(order.len());
        for schema in order {
            if self.is_enabled(&schema.name) {
                continue;
            }
            let cached = self
                .schemas
                .get(&schema.key())
                .and_then(|loaded| loaded.objects.clone());
            let objects = match cached {
                Some(objects) => objects,
                None => {
                    let mut objects = self.loader.load_schema_objects(&schema)?;
                    objects.set_schema_name(&schema.name);
                    objects
                }
            };
            pending.push((schema, objects));
        }
        Ok(pending)
    }

    /// Register the objects of each schema in order and mark it enabled.
    pub(super) fn apply(&mut self, pending: Vec<(Schema, SchemaObjects)>) -> bool {
        for (mut schema, objects) in pending {
            let total = objects.len();
            info!("Enabling schema '{}' ({} objects)", schema.name, total);

            let mut registered = 0;
            for candidate in registration_order(objects.clone()) {
                match candidate {
                    Ok(object) => {
                        if self.register_object(object) {
                            registered += 1;
                        }
                    }
                    Err(violation) => self.record(violation),
                }
            }

            info!(
                "Schema '{}' enabled: {} of {} objects registered",
                schema.name, registered, total
            );
            schema.enabled = true;
            self.schemas.insert(
                schema.key(),
                LoadedSchema {
                    schema,
                    objects: Some(objects),
                },
            );
        }
        self.errors.is_empty()
    }
}

/// Objects that may name superiors of their own kind.
trait Inheriting {
    fn header(&self) -> &SchemaObjectHeader;
    fn superior_ids(&self) -> Vec<&str>;
    fn cycle(&self, superior: &str) -> SchemaViolation;
}

impl Inheriting for AttributeType {
    fn header(&self) -> &SchemaObjectHeader {
        &self.header
    }

    fn superior_ids(&self) -> Vec<&str> {
        self.superior.as_deref().into_iter().collect()
    }

    fn cycle(&self, _superior: &str) -> SchemaViolation {
        SchemaViolation::SuperiorCycle {
            oid: self.header.oid.clone(),
        }
    }
}

impl Inheriting for ObjectClass {
    fn header(&self) -> &SchemaObjectHeader {
        &self.header
    }

    fn superior_ids(&self) -> Vec<&str> {
        self.superiors.iter().map(String::as_str).collect()
    }

    fn cycle(&self, superior: &str) -> SchemaViolation {
        SchemaViolation::SupCycle {
            oid: self.header.oid.clone(),
            superior: superior.to_string(),
        }
    }
}

/// Objects of a schema in the order they must be registered.
///
/// Kinds follow [`ObjectKind::REGISTRATION_ORDER`](crate::model::ObjectKind::REGISTRATION_ORDER).
/// Attribute types and object classes whose superiors loop within the batch
/// are turned into cycle violations.
fn registration_order(objects: SchemaObjects) -> Vec<ValidationResult<SchemaObject>> {
    let SchemaObjects {
        syntax_checkers,
        normalizers,
        comparators,
        syntaxes,
        matching_rules,
        attribute_types,
        object_classes,
    } = objects;

    let mut ordered: Vec<ValidationResult<SchemaObject>> = Vec::new();
    ordered.extend(syntax_checkers.into_iter().map(|d| Ok(SchemaObject::SyntaxChecker(d))));
    ordered.extend(normalizers.into_iter().map(|d| Ok(SchemaObject::Normalizer(d))));
    ordered.extend(comparators.into_iter().map(|d| Ok(SchemaObject::Comparator(d))));
    ordered.extend(syntaxes.into_iter().map(|s| Ok(SchemaObject::LdapSyntax(s))));
    ordered.extend(matching_rules.into_iter().map(|mr| Ok(SchemaObject::MatchingRule(mr))));
    ordered.extend(
        superiors_first(attribute_types)
            .into_iter()
            .map(|at| at.map(SchemaObject::AttributeType)),
    );
    ordered.extend(
        superiors_first(object_classes)
            .into_iter()
            .map(|oc| oc.map(SchemaObject::ObjectClass)),
    );
    ordered
}

/// Order items so that superiors defined in the same batch come first.
///
/// Items left over once no further progress is possible sit on, or below, a
/// superior cycle.
fn superiors_first<T: Inheriting>(items: Vec<T>) -> Vec<ValidationResult<T>> {
    // Batch index of each superior that is defined within the batch
    let local: Vec<Vec<(usize, String)>> = items
        .iter()
        .map(|item| {
            item.superior_ids()
                .into_iter()
                .filter_map(|id| {
                    items
                        .iter()
                        .position(|other| other.header().is_identified_by(id))
                        .map(|index| (index, id.to_string()))
                })
                .collect()
        })
        .collect();

    let mut emitted = vec![false; items.len()];
    let mut order = Vec::with_capacity(items.len());
    loop {
        let mut progress = false;
        for (index, superiors) in local.iter().enumerate() {
            if !emitted[index] && superiors.iter().all(|(s, _)| emitted[*s]) {
                emitted[index] = true;
                order.push(index);
                progress = true;
            }
        }
        if !progress {
            break;
        }
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut result: Vec<ValidationResult<T>> = order
        .iter()
        .filter_map(|index| slots[*index].take())
        .map(Ok)
        .collect();

    for (index, slot) in slots.iter_mut().enumerate() {
        if let Some(item) = slot.take() {
            let superior = local[index]
                .iter()
                .find(|(s, _)| !emitted[*s])
                .map(|(_, id)| id.as_str())
                .unwrap_or_default();
            trace!("{} is part of a superior cycle", item.header().oid);
            result.push(Err(item.cycle(superior)));
        }
    }
    result
}

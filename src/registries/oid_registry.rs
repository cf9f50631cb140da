//! Global registry of every OID and name, regardless of object kind.

use crate::error::{SchemaViolation, ValidationResult};
use crate::model::{ObjectKind, SchemaObjectHeader};
use std::collections::{BTreeMap, HashMap};

/// Union of all per-kind registries used to detect cross-kind collisions.
///
/// An attribute type and an object class can neither share an OID nor a name.
#[derive(Debug, Clone, Default)]
pub struct OidRegistry {
    by_oid: BTreeMap<String, ObjectKind>,
    names: HashMap<String, String>,
}

impl OidRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered OIDs.
    pub fn size(&self) -> usize {
        self.by_oid.len()
    }

    pub fn contains_oid(&self, oid: &str) -> bool {
        self.by_oid.contains_key(oid)
    }

    /// Kind of the object registered under an OID or name.
    pub fn kind_of(&self, id: &str) -> Option<ObjectKind> {
        let oid = self.resolve(id)?;
        self.by_oid.get(oid).copied()
    }

    /// OID owning a name, compared case-insensitively.
    pub fn owner_of_name(&self, name: &str) -> Option<&str> {
        self.names
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Resolve an OID or a name to a registered OID.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        match self.by_oid.get_key_value(id) {
            Some((oid, _)) => Some(oid.as_str()),
            None => self.owner_of_name(id),
        }
    }

    /// Verify that neither the OID nor any name of `header` is taken.
    pub fn check_available(&self, header: &SchemaObjectHeader) -> ValidationResult<()> {
        if let Some(kind) = self.by_oid.get(&header.oid) {
            return Err(SchemaViolation::AlreadyRegistered {
                oid: header.oid.clone(),
                kind: *kind,
            });
        }
        for name in &header.names {
            if let Some(owner) = self.owner_of_name(name) {
                return Err(SchemaViolation::NameAlreadyRegistered {
                    oid: header.oid.clone(),
                    name: name.clone(),
                    owner: owner.to_string(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn register(
        &mut self,
        header: &SchemaObjectHeader,
        kind: ObjectKind,
    ) -> ValidationResult<()> {
        self.check_available(header)?;
        for name in &header.names {
            self.names
                .insert(name.to_ascii_lowercase(), header.oid.clone());
        }
        self.by_oid.insert(header.oid.clone(), kind);
        Ok(())
    }

    pub(crate) fn unregister(&mut self, header: &SchemaObjectHeader) {
        if self.by_oid.remove(&header.oid).is_some() {
            for name in &header.names {
                self.names.remove(&name.to_ascii_lowercase());
            }
        }
    }
}

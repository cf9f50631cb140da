//! Object class checks.

use super::SchemaValidator;
use crate::error::{SchemaViolation, ValidationResult};
use crate::model::{AttributeType, ObjectClass};
use std::collections::{BTreeSet, HashSet};

impl SchemaValidator<'_> {
    pub(super) fn validate_object_class(
        &self,
        mut oc: ObjectClass,
    ) -> ValidationResult<ObjectClass> {
        let oid = oc.header.oid.clone();
        let registry = self.registries.object_classes();

        let mut superiors: Vec<&ObjectClass> = Vec::with_capacity(oc.superiors.len());
        for id in &oc.superiors {
            let sup_cycle = || SchemaViolation::SupCycle {
                oid: oid.clone(),
                superior: id.clone(),
            };
            if oc.header.is_identified_by(id) {
                return Err(sup_cycle());
            }
            let superior = registry
                .get(id)
                .ok_or_else(|| SchemaViolation::NonExistentSuperior {
                    oid: oid.clone(),
                    superior: id.clone(),
                })?;
            if superiors.iter().any(|s| s.oid() == superior.oid()) {
                return Err(sup_cycle());
            }
            let loops_back = self
                .registries
                .object_class_ancestors(superior.oid())
                .iter()
                .any(|ancestor| oc.header.is_identified_by(ancestor.oid()));
            if loops_back {
                return Err(sup_cycle());
            }
            superiors.push(superior);
        }

        for superior in &superiors {
            if !oc.kind.can_inherit_from(superior.kind) {
                return Err(SchemaViolation::IncompatibleSuperiorType {
                    oid,
                    kind: oc.kind,
                    superior: superior.oid().to_string(),
                    superior_kind: superior.kind,
                });
            }
        }

        let must = self.resolve_attributes(&oid, &oc.must)?;
        let may = self.resolve_attributes(&oid, &oc.may)?;

        let mut declared = HashSet::new();
        for at in must.iter().chain(&may) {
            if !declared.insert(at.oid()) {
                return Err(SchemaViolation::DuplicateAttribute {
                    oid,
                    attribute: at.header.name_or_oid().to_string(),
                });
            }
        }

        if let Some(at) = must.iter().chain(&may).find(|at| at.collective) {
            return Err(SchemaViolation::CollectiveAttributeInMustOrMay {
                oid,
                attribute: at.header.name_or_oid().to_string(),
            });
        }

        let inherited_must: BTreeSet<String> = superiors
            .iter()
            .flat_map(|superior| self.registries.all_must(superior.oid()))
            .collect();
        if let Some(at) = may.iter().find(|at| inherited_must.contains(at.oid())) {
            return Err(SchemaViolation::DuplicateAttribute {
                oid,
                attribute: at.header.name_or_oid().to_string(),
            });
        }

        oc.must = must.iter().map(|at| at.oid().to_string()).collect();
        oc.may = may.iter().map(|at| at.oid().to_string()).collect();
        oc.superiors = superiors.iter().map(|s| s.oid().to_string()).collect();
        Ok(oc)
    }

    fn resolve_attributes(
        &self,
        oid: &str,
        ids: &[String],
    ) -> ValidationResult<Vec<&AttributeType>> {
        ids.iter()
            .map(|id| {
                self.registries.attribute_types().get(id).ok_or_else(|| {
                    SchemaViolation::UnresolvableAttribute {
                        oid: oid.to_string(),
                        attribute: id.clone(),
                    }
                })
            })
            .collect()
    }
}

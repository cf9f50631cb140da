//! Attribute type checks.

use super::SchemaValidator;
use crate::error::{SchemaViolation, ValidationResult};
use crate::model::{AttributeType, MatchingRuleUsage, ObjectKind, UsageEnum};
use std::collections::HashSet;

impl SchemaValidator<'_> {
    pub(super) fn validate_attribute_type(
        &self,
        mut at: AttributeType,
    ) -> ValidationResult<AttributeType> {
        let oid = at.header.oid.clone();

        let superior = match at.superior.as_deref() {
            Some(id) => Some(self.check_superior(&at, id)?),
            None => None,
        };

        match at.syntax.as_deref() {
            Some(syntax) => {
                let resolved = self.resolve(ObjectKind::LdapSyntax, syntax).ok_or_else(|| {
                    SchemaViolation::UnresolvableSyntax {
                        oid: oid.clone(),
                        syntax: syntax.to_string(),
                    }
                })?;
                at.syntax = Some(resolved);
            }
            None if superior.is_none() => return Err(SchemaViolation::NoSyntax { oid }),
            None => {}
        }

        at.equality = self.resolve_matching_rule(&oid, at.equality.take(), MatchingRuleUsage::Equality)?;
        at.ordering = self.resolve_matching_rule(&oid, at.ordering.take(), MatchingRuleUsage::Ordering)?;
        at.substring =
            self.resolve_matching_rule(&oid, at.substring.take(), MatchingRuleUsage::Substring)?;

        if let Some(superior) = &superior {
            if superior.usage != at.usage {
                return Err(SchemaViolation::InvalidSuperiorUsage {
                    oid,
                    superior: superior.oid().to_string(),
                });
            }
            if superior.collective && !at.collective {
                return Err(SchemaViolation::NonCollectiveSubtype {
                    oid,
                    superior: superior.oid().to_string(),
                });
            }
        }

        if at.collective {
            if at.usage != UsageEnum::UserApplications {
                return Err(SchemaViolation::CollectiveNotUserApplications { oid });
            }
            if at.single_valued {
                return Err(SchemaViolation::CollectiveSingleValued { oid });
            }
        }
        if !at.user_modifiable && at.usage == UsageEnum::UserApplications {
            return Err(SchemaViolation::NoUserModificationWithUserApplications { oid });
        }

        at.superior = superior.map(|superior| superior.oid().to_string());
        Ok(at)
    }

    /// Resolve the superior and make sure its chain does not lead back to `at`.
    fn check_superior(&self, at: &AttributeType, id: &str) -> ValidationResult<AttributeType> {
        let oid = &at.header.oid;
        if at.header.is_identified_by(id) {
            return Err(SchemaViolation::SuperiorCycle { oid: oid.clone() });
        }

        let registry = self.registries.attribute_types();
        let superior = registry
            .get(id)
            .ok_or_else(|| SchemaViolation::NonExistentSuperior {
                oid: oid.clone(),
                superior: id.to_string(),
            })?;

        let mut seen = HashSet::new();
        let mut current = Some(superior);
        while let Some(ancestor) = current {
            if at.header.is_identified_by(ancestor.oid()) || !seen.insert(ancestor.oid()) {
                return Err(SchemaViolation::SuperiorCycle { oid: oid.clone() });
            }
            current = ancestor.superior.as_deref().and_then(|s| registry.get(s));
        }

        Ok(superior.clone())
    }

    fn resolve_matching_rule(
        &self,
        oid: &str,
        rule: Option<String>,
        usage: MatchingRuleUsage,
    ) -> ValidationResult<Option<String>> {
        let Some(rule) = rule else {
            return Ok(None);
        };
        match self.resolve(ObjectKind::MatchingRule, &rule) {
            Some(resolved) => Ok(Some(resolved)),
            None => Err(SchemaViolation::UnresolvableMatchingRule {
                oid: oid.to_string(),
                usage,
                rule,
            }),
        }
    }
}

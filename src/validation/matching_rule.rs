//! Matching rule and syntax checks.

use super::SchemaValidator;
use crate::error::{SchemaViolation, ValidationResult};
use crate::model::{LdapSyntax, MatchingRule, ObjectKind};

impl SchemaValidator<'_> {
    pub(super) fn validate_matching_rule(
        &self,
        mut mr: MatchingRule,
    ) -> ValidationResult<MatchingRule> {
        let oid = mr.header.oid.clone();

        mr.syntax = self
            .resolve(ObjectKind::LdapSyntax, &mr.syntax)
            .ok_or_else(|| SchemaViolation::UnresolvableSyntax {
                oid: oid.clone(),
                syntax: mr.syntax.clone(),
            })?;

        if let Some(normalizer) = mr.normalizer.take() {
            let resolved = self
                .resolve(ObjectKind::Normalizer, &normalizer)
                .ok_or_else(|| SchemaViolation::UnresolvableNormalizer {
                    oid: oid.clone(),
                    normalizer: normalizer.clone(),
                })?;
            mr.normalizer = Some(resolved);
        }

        if let Some(comparator) = mr.comparator.take() {
            let resolved = self
                .resolve(ObjectKind::Comparator, &comparator)
                .ok_or_else(|| SchemaViolation::UnresolvableComparator {
                    oid,
                    comparator: comparator.clone(),
                })?;
            mr.comparator = Some(resolved);
        }

        Ok(mr)
    }

    pub(super) fn validate_syntax(&self, mut syntax: LdapSyntax) -> ValidationResult<LdapSyntax> {
        if let Some(checker) = syntax.syntax_checker.take() {
            let resolved = self
                .resolve(ObjectKind::SyntaxChecker, &checker)
                .ok_or_else(|| SchemaViolation::UnresolvableSyntaxChecker {
                    oid: syntax.header.oid.clone(),
                    checker: checker.clone(),
                })?;
            syntax.syntax_checker = Some(resolved);
        }
        Ok(syntax)
    }
}

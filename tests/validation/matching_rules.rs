//! Matching rules, syntaxes and pluggable implementations.

use super::*;
use ldap_schema::error::ValueResult;
use ldap_schema::{
    AttributeType, ImplementationDescription, ImplementationFactory, LdapComparator, LdapSyntax,
    MatchingRule, Normalizer, ObjectKind, SchemaManager, SchemaObject, SchemaViolation,
};
use std::cmp::Ordering;
use std::sync::Arc;

const INTEGER_CHECKER: &str = "1.3.6.1.4.1.32473.1.3.3";

#[derive(Debug)]
struct ReverseNormalizer;

impl Normalizer for ReverseNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        Ok(value.chars().rev().collect())
    }
}

#[test]
fn test_rule_references_are_canonicalized() {
    let mut manager = core_manager();
    assert_accepted!(
        manager,
        MatchingRule::new(private_oid(40), syntaxes::DIRECTORY_STRING)
            .with_names(["lenientMatch"])
            .with_normalizer("1.3.6.1.4.1.32473.1.1.3")
            .with_comparator("1.3.6.1.4.1.32473.1.2.1")
    );

    let rule = manager.lookup_matching_rule_registry("lenientmatch").unwrap();
    assert_eq!(rule.syntax, syntaxes::DIRECTORY_STRING);
    assert_eq!(rule.normalizer.as_deref(), Some("1.3.6.1.4.1.32473.1.1.3"));
}

#[test]
fn test_unresolvable_references() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        MatchingRule::new(private_oid(41), "1.2.3.4.5"),
        SchemaViolation::UnresolvableSyntax { .. }
    );
    assert_rejected!(
        manager,
        MatchingRule::new(private_oid(42), syntaxes::DIRECTORY_STRING)
            .with_normalizer("1.3.6.1.4.1.32473.1.1.999"),
        SchemaViolation::UnresolvableNormalizer { .. }
    );
    assert_rejected!(
        manager,
        MatchingRule::new(private_oid(43), syntaxes::DIRECTORY_STRING)
            .with_comparator("1.3.6.1.4.1.32473.1.2.999"),
        SchemaViolation::UnresolvableComparator { .. }
    );
    assert_rejected!(
        manager,
        LdapSyntax::new(private_oid(44)).with_syntax_checker("1.3.6.1.4.1.32473.1.3.999"),
        SchemaViolation::UnresolvableSyntaxChecker { .. }
    );
}

#[test]
fn test_implementation_resolution() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        SchemaObject::normalizer(ImplementationDescription::new(
            private_oid(45),
            "SoundexNormalizer"
        )),
        SchemaViolation::UnloadableImplementation { .. }
    );
    assert_rejected!(
        manager,
        SchemaObject::normalizer(ImplementationDescription::new(
            private_oid(46),
            "StringComparator"
        )),
        SchemaViolation::IncompatibleImplementation {
            expected: ObjectKind::Normalizer,
            ..
        }
    );
    assert_accepted!(
        manager,
        SchemaObject::comparator(ImplementationDescription::new(
            private_oid(47),
            "IntegerComparator"
        ))
    );
    assert_eq!(
        manager
            .lookup_comparator_registry(&private_oid(47))
            .unwrap()
            .implementation
            .compare("9", "10"),
        Ordering::Less
    );
}

#[test]
fn test_rule_without_implementations_uses_defaults() {
    let mut manager = core_manager();
    assert_accepted!(
        manager,
        MatchingRule::new(private_oid(48), syntaxes::DIRECTORY_STRING).with_names(["plainMatch"])
    );
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(49))
            .with_names(["plainValue"])
            .with_equality("plainMatch")
            .with_syntax(syntaxes::DIRECTORY_STRING)
    );

    assert_eq!(
        manager.normalize("plainValue", "  Mixed  Case ").unwrap(),
        "  Mixed  Case "
    );
    assert_eq!(
        manager.compare("plainValue", "b", "a").unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        manager.compare("plainValue", "B", "a").unwrap(),
        Ordering::Less
    );
}

#[test]
fn test_syntax_checker_drives_check_syntax() {
    let mut manager = core_manager();
    assert_accepted!(
        manager,
        LdapSyntax::new(private_oid(50))
            .with_description("Badge Number")
            .with_syntax_checker(INTEGER_CHECKER)
    );
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(51))
            .with_names(["badgeNumber"])
            .with_syntax(private_oid(50))
    );

    assert!(manager.check_syntax("badgeNumber", "-42").unwrap());
    assert!(!manager.check_syntax("badgeNumber", "forty-two").unwrap());

    // Without a checker every value is valid
    assert_accepted!(manager, LdapSyntax::new(private_oid(52)));
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(53))
            .with_names(["opaque"])
            .with_syntax(private_oid(52))
    );
    assert!(manager.check_syntax("opaque", "\u{0}anything").unwrap());
}

#[test]
fn test_custom_implementation_from_factory() {
    let mut factory = ImplementationFactory::with_builtins();
    factory.register_normalizer("ReverseNormalizer", || Arc::new(ReverseNormalizer));

    let mut manager: SchemaManager = SchemaManager::builder()
        .with_factory(factory)
        .build()
        .unwrap();
    assert!(manager.load_with_deps("core").unwrap());
    assert!(manager.load(&["other"]).unwrap());

    assert_accepted!(
        manager,
        SchemaObject::normalizer(ImplementationDescription::new(
            private_oid(54),
            "ReverseNormalizer"
        ))
    );
    assert_accepted!(
        manager,
        MatchingRule::new(private_oid(55), syntaxes::DIRECTORY_STRING)
            .with_names(["reverseMatch"])
            .with_normalizer(private_oid(54))
    );
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(56))
            .with_names(["palindrome"])
            .with_equality("reverseMatch")
            .with_syntax(syntaxes::DIRECTORY_STRING)
    );

    assert_eq!(manager.normalize("palindrome", "abc").unwrap(), "cba");
    assert!(manager.normalizer_mapping().contains_key("palindrome"));
}

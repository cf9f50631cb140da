//! OID and name uniqueness across every kind of schema object.

use super::*;
use ldap_schema::{
    AttributeType, LdapSyntax, MatchingRule, ObjectClass, ObjectKind, SchemaManager,
    SchemaViolation,
};

#[test]
fn test_oid_taken_by_another_kind() {
    let mut manager = core_manager();

    // 2.5.4.3 is the cn attribute type
    assert_rejected!(
        manager,
        ObjectClass::new("2.5.4.3").with_superiors(["top"]),
        SchemaViolation::AlreadyRegistered {
            kind: ObjectKind::AttributeType,
            ..
        }
    );
    // 2.5.13.2 is caseIgnoreMatch
    assert_rejected!(
        manager,
        LdapSyntax::new("2.5.13.2"),
        SchemaViolation::AlreadyRegistered {
            kind: ObjectKind::MatchingRule,
            ..
        }
    );
}

#[test]
fn test_name_taken_by_another_kind() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        MatchingRule::new(private_oid(60), syntaxes::DIRECTORY_STRING).with_names(["PERSON"]),
        SchemaViolation::NameAlreadyRegistered { .. }
    );

    match manager.errors() {
        [SchemaViolation::NameAlreadyRegistered { name, owner, .. }] => {
            assert_eq!(name, "PERSON");
            assert_eq!(owner, "2.5.6.6");
        }
        other => panic!("unexpected violations {other:?}"),
    }
}

#[test]
fn test_name_freed_by_delete() {
    let mut manager = core_manager();
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(61))
            .with_names(["shortLived"])
            .with_superior("name")
    );
    assert!(manager.global_oid_registry().owner_of_name("SHORTLIVED").is_some());

    assert!(manager.delete("shortLived"));
    assert!(!manager.global_oid_registry().contains_oid(&private_oid(61)));

    assert_accepted!(
        manager,
        ObjectClass::new(private_oid(62))
            .with_names(["shortLived"])
            .with_superiors(["top"])
    );
    assert_eq!(
        manager.global_oid_registry().kind_of("shortlived"),
        Some(ObjectKind::ObjectClass)
    );
}

#[test]
fn test_oid_and_name_syntax() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        AttributeType::new("acme-badge").with_superior("name"),
        SchemaViolation::InvalidOid { .. }
    );
    assert_rejected!(
        manager,
        AttributeType::new(private_oid(63))
            .with_names(["badge number"])
            .with_superior("name"),
        SchemaViolation::InvalidName { .. }
    );
}

#[test]
fn test_syntax_checks_can_be_relaxed() {
    let mut manager = SchemaManager::builder()
        .validate_oids(false)
        .check_name_syntax(false)
        .build()
        .unwrap();
    assert!(manager.load_with_deps("core").unwrap());
    assert!(manager.load(&["other"]).unwrap());

    assert_accepted!(
        manager,
        AttributeType::new("acme-badge")
            .with_names(["badge_number"])
            .with_superior("name")
    );
    assert_eq!(
        manager
            .lookup_attribute_type_registry("badge_number")
            .unwrap()
            .oid(),
        "acme-badge"
    );

    // Uniqueness still applies
    assert_rejected!(
        manager,
        ObjectClass::new("acme-badge").with_superiors(["top"]),
        SchemaViolation::AlreadyRegistered { .. }
    );
}

//! Object class validation.

use super::*;
use ldap_schema::{ObjectClass, ObjectClassKind, SchemaViolation};

#[test]
fn test_subclass_references_are_canonicalized() {
    let mut manager = core_manager();
    assert_accepted!(
        manager,
        ObjectClass::new(private_oid(20))
            .with_names(["employee"])
            .with_superiors(["PERSON"])
            .with_must(["uid"])
            .with_may(["localityName", "description"])
    );

    let oc = manager.lookup_object_class_registry("employee").unwrap();
    assert_eq!(oc.superiors, vec!["2.5.6.6"]);
    assert_eq!(oc.must, vec!["0.9.2342.19200300.100.1.1"]);
    assert_eq!(oc.may, vec!["2.5.4.7", "2.5.4.13"]);

    let must = manager.registries().all_must("employee");
    for oid in ["2.5.4.0", "2.5.4.3", "2.5.4.4", "0.9.2342.19200300.100.1.1"] {
        assert!(must.contains(oid), "missing inherited MUST {oid}");
    }
}

#[test]
fn test_self_superior_is_a_cycle() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(21))
            .with_names(["ouroboros"])
            .with_superiors(["top", "ouroboros"]),
        SchemaViolation::SupCycle { .. }
    );
}

#[test]
fn test_duplicated_superior() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(22)).with_superiors(["person", "2.5.6.6"]),
        SchemaViolation::SupCycle { .. }
    );
}

#[test]
fn test_missing_superior() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(23)).with_superiors(["noSuchClass"]),
        SchemaViolation::NonExistentSuperior { .. }
    );
}

#[test]
fn test_superior_kind_rules() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(24))
            .with_kind(ObjectClassKind::Abstract)
            .with_superiors(["person"]),
        SchemaViolation::IncompatibleSuperiorType {
            kind: ObjectClassKind::Abstract,
            superior_kind: ObjectClassKind::Structural,
            ..
        }
    );
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(25)).with_superiors(["dcObject"]),
        SchemaViolation::IncompatibleSuperiorType {
            kind: ObjectClassKind::Structural,
            superior_kind: ObjectClassKind::Auxiliary,
            ..
        }
    );
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(26))
            .with_kind(ObjectClassKind::Auxiliary)
            .with_superiors(["organizationalPerson"]),
        SchemaViolation::IncompatibleSuperiorType { .. }
    );

    assert_accepted!(
        manager,
        ObjectClass::new(private_oid(27))
            .with_names(["badgeHolder"])
            .with_kind(ObjectClassKind::Auxiliary)
            .with_superiors(["top"])
    );
    assert_accepted!(
        manager,
        ObjectClass::new(private_oid(28))
            .with_names(["contractor"])
            .with_kind(ObjectClassKind::Auxiliary)
            .with_superiors(["badgeHolder"])
            .with_may(["description"])
    );
}

#[test]
fn test_unresolvable_attribute() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(29))
            .with_superiors(["top"])
            .with_may(["cn", "shoeSize"]),
        SchemaViolation::UnresolvableAttribute { .. }
    );

    match manager.errors() {
        [SchemaViolation::UnresolvableAttribute { attribute, .. }] => {
            assert_eq!(attribute, "shoeSize")
        }
        other => panic!("unexpected violations {other:?}"),
    }
}

#[test]
fn test_attribute_in_must_and_may() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(30))
            .with_superiors(["top"])
            .with_must(["cn"])
            .with_may(["commonName"]),
        SchemaViolation::DuplicateAttribute { .. }
    );
}

#[test]
fn test_may_repeating_an_inherited_must() {
    let mut manager = core_manager();
    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(31))
            .with_superiors(["person"])
            .with_may(["surname"]),
        SchemaViolation::DuplicateAttribute { .. }
    );

    // Repeating an inherited MAY is allowed
    assert_accepted!(
        manager,
        ObjectClass::new(private_oid(32))
            .with_superiors(["person"])
            .with_may(["telephoneNumber"])
    );
}

#[test]
fn test_collective_attributes_cannot_be_listed() {
    let mut manager = core_manager();
    assert!(manager.enable(&["collective"]).unwrap());

    assert_rejected!(
        manager,
        ObjectClass::new(private_oid(33))
            .with_kind(ObjectClassKind::Auxiliary)
            .with_may(["c-l"]),
        SchemaViolation::CollectiveAttributeInMustOrMay { .. }
    );
}

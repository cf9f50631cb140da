//! The standard schemas shipped with the library.

use super::*;
use ldap_schema::{Normalizer, ObjectKind, SchemaLoader};
use std::cmp::Ordering;

const MAIL: &str = "0.9.2342.19200300.100.1.3";

#[test]
fn test_embedded_loader_catalogue() {
    let manager = embedded_manager();
    let mut names: Vec<String> = manager
        .loader()
        .all_schemas()
        .into_iter()
        .map(|schema| schema.name)
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "collective",
            "core",
            "cosine",
            "inetorgperson",
            "nis",
            "other",
            "system"
        ]
    );

    let nis = manager.loader().schema("NIS").unwrap();
    assert!(!nis.enabled);
    assert_eq!(nis.dependencies, ["system", "core", "cosine"]);
}

#[test]
fn test_load_all_enabled() {
    let manager = standard_manager();

    assert!(manager.errors().is_empty(), "{:?}", manager.errors());
    assert_eq!(manager.enabled_schemas().len(), 6);
    assert!(!manager.is_schema_loaded("nis"));
    assert_eq!(manager.registries().size(), 166);
    assert_eq!(manager.global_oid_registry().size(), 166);

    assert_eq!(manager.schema_objects("system").unwrap().len(), 92);
    assert_eq!(manager.schema_objects("core").unwrap().len(), 38);
    assert_eq!(manager.schema_objects("cosine").unwrap().len(), 21);
    assert_eq!(manager.schema_objects("inetorgperson").unwrap().len(), 10);
    assert_eq!(manager.schema_objects("collective").unwrap().len(), 5);
    assert!(manager.schema_objects("other").unwrap().is_empty());
}

#[test]
fn test_load_with_deps_pulls_in_dependencies() {
    let mut manager = embedded_manager();
    assert!(manager.load_with_deps("inetOrgPerson").unwrap());

    for name in ["system", "core", "cosine", "inetorgperson"] {
        assert!(manager.is_enabled(name), "{name} should be enabled");
    }
    assert!(!manager.is_schema_loaded("collective"));
    assert_eq!(manager.registries().size(), 92 + 38 + 21 + 10);
}

#[test]
fn test_inherited_attributes_of_inet_org_person() {
    let manager = standard_manager();
    let must = manager.registries().all_must("inetOrgPerson");
    let may = manager.registries().all_may("inetOrgPerson");

    assert_eq!(
        must.into_iter().collect::<Vec<_>>(),
        ["2.5.4.0", "2.5.4.3", "2.5.4.4"]
    );
    assert!(may.contains(MAIL));
    assert!(may.contains("2.5.4.20"));

    let ancestors: Vec<&str> = manager
        .registries()
        .object_class_ancestors("inetOrgPerson")
        .into_iter()
        .map(|oc| oc.oid())
        .collect();
    assert_eq!(ancestors, ["2.5.6.7", "2.5.6.6", "2.5.6.0"]);
}

#[test]
fn test_kind_counts() {
    let manager = standard_manager();
    let registries = manager.registries();

    let total: usize = [
        ObjectKind::SyntaxChecker,
        ObjectKind::Normalizer,
        ObjectKind::Comparator,
        ObjectKind::LdapSyntax,
        ObjectKind::MatchingRule,
        ObjectKind::AttributeType,
        ObjectKind::ObjectClass,
    ]
    .into_iter()
    .map(|kind| registries.size_of(kind))
    .sum();
    assert_eq!(total, registries.size());
    assert_eq!(registries.size_of(ObjectKind::Normalizer), 6);
    assert_eq!(registries.size_of(ObjectKind::Comparator), 4);
    assert_eq!(registries.size_of(ObjectKind::ObjectClass), 22);
}

#[test]
fn test_values_of_standard_attributes() {
    let manager = standard_manager();

    assert_eq!(
        manager.normalize("commonName", "  Barbara   JENSEN ").unwrap(),
        "barbara jensen"
    );
    assert_eq!(
        manager.normalize("mail", " BJensen@Example.COM").unwrap(),
        "bjensen@example.com"
    );
    assert_eq!(
        manager.normalize("createTimestamp", "20240102153000+0200").unwrap(),
        "20240102133000.000Z"
    );
    assert!(manager.normalize("createTimestamp", "yesterday").is_err());

    assert_eq!(
        manager
            .compare("modifyTimestamp", "20240101000000Z", "20231231235959Z")
            .unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        manager.compare("cn", "Barbara Jensen", "barbara  jensen").unwrap(),
        Ordering::Equal
    );

    assert!(
        manager
            .check_syntax("entryUUID", "f81d4fae-7dec-11d0-a765-00a0c91e6bf6")
            .unwrap()
    );
    assert!(!manager.check_syntax("entryUUID", "not-a-uuid").unwrap());
    assert!(manager.check_syntax("mail", "bjensen@example.com").unwrap());
    assert!(!manager.check_syntax("mail", "bjensen@exämple.com").unwrap());

    assert_schema_error!(
        manager.normalize("uidNumber", "1000"),
        ldap_schema::SchemaError::ObjectNotFound { .. }
    );
}

#[test]
fn test_enabling_nis_on_demand() {
    let mut manager = standard_manager();
    assert!(manager.enable(&["nis"]).unwrap());

    assert!(manager.is_enabled("nis"));
    assert_eq!(
        manager.compare("uidNumber", " 9", "10").unwrap(),
        Ordering::Less
    );
    assert!(manager.check_syntax("uidNumber", "1000").unwrap());
    assert!(!manager.check_syntax("uidNumber", "one thousand").unwrap());
}

#[test]
fn test_normalizer_mapping() {
    let manager = standard_manager();
    let mapping = manager.normalizer_mapping();

    for key in ["cn", "commonname", "2.5.4.3"] {
        let entry = mapping.get(key).unwrap();
        assert_eq!(entry.oid, "2.5.13.2");
        assert_eq!(entry.normalizer.normalize(" A  B ").unwrap(), "a b");
    }
    // Attribute types without an equality rule are left out
    assert!(!mapping.contains_key("namingcontexts"));
    assert!(!mapping.contains_key("1.3.6.1.4.1.1466.101.120.5"));
}

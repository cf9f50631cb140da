//! Enabling, disabling and unloading schemas with dependencies.

use super::*;
use crate::common::init_logging;
use ldap_schema::{
    AttributeType, InMemorySchemaLoader, Schema, SchemaError, SchemaManager, SchemaObject,
    SchemaViolation,
};

fn acme_manager() -> SchemaManager {
    init_logging();
    SchemaManager::builder()
        .with_loader(application_loader())
        .build()
        .unwrap()
}

#[test]
fn test_enable_walks_dependency_closure() {
    let mut manager = acme_manager();
    assert!(manager.enable(&["ACME-HR"]).unwrap());

    for name in ["system", "core", "cosine", "acme", "acme-hr"] {
        assert!(manager.is_enabled(name), "{name} should be enabled");
    }
    assert!(!manager.is_schema_loaded("inetorgperson"));

    let must = manager.registries().all_must("acmeEmployee");
    assert!(must.contains(&private_oid(100)));
    assert!(must.contains("2.5.4.3"));
    assert_eq!(
        manager.normalize("acmeCostCenter", " CC  42 ").unwrap(),
        "cc 42"
    );
}

#[test]
fn test_load_requires_dependencies_in_batch_or_enabled() {
    let mut manager = acme_manager();

    match manager.load(&["acme"]) {
        Err(SchemaError::MissingDependency { schema, dependency }) => {
            assert_eq!(schema, "acme");
            assert_eq!(dependency, "system");
        }
        other => panic!("expected a missing dependency, got {other:?}"),
    }
    assert!(manager.loaded_schemas().is_empty());
    assert_eq!(manager.registries().size(), 0);

    // Order inside the batch does not matter
    assert!(manager.load(&["acme", "core", "system"]).unwrap());
    assert!(manager.is_enabled("acme"));

    assert_schema_error!(manager.load(&["acme-hr"]), SchemaError::MissingDependency { .. });
    assert_schema_error!(manager.load(&["nonexistent"]), SchemaError::SchemaNotFound { .. });
}

#[test]
fn test_disable_refuses_enabled_dependents() {
    let mut manager = acme_manager();
    assert!(manager.enable(&["acme-hr"]).unwrap());

    match manager.disable(&["acme"]) {
        Err(SchemaError::SchemaInUse { schema, dependent }) => {
            assert_eq!(schema, "acme");
            assert_eq!(dependent, "acme-hr");
        }
        other => panic!("expected the schema to be in use, got {other:?}"),
    }
    assert!(manager.is_enabled("acme"));
}

#[test]
fn test_disable_and_reenable() {
    let mut manager = acme_manager();
    assert!(manager.enable(&["cosine"]).unwrap());
    let baseline = manager.registries().size();

    assert!(manager.enable(&["acme-hr"]).unwrap());
    assert_eq!(manager.registries().size(), baseline + 4);

    assert!(manager.disable(&["acme-hr", "acme"]).unwrap());
    assert!(manager.is_disabled("acme"));
    assert!(manager.is_disabled("acme-hr"));
    assert_eq!(manager.registries().size(), baseline);
    assert!(manager.lookup_attribute_type_registry("acmeBadge").is_err());
    assert_eq!(manager.schema_objects("acme").unwrap().len(), 2);

    assert!(manager.enable(&["acme-hr"]).unwrap());
    assert!(manager.is_enabled("acme"));
    assert_eq!(manager.registries().size(), baseline + 4);
}

#[test]
fn test_disable_refused_while_objects_are_referenced() {
    let mut manager = acme_manager();
    assert!(manager.enable(&["acme", "other"]).unwrap());
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(120))
            .with_names(["visitorBadge"])
            .with_superior("acmeBadge")
    );

    assert!(!manager.disable(&["acme"]).unwrap());
    match manager.errors() {
        [SchemaViolation::InUse { oid, used_by }] => {
            assert_eq!(oid, &private_oid(100));
            assert_eq!(used_by, &[private_oid(120)]);
        }
        other => panic!("unexpected violations {other:?}"),
    }
    assert!(manager.is_enabled("acme"));
    assert!(manager.lookup_attribute_type_registry("acmeBadge").is_ok());

    assert!(manager.delete("visitorBadge"));
    assert!(manager.disable(&["acme"]).unwrap());
}

#[test]
fn test_unload() {
    let mut manager = acme_manager();
    assert!(manager.enable(&["acme-hr"]).unwrap());
    assert!(manager.disable(&["acme-hr"]).unwrap());

    // Loaded dependents block unloading even while disabled
    assert_schema_error!(manager.unload(&["acme"]), SchemaError::SchemaInUse { .. });

    assert!(manager.unload(&["acme", "acme-hr"]).unwrap());
    assert!(!manager.is_schema_loaded("acme"));
    assert!(!manager.is_schema_loaded("acme-hr"));
    assert!(manager.lookup_object_class_registry("acmePerson").is_err());
    assert!(manager.is_enabled("core"));

    assert_schema_error!(manager.unload(&["acme"]), SchemaError::SchemaNotLoaded { .. });
}

#[test]
fn test_load_disabled_then_enable() {
    let mut manager = acme_manager();
    assert!(manager.load_with_deps("core").unwrap());
    let size = manager.registries().size();

    assert!(manager.load_disabled(&["acme"]).unwrap());
    assert!(manager.is_schema_loaded("acme"));
    assert!(manager.is_disabled("acme"));
    assert!(manager.schema_objects("acme").is_none());
    assert_eq!(manager.registries().size(), size);

    assert_rejected!(
        manager,
        AttributeType::new(private_oid(121))
            .with_schema("acme")
            .with_superior("name"),
        SchemaViolation::SchemaDisabled { .. }
    );

    assert!(manager.enable(&["acme"]).unwrap());
    assert_eq!(manager.registries().size(), size + 2);
    assert_accepted!(
        manager,
        AttributeType::new(private_oid(121))
            .with_schema("acme")
            .with_superior("name")
    );
    assert_eq!(manager.schema_objects("acme").unwrap().len(), 3);
}

#[test]
fn test_add_to_unknown_schema() {
    let mut manager = acme_manager();
    assert!(manager.load_with_deps("core").unwrap());

    assert_rejected!(
        manager,
        AttributeType::new(private_oid(122))
            .with_schema("acme")
            .with_superior("name"),
        SchemaViolation::SchemaNotLoaded { .. }
    );
    // No schema name means the default schema, which is not loaded either
    assert_rejected!(
        manager,
        AttributeType::new(private_oid(123)).with_superior("name"),
        SchemaViolation::SchemaNotLoaded { .. }
    );
}

#[test]
fn test_verify_leaves_manager_untouched() {
    let loader = application_loader().with_schema(
        Schema::new("broken").with_dependencies(["system"]),
        [
            SchemaObject::from(AttributeType::new(private_oid(130)).with_syntax("9.9.9")),
            SchemaObject::from(
                AttributeType::new(private_oid(131))
                    .with_names(["fine"])
                    .with_superior("name"),
            ),
        ],
    );
    let mut manager = SchemaManager::new(loader);
    assert!(manager.load_with_deps("core").unwrap());
    let size = manager.registries().size();

    assert!(manager.verify(&["acme"]).unwrap());
    assert!(manager.errors().is_empty());
    assert!(!manager.is_schema_loaded("acme"));

    assert!(!manager.verify(&["broken"]).unwrap());
    assert!(matches!(
        manager.errors(),
        [SchemaViolation::UnresolvableSyntax { .. }]
    ));
    assert!(!manager.is_schema_loaded("broken"));
    assert_eq!(manager.registries().size(), size);

    // A real load keeps the objects that are valid
    assert!(!manager.load(&["broken"]).unwrap());
    assert!(manager.is_enabled("broken"));
    assert_eq!(manager.registries().size(), size + 1);
    assert!(manager.lookup_attribute_type_registry("fine").is_ok());
}

#[test]
fn test_dependency_cycle() {
    let loader = InMemorySchemaLoader::new()
        .with_schema(
            Schema::new("left").with_dependencies(["right"]),
            Vec::<SchemaObject>::new(),
        )
        .with_schema(
            Schema::new("right").with_dependencies(["left"]),
            Vec::<SchemaObject>::new(),
        );
    let mut manager = SchemaManager::new(loader);

    match manager.enable(&["left"]) {
        Err(SchemaError::DependencyCycle { path }) => {
            assert_eq!(path, ["left", "right", "left"]);
        }
        other => panic!("expected a dependency cycle, got {other:?}"),
    }
    assert!(manager.loaded_schemas().is_empty());
}

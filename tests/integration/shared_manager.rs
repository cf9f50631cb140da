//! The async, lock-protected manager.

use super::*;
use futures::future::join_all;
use ldap_schema::{
    AttributeType, SchemaError, SchemaManagerStats, SchemaViolation, SharedSchemaManager,
};
use std::cmp::Ordering;

#[tokio::test]
async fn test_concurrent_reads() {
    let shared = SharedSchemaManager::from(standard_manager());

    let lookups = (0..16).map(|i| {
        let shared = shared.clone();
        tokio::spawn(async move {
            let value = format!("  User   {i} ");
            shared.normalize("cn", &value).await
        })
    });
    let results = join_all(lookups).await;

    for (i, result) in results.into_iter().enumerate() {
        let normalized = result.expect("task panicked").unwrap();
        assert_eq!(normalized, format!("user {i}"));
    }
}

#[tokio::test]
async fn test_writes_are_visible_to_readers() {
    let shared = SharedSchemaManager::new(core_manager());
    let before = shared.stats().await;

    shared
        .add(
            AttributeType::new(private_oid(140))
                .with_names(["sharedBadge"])
                .with_superior("name"),
        )
        .await
        .unwrap();

    let at = shared.lookup_attribute_type("sharedbadge").await.unwrap();
    assert_eq!(at.superior.as_deref(), Some("2.5.4.41"));
    assert_eq!(
        shared.stats().await,
        SchemaManagerStats {
            registered_objects: before.registered_objects + 1,
            ..before
        }
    );

    let violations = shared
        .add(AttributeType::new(private_oid(140)).with_superior("name"))
        .await
        .unwrap_err();
    assert!(matches!(
        violations.as_slice(),
        [SchemaViolation::AlreadyRegistered { .. }]
    ));

    shared.delete("sharedBadge").await.unwrap();
    assert!(shared.lookup_attribute_type("sharedBadge").await.is_err());
}

#[tokio::test]
async fn test_schema_lifecycle() {
    let shared = SharedSchemaManager::new(embedded_manager());
    assert_eq!(shared.stats().await.loaded_schemas, 0);

    let violations = shared.load_with_deps("inetorgperson").await.unwrap();
    assert!(violations.is_empty());
    assert!(shared.is_enabled("cosine").await);
    assert_eq!(shared.stats().await.enabled_schemas, 4);

    let result = shared.disable(&["core"]).await;
    assert!(matches!(result, Err(SchemaError::SchemaInUse { .. })));

    assert!(shared.disable(&["inetorgperson"]).await.unwrap().is_empty());
    let stats = shared.stats().await;
    assert_eq!(stats.loaded_schemas, 4);
    assert_eq!(stats.enabled_schemas, 3);

    assert!(shared.unload(&["inetorgperson"]).await.unwrap().is_empty());
    assert_eq!(shared.stats().await.loaded_schemas, 3);

    assert!(shared.load(&["collective"]).await.unwrap().is_empty());
    assert!(shared.lookup_attribute_type("c-l").await.unwrap().collective);
}

#[tokio::test]
async fn test_snapshot_is_detached() {
    let shared = SharedSchemaManager::new(core_manager());
    let snapshot = shared.snapshot().await;

    shared
        .add(
            AttributeType::new(private_oid(141))
                .with_names(["later"])
                .with_superior("name"),
        )
        .await
        .unwrap();

    assert!(snapshot.lookup_attribute_type_registry("later").is_err());
    assert!(shared.read().await.lookup_attribute_type_registry("later").is_ok());
    assert_eq!(
        shared.compare("later", "b", "A").await.unwrap(),
        Ordering::Greater
    );
    assert!(shared.check_syntax("later", "anything").await.unwrap());
}

#[tokio::test]
async fn test_write_guard_and_errors() {
    let shared = SharedSchemaManager::new(core_manager());
    {
        let mut manager = shared.write().await;
        assert!(!manager.add(AttributeType::new(private_oid(142))));
        assert!(manager.add(
            AttributeType::new(private_oid(143))
                .with_names(["guarded"])
                .with_superior("name")
        ));
        assert!(!manager.add(AttributeType::new(private_oid(144)).with_superior("missing")));
    }

    assert!(matches!(
        shared.errors().await.as_slice(),
        [SchemaViolation::NonExistentSuperior { .. }]
    ));
    assert!(shared.lookup_object_class("person").await.is_ok());
    assert!(shared.lookup_attribute_type("guarded").await.is_ok());
}

//! Reading schema documents from disk.

use super::*;
use ldap_schema::{JsonSchemaLoader, SchemaError, SchemaLoader, SchemaManager};
use std::fs;
use std::path::PathBuf;

const ACME_DOCUMENT: &str = r#"{
  "schema": { "name": "acme", "owner": "cn=acme", "dependencies": ["system", "core"] },
  "attributeTypes": [
    {
      "oid": "1.3.6.1.4.1.32473.9.200",
      "names": ["acmeBadge"],
      "equality": "caseIgnoreMatch",
      "syntax": "1.3.6.1.4.1.1466.115.121.1.15",
      "singleValued": true
    }
  ],
  "objectClasses": [
    {
      "oid": "1.3.6.1.4.1.32473.9.201",
      "names": ["acmePerson"],
      "superiors": ["person"],
      "must": ["acmeBadge"]
    }
  ]
}"#;

/// Directory under the system temp dir, removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("ldap-schema-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn write(&self, file: &str, content: &str) {
        fs::write(self.0.join(file), content).unwrap();
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn embedded_document(name: &str) -> String {
    fs::read_to_string(format!("{}/schemas/{name}.json", env!("CARGO_MANIFEST_DIR"))).unwrap()
}

#[test]
fn test_from_dir() {
    let dir = ScratchDir::new();
    for name in ["system", "core"] {
        dir.write(&format!("{name}.json"), &embedded_document(name));
    }
    dir.write("acme.json", ACME_DOCUMENT);
    dir.write("README.txt", "not a schema");

    let loader = JsonSchemaLoader::from_dir(&dir.0).unwrap();
    assert_eq!(loader.all_schemas().len(), 3);
    let acme = loader.schema("acme").unwrap();
    assert_eq!(acme.owner.as_deref(), Some("cn=acme"));

    let mut manager = SchemaManager::builder().with_loader(loader).build().unwrap();
    assert!(manager.load_with_deps("acme").unwrap());

    let badge = manager.lookup_attribute_type_registry("acmebadge").unwrap();
    assert!(badge.single_valued);
    assert_eq!(badge.header.schema_name, "acme");
    assert_eq!(
        manager.registries().all_must("acmePerson").len(),
        // objectClass, sn, cn, acmeBadge
        4
    );
}

#[test]
fn test_duplicate_schema_documents() {
    let dir = ScratchDir::new();
    dir.write("a.json", ACME_DOCUMENT);
    dir.write("b.json", &ACME_DOCUMENT.replace("\"acme\"", "\"ACME\""));

    assert_schema_error!(
        JsonSchemaLoader::from_dir(&dir.0),
        SchemaError::InvalidConfiguration { .. }
    );
}

#[test]
fn test_malformed_documents() {
    assert_schema_error!(
        JsonSchemaLoader::from_documents(["{ \"schema\": "]),
        SchemaError::Json(_)
    );
    assert_schema_error!(
        JsonSchemaLoader::from_documents([r#"{ "attributeTypes": [] }"#]),
        SchemaError::Json(_)
    );
}

#[test]
fn test_missing_directory() {
    let path = std::env::temp_dir().join(format!("ldap-schema-missing-{}", uuid::Uuid::new_v4()));
    assert_schema_error!(JsonSchemaLoader::from_dir(path), SchemaError::Io(_));
}

#[test]
fn test_embedded_documents_match_files() {
    let loader = JsonSchemaLoader::from_documents(
        ["system", "core", "cosine"].map(embedded_document),
    )
    .unwrap();
    let embedded = JsonSchemaLoader::embedded().unwrap();

    for schema in loader.all_schemas() {
        let from_file = loader.load_schema_objects(&schema).unwrap();
        let from_binary = embedded.load_schema_objects(&schema).unwrap();
        assert_eq!(from_file.len(), from_binary.len(), "{}", schema.name);
    }
}

//! Core schema manager structure, accessors and value operations.

use super::builder::{SchemaManagerBuilder, SchemaManagerConfig};
use crate::error::{SchemaResult, SchemaViolation};
use crate::implementations::{
    ImplementationFactory, LdapComparator, NoOpNormalizer, Normalizer, Pluggable, SyntaxChecker,
};
use crate::model::{AttributeType, LdapSyntax, MatchingRule, MatchingRuleUsage, ObjectClass};
use crate::registries::{
    AttributeTypeRegistry, ComparatorRegistry, LdapSyntaxRegistry, MatchingRuleRegistry,
    NormalizerRegistry, ObjectClassRegistry, OidNormalizer, OidRegistry, Registries,
    SyntaxCheckerRegistry,
};
use crate::schema::descriptor::schema_key;
use crate::schema::{JsonSchemaLoader, Schema, SchemaLoader, SchemaObjects};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// State of a schema known to the manager.
#[derive(Debug, Clone)]
pub(super) struct LoadedSchema {
    pub(super) schema: Schema,
    /// Objects read from the loader or added later; `None` until first enabled
    pub(super) objects: Option<SchemaObjects>,
}

/// Central entry point for schema management.
///
/// The manager loads schemas through a [`SchemaLoader`], validates their
/// objects and keeps the registries consistent while schemas are enabled,
/// disabled and unloaded.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::SchemaManager;
///
/// # fn main() -> Result<(), ldap_schema::SchemaError> {
/// let mut manager = SchemaManager::with_embedded_schemas()?;
/// assert!(manager.load_with_deps("inetorgperson")?);
///
/// assert!(manager.is_enabled("core"));
/// let cn = manager.lookup_attribute_type_registry("commonName")?;
/// assert_eq!(cn.oid(), "2.5.4.3");
/// assert_eq!(manager.normalize("cn", "  Barbara   JENSEN ")?, "barbara jensen");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SchemaManager {
    pub(super) loader: Arc<dyn SchemaLoader>,
    pub(super) factory: Arc<ImplementationFactory>,
    pub(super) config: SchemaManagerConfig,
    pub(super) registries: Registries,
    pub(super) schemas: BTreeMap<String, LoadedSchema>, // lowercased name -> state
    pub(super) errors: Vec<SchemaViolation>,
}

impl SchemaManager {
    /// Create a manager over a loader with the default configuration and the
    /// built-in implementations.
    ///
    /// No schema is loaded yet.
    pub fn new(loader: impl SchemaLoader + 'static) -> Self {
        Self::with_parts(
            Arc::new(loader),
            ImplementationFactory::with_builtins(),
            SchemaManagerConfig::default(),
        )
    }

    /// Create a manager over the schemas embedded in the library.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`](crate::SchemaError::Json) if an embedded
    /// document cannot be parsed.
    pub fn with_embedded_schemas() -> SchemaResult<Self> {
        Ok(Self::new(JsonSchemaLoader::embedded()?))
    }

    /// Start configuring a manager.
    pub fn builder() -> SchemaManagerBuilder {
        SchemaManagerBuilder::new()
    }

    pub(crate) fn with_parts(
        loader: Arc<dyn SchemaLoader>,
        factory: ImplementationFactory,
        config: SchemaManagerConfig,
    ) -> Self {
        Self {
            loader,
            factory: Arc::new(factory),
            config,
            registries: Registries::new(),
            schemas: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    pub fn config(&self) -> &SchemaManagerConfig {
        &self.config
    }

    pub fn loader(&self) -> &Arc<dyn SchemaLoader> {
        &self.loader
    }

    /// Violations reported by the most recent mutating operation.
    pub fn errors(&self) -> &[SchemaViolation] {
        &self.errors
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn attribute_type_registry(&self) -> &AttributeTypeRegistry {
        self.registries.attribute_types()
    }

    pub fn object_class_registry(&self) -> &ObjectClassRegistry {
        self.registries.object_classes()
    }

    pub fn matching_rule_registry(&self) -> &MatchingRuleRegistry {
        self.registries.matching_rules()
    }

    pub fn ldap_syntax_registry(&self) -> &LdapSyntaxRegistry {
        self.registries.ldap_syntaxes()
    }

    pub fn normalizer_registry(&self) -> &NormalizerRegistry {
        self.registries.normalizers()
    }

    pub fn comparator_registry(&self) -> &ComparatorRegistry {
        self.registries.comparators()
    }

    pub fn syntax_checker_registry(&self) -> &SyntaxCheckerRegistry {
        self.registries.syntax_checkers()
    }

    pub fn global_oid_registry(&self) -> &OidRegistry {
        self.registries.global()
    }

    // Schema state

    /// Descriptor of a loaded schema, enabled or not.
    pub fn loaded_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(&schema_key(name)).map(|loaded| &loaded.schema)
    }

    /// Objects known for a loaded schema, including those added later.
    pub fn schema_objects(&self, name: &str) -> Option<&SchemaObjects> {
        self.schemas
            .get(&schema_key(name))
            .and_then(|loaded| loaded.objects.as_ref())
    }

    pub fn is_schema_loaded(&self, name: &str) -> bool {
        self.schemas.contains_key(&schema_key(name))
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.loaded_schema(name).is_some_and(|schema| schema.enabled)
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.loaded_schema(name).is_some_and(|schema| !schema.enabled)
    }

    /// Loaded schemas, in name order.
    pub fn loaded_schemas(&self) -> Vec<&Schema> {
        self.schemas.values().map(|loaded| &loaded.schema).collect()
    }

    pub fn enabled_schemas(&self) -> Vec<&Schema> {
        self.loaded_schemas()
            .into_iter()
            .filter(|schema| schema.enabled)
            .collect()
    }

    pub fn disabled_schemas(&self) -> Vec<&Schema> {
        self.loaded_schemas()
            .into_iter()
            .filter(|schema| !schema.enabled)
            .collect()
    }

    /// Every schema the loader knows, loaded or not.
    pub fn all_schemas(&self) -> Vec<Schema> {
        self.loader.all_schemas()
    }

    // Lookups

    pub fn lookup_attribute_type_registry(&self, id: &str) -> SchemaResult<&AttributeType> {
        self.registries.attribute_types().lookup(id)
    }

    pub fn lookup_object_class_registry(&self, id: &str) -> SchemaResult<&ObjectClass> {
        self.registries.object_classes().lookup(id)
    }

    pub fn lookup_matching_rule_registry(&self, id: &str) -> SchemaResult<&MatchingRule> {
        self.registries.matching_rules().lookup(id)
    }

    pub fn lookup_ldap_syntax_registry(&self, id: &str) -> SchemaResult<&LdapSyntax> {
        self.registries.ldap_syntaxes().lookup(id)
    }

    pub fn lookup_normalizer_registry(&self, id: &str) -> SchemaResult<&Pluggable<dyn Normalizer>> {
        self.registries.normalizers().lookup(id)
    }

    pub fn lookup_comparator_registry(
        &self,
        id: &str,
    ) -> SchemaResult<&Pluggable<dyn LdapComparator>> {
        self.registries.comparators().lookup(id)
    }

    pub fn lookup_syntax_checker_registry(
        &self,
        id: &str,
    ) -> SchemaResult<&Pluggable<dyn SyntaxChecker>> {
        self.registries.syntax_checkers().lookup(id)
    }

    // Values

    /// Normalize a value with the equality rule of an attribute type.
    ///
    /// Attribute types without an equality rule return the value unchanged.
    pub fn normalize(&self, attribute: &str, value: &str) -> SchemaResult<String> {
        let at = self.lookup_attribute_type_registry(attribute)?;
        let normalizer: Arc<dyn Normalizer> = match self
            .registries
            .effective_matching_rule(at, MatchingRuleUsage::Equality)
        {
            Some(rule) => self.registries.normalizer_for(rule),
            None => Arc::new(NoOpNormalizer),
        };
        Ok(normalizer.normalize(value)?)
    }

    /// Check a value against the (possibly inherited) syntax of an attribute type.
    pub fn check_syntax(&self, attribute: &str, value: &str) -> SchemaResult<bool> {
        let at = self.lookup_attribute_type_registry(attribute)?;
        let valid = match self.registries.effective_syntax(at) {
            Some(syntax) => self
                .registries
                .syntax_checker_for(syntax)
                .is_valid_syntax(value),
            None => true,
        };
        Ok(valid)
    }

    /// Order two values of an attribute type.
    ///
    /// Uses the ordering rule when there is one, the equality rule otherwise;
    /// both values are normalized with the rule's normalizer first.
    pub fn compare(&self, attribute: &str, left: &str, right: &str) -> SchemaResult<Ordering> {
        let at = self.lookup_attribute_type_registry(attribute)?;
        let rule = self
            .registries
            .effective_matching_rule(at, MatchingRuleUsage::Ordering)
            .or_else(|| {
                self.registries
                    .effective_matching_rule(at, MatchingRuleUsage::Equality)
            });

        match rule {
            Some(rule) => {
                let normalizer = self.registries.normalizer_for(rule);
                let comparator = self.registries.comparator_for(rule);
                let left = normalizer.normalize(left)?;
                let right = normalizer.normalize(right)?;
                Ok(comparator.compare(&left, &right))
            }
            None => Ok(left.cmp(right)),
        }
    }

    /// Equality normalizers keyed by attribute type OID and lowercased name.
    pub fn normalizer_mapping(&self) -> HashMap<String, OidNormalizer> {
        self.registries.normalizer_mapping()
    }
}

//! Builder pattern for configuring schema manager instances.
//!
//! The builder wires a [`SchemaLoader`], an [`ImplementationFactory`] and the
//! validation options into a [`SchemaManager`]. Without an explicit loader the
//! manager uses the schema documents embedded in the library.

use crate::error::{SchemaError, SchemaResult};
use crate::implementations::ImplementationFactory;
use crate::manager::SchemaManager;
use crate::model::oid::is_descr;
use crate::schema::{JsonSchemaLoader, SchemaLoader};
use std::sync::Arc;

/// Validation options of a schema manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaManagerConfig {
    /// Reject objects whose OID is not a dotted-decimal numeric OID.
    pub validate_oids: bool,

    /// Reject objects whose names are not RFC 4512 descriptors.
    pub check_name_syntax: bool,

    /// Schema owning objects added without a schema name. Defaults to "other".
    pub default_schema: String,
}

impl Default for SchemaManagerConfig {
    fn default() -> Self {
        Self {
            validate_oids: true,
            check_name_syntax: true,
            default_schema: "other".to_string(),
        }
    }
}

impl SchemaManagerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.default_schema.is_empty() {
            return Err(SchemaError::invalid_configuration(
                "Default schema name cannot be empty",
            ));
        }

        if !is_descr(&self.default_schema) {
            return Err(SchemaError::invalid_configuration(format!(
                "Default schema name '{}' must start with a letter and contain only letters, digits and hyphens",
                self.default_schema
            )));
        }

        Ok(())
    }
}

/// Builder for configuring and creating schema manager instances.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::{InMemorySchemaLoader, SchemaManagerBuilder};
///
/// # fn main() -> Result<(), ldap_schema::SchemaError> {
/// // Embedded schemas, default options
/// let manager = SchemaManagerBuilder::new().build()?;
/// assert!(manager.enabled_schemas().is_empty());
///
/// // Custom loader, relaxed name checks
/// let manager = SchemaManagerBuilder::new()
///     .with_loader(InMemorySchemaLoader::new())
///     .check_name_syntax(false)
///     .with_default_schema("local")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SchemaManagerBuilder {
    loader: Option<Arc<dyn SchemaLoader>>,
    factory: Option<ImplementationFactory>,
    config: SchemaManagerConfig,
}

impl SchemaManagerBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loader the manager reads schema descriptors and objects from.
    pub fn with_loader(mut self, loader: impl SchemaLoader + 'static) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Set a loader already shared with other components.
    pub fn with_shared_loader(mut self, loader: Arc<dyn SchemaLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Set the factory resolving implementation identifiers.
    ///
    /// Defaults to [`ImplementationFactory::with_builtins`].
    pub fn with_factory(mut self, factory: ImplementationFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SchemaManagerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn validate_oids(mut self, enabled: bool) -> Self {
        self.config.validate_oids = enabled;
        self
    }

    pub fn check_name_syntax(mut self, enabled: bool) -> Self {
        self.config.check_name_syntax = enabled;
        self
    }

    /// Set the schema owning objects added without a schema name.
    pub fn with_default_schema(mut self, name: impl Into<String>) -> Self {
        self.config.default_schema = name.into();
        self
    }

    /// Build the configured schema manager.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if the configuration is invalid or the embedded
    /// schema documents cannot be parsed.
    pub fn build(self) -> SchemaResult<SchemaManager> {
        self.config.validate()?;

        let loader: Arc<dyn SchemaLoader> = match self.loader {
            Some(loader) => loader,
            None => Arc::new(JsonSchemaLoader::embedded()?),
        };
        let factory = self
            .factory
            .unwrap_or_else(ImplementationFactory::with_builtins);

        Ok(SchemaManager::with_parts(loader, factory, self.config))
    }
}

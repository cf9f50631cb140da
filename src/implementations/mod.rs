//! Pluggable normalizer, comparator and syntax checker implementations.
//!
//! Schema data names an implementation by identifier (for example
//! `"DeepTrimToLowerNormalizer"`). The [`ImplementationFactory`] is the closed
//! table resolving those identifiers to constructors. It ships with the
//! built-in implementations and accepts custom ones registered at startup.
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::implementations::{ImplementationFactory, Normalizer};
//!
//! let factory = ImplementationFactory::with_builtins();
//! let normalizer = factory
//!     .create_normalizer("2.5.13.2", "DeepTrimToLowerNormalizer")
//!     .expect("built-in normalizer");
//! assert_eq!(normalizer.normalize("  Barbara   Jensen ").unwrap(), "barbara jensen");
//! ```

pub mod comparators;
pub mod normalizers;
pub mod syntax_checkers;

use crate::error::{SchemaViolation, ValidationResult, ValueResult};
use crate::model::{ImplementationDescription, ObjectKind};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub use comparators::{
    BooleanComparator, GeneralizedTimeComparator, IntegerComparator, StringComparator,
};
pub use normalizers::{
    BooleanNormalizer, DeepTrimNormalizer, DeepTrimToLowerNormalizer, GeneralizedTimeNormalizer,
    NoOpNormalizer, NumericNormalizer,
};
pub use syntax_checkers::{
    BooleanSyntaxChecker, DirectoryStringSyntaxChecker, DnSyntaxChecker,
    GeneralizedTimeSyntaxChecker, Ia5StringSyntaxChecker, IntegerSyntaxChecker,
    NumericStringSyntaxChecker, OctetStringSyntaxChecker, OidSyntaxChecker,
    PrintableStringSyntaxChecker, UuidSyntaxChecker,
};

/// Turns attribute values into their canonical form for matching.
pub trait Normalizer: fmt::Debug + Send + Sync {
    fn normalize(&self, value: &str) -> ValueResult<String>;
}

/// Orders two (normalized) attribute values.
pub trait LdapComparator: fmt::Debug + Send + Sync {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

/// Decides whether a value conforms to a syntax.
pub trait SyntaxChecker: fmt::Debug + Send + Sync {
    fn is_valid_syntax(&self, value: &str) -> bool;
}

type Constructor<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

/// A registered descriptor together with its instantiated implementation.
pub struct Pluggable<T: ?Sized> {
    pub description: ImplementationDescription,
    pub implementation: Arc<T>,
}

impl<T: ?Sized> Pluggable<T> {
    pub fn new(description: ImplementationDescription, implementation: Arc<T>) -> Self {
        Self {
            description,
            implementation,
        }
    }
}

impl<T: ?Sized> Clone for Pluggable<T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            implementation: Arc::clone(&self.implementation),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Pluggable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pluggable")
            .field("oid", &self.description.header.oid)
            .field("implementation", &self.implementation)
            .finish()
    }
}

/// Closed table of implementation constructors keyed by identifier.
#[derive(Clone, Default)]
pub struct ImplementationFactory {
    normalizers: HashMap<String, Constructor<dyn Normalizer>>,
    comparators: HashMap<String, Constructor<dyn LdapComparator>>,
    syntax_checkers: HashMap<String, Constructor<dyn SyntaxChecker>>,
}

impl ImplementationFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory with every built-in implementation registered.
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();

        factory.register_normalizer("NoOpNormalizer", || Arc::new(NoOpNormalizer));
        factory.register_normalizer("DeepTrimNormalizer", || Arc::new(DeepTrimNormalizer));
        factory.register_normalizer("DeepTrimToLowerNormalizer", || {
            Arc::new(DeepTrimToLowerNormalizer)
        });
        factory.register_normalizer("NumericNormalizer", || Arc::new(NumericNormalizer));
        factory.register_normalizer("BooleanNormalizer", || Arc::new(BooleanNormalizer));
        factory.register_normalizer("GeneralizedTimeNormalizer", || {
            Arc::new(GeneralizedTimeNormalizer)
        });

        factory.register_comparator("StringComparator", || Arc::new(StringComparator));
        factory.register_comparator("IntegerComparator", || Arc::new(IntegerComparator));
        factory.register_comparator("BooleanComparator", || Arc::new(BooleanComparator));
        factory.register_comparator("GeneralizedTimeComparator", || {
            Arc::new(GeneralizedTimeComparator)
        });

        factory.register_syntax_checker("OctetStringSyntaxChecker", || {
            Arc::new(OctetStringSyntaxChecker)
        });
        factory.register_syntax_checker("BooleanSyntaxChecker", || Arc::new(BooleanSyntaxChecker));
        factory.register_syntax_checker("IntegerSyntaxChecker", || Arc::new(IntegerSyntaxChecker));
        factory.register_syntax_checker("DirectoryStringSyntaxChecker", || {
            Arc::new(DirectoryStringSyntaxChecker)
        });
        factory.register_syntax_checker("Ia5StringSyntaxChecker", || {
            Arc::new(Ia5StringSyntaxChecker)
        });
        factory.register_syntax_checker("PrintableStringSyntaxChecker", || {
            Arc::new(PrintableStringSyntaxChecker)
        });
        factory.register_syntax_checker("NumericStringSyntaxChecker", || {
            Arc::new(NumericStringSyntaxChecker)
        });
        factory.register_syntax_checker("OidSyntaxChecker", || Arc::new(OidSyntaxChecker));
        factory.register_syntax_checker("DnSyntaxChecker", || Arc::new(DnSyntaxChecker));
        factory.register_syntax_checker("GeneralizedTimeSyntaxChecker", || {
            Arc::new(GeneralizedTimeSyntaxChecker)
        });
        factory.register_syntax_checker("UuidSyntaxChecker", || Arc::new(UuidSyntaxChecker));

        factory
    }

    /// Register (or replace) a normalizer constructor.
    pub fn register_normalizer<F>(&mut self, id: impl Into<String>, constructor: F)
    where
        F: Fn() -> Arc<dyn Normalizer> + Send + Sync + 'static,
    {
        self.normalizers.insert(id.into(), Arc::new(constructor));
    }

    /// Register (or replace) a comparator constructor.
    pub fn register_comparator<F>(&mut self, id: impl Into<String>, constructor: F)
    where
        F: Fn() -> Arc<dyn LdapComparator> + Send + Sync + 'static,
    {
        self.comparators.insert(id.into(), Arc::new(constructor));
    }

    /// Register (or replace) a syntax checker constructor.
    pub fn register_syntax_checker<F>(&mut self, id: impl Into<String>, constructor: F)
    where
        F: Fn() -> Arc<dyn SyntaxChecker> + Send + Sync + 'static,
    {
        self.syntax_checkers.insert(id.into(), Arc::new(constructor));
    }

    /// Instantiate the normalizer registered under `id` for the object `oid`.
    pub fn create_normalizer(&self, oid: &str, id: &str) -> ValidationResult<Arc<dyn Normalizer>> {
        match self.normalizers.get(id) {
            Some(constructor) => Ok(constructor()),
            None => Err(self.resolution_error(oid, id, ObjectKind::Normalizer)),
        }
    }

    /// Instantiate the comparator registered under `id` for the object `oid`.
    pub fn create_comparator(
        &self,
        oid: &str,
        id: &str,
    ) -> ValidationResult<Arc<dyn LdapComparator>> {
        match self.comparators.get(id) {
            Some(constructor) => Ok(constructor()),
            None => Err(self.resolution_error(oid, id, ObjectKind::Comparator)),
        }
    }

    /// Instantiate the syntax checker registered under `id` for the object `oid`.
    pub fn create_syntax_checker(
        &self,
        oid: &str,
        id: &str,
    ) -> ValidationResult<Arc<dyn SyntaxChecker>> {
        match self.syntax_checkers.get(id) {
            Some(constructor) => Ok(constructor()),
            None => Err(self.resolution_error(oid, id, ObjectKind::SyntaxChecker)),
        }
    }

    fn resolution_error(&self, oid: &str, id: &str, expected: ObjectKind) -> SchemaViolation {
        let known_elsewhere = self.normalizers.contains_key(id)
            || self.comparators.contains_key(id)
            || self.syntax_checkers.contains_key(id);

        if known_elsewhere {
            SchemaViolation::IncompatibleImplementation {
                oid: oid.to_string(),
                implementation: id.to_string(),
                expected,
            }
        } else {
            SchemaViolation::UnloadableImplementation {
                oid: oid.to_string(),
                implementation: id.to_string(),
            }
        }
    }
}

impl fmt::Debug for ImplementationFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut normalizers: Vec<_> = self.normalizers.keys().collect();
        let mut comparators: Vec<_> = self.comparators.keys().collect();
        let mut checkers: Vec<_> = self.syntax_checkers.keys().collect();
        normalizers.sort();
        comparators.sort();
        checkers.sort();

        f.debug_struct("ImplementationFactory")
            .field("normalizers", &normalizers)
            .field("comparators", &comparators)
            .field("syntax_checkers", &checkers)
            .finish()
    }
}

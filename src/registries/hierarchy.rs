//! Inheritance queries over registered attribute types and object classes,
//! and resolution of the implementations attached to matching rules.

use super::Registries;
use crate::implementations::{
    LdapComparator, NoOpNormalizer, Normalizer, OctetStringSyntaxChecker, StringComparator,
    SyntaxChecker,
};
use crate::model::{AttributeType, MatchingRule, MatchingRuleUsage, ObjectClass};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

/// Normalizer bound to the OID of the matching rule it serves.
#[derive(Clone)]
pub struct OidNormalizer {
    pub oid: String,
    pub normalizer: Arc<dyn Normalizer>,
}

impl fmt::Debug for OidNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidNormalizer")
            .field("oid", &self.oid)
            .field("normalizer", &self.normalizer)
            .finish()
    }
}

impl Registries {
    /// Superiors of an attribute type, nearest first.
    pub fn attribute_type_ancestors(&self, id: &str) -> Vec<&AttributeType> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.attribute_types.get(id);

        while let Some(at) = current {
            if !seen.insert(at.oid()) {
                break;
            }
            current = at
                .superior
                .as_deref()
                .and_then(|superior| self.attribute_types.get(superior));
            if let Some(superior) = current {
                ancestors.push(superior);
            }
        }
        ancestors
    }

    /// Registered attribute types deriving (directly or not) from `id`.
    pub fn attribute_type_descendants(&self, id: &str) -> Vec<&AttributeType> {
        let Some(root) = self.attribute_types.oid_of(id) else {
            return Vec::new();
        };
        self.attribute_types
            .iter()
            .filter(|at| at.oid() != root)
            .filter(|at| {
                self.attribute_type_ancestors(at.oid())
                    .iter()
                    .any(|ancestor| ancestor.oid() == root)
            })
            .collect()
    }

    /// Syntax OID of an attribute type, inherited from its superiors if needed.
    pub fn effective_syntax<'a>(&'a self, at: &'a AttributeType) -> Option<&'a str> {
        std::iter::once(at)
            .chain(self.attribute_type_ancestors(at.oid()))
            .find_map(|at| at.syntax.as_deref())
    }

    /// Matching rule of an attribute type for a usage, inherited if needed.
    pub fn effective_matching_rule(
        &self,
        at: &AttributeType,
        usage: MatchingRuleUsage,
    ) -> Option<&MatchingRule> {
        let rule_of = |at: &AttributeType| match usage {
            MatchingRuleUsage::Equality => at.equality.clone(),
            MatchingRuleUsage::Ordering => at.ordering.clone(),
            MatchingRuleUsage::Substring => at.substring.clone(),
        };
        let rule = std::iter::once(at)
            .chain(self.attribute_type_ancestors(at.oid()))
            .find_map(rule_of)?;
        self.matching_rules.get(&rule)
    }

    /// Superiors of an object class, breadth first without duplicates.
    pub fn object_class_ancestors(&self, id: &str) -> Vec<&ObjectClass> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::new();
        let mut queue: VecDeque<&str> = match self.object_classes.get(id) {
            Some(oc) => {
                seen.insert(oc.oid());
                oc.superiors.iter().map(String::as_str).collect()
            }
            None => return ancestors,
        };

        while let Some(superior) = queue.pop_front() {
            let Some(oc) = self.object_classes.get(superior) else {
                continue;
            };
            if !seen.insert(oc.oid()) {
                continue;
            }
            ancestors.push(oc);
            queue.extend(oc.superiors.iter().map(String::as_str));
        }
        ancestors
    }

    /// OIDs of every attribute an entry of this class must hold, inherited included.
    pub fn all_must(&self, id: &str) -> BTreeSet<String> {
        self.collect_attributes(id, |oc| &oc.must)
    }

    /// OIDs of every attribute an entry of this class may hold, inherited included.
    pub fn all_may(&self, id: &str) -> BTreeSet<String> {
        self.collect_attributes(id, |oc| &oc.may)
    }

    fn collect_attributes<F>(&self, id: &str, attributes: F) -> BTreeSet<String>
    where
        F: Fn(&ObjectClass) -> &Vec<String>,
    {
        self.object_classes
            .get(id)
            .into_iter()
            .chain(self.object_class_ancestors(id))
            .flat_map(|oc| attributes(oc).iter().cloned())
            .collect()
    }

    /// Normalizer used by a matching rule, [`NoOpNormalizer`] when it has none.
    pub fn normalizer_for(&self, rule: &MatchingRule) -> Arc<dyn Normalizer> {
        rule.normalizer
            .as_deref()
            .and_then(|oid| self.normalizers.get(oid))
            .map(|n| Arc::clone(&n.implementation))
            .unwrap_or_else(|| Arc::new(NoOpNormalizer))
    }

    /// Comparator used by a matching rule, [`StringComparator`] when it has none.
    pub fn comparator_for(&self, rule: &MatchingRule) -> Arc<dyn LdapComparator> {
        rule.comparator
            .as_deref()
            .and_then(|oid| self.comparators.get(oid))
            .map(|c| Arc::clone(&c.implementation))
            .unwrap_or_else(|| Arc::new(StringComparator))
    }

    /// Syntax checker of a syntax OID, [`OctetStringSyntaxChecker`] when none is attached.
    pub fn syntax_checker_for(&self, syntax: &str) -> Arc<dyn SyntaxChecker> {
        self.syntaxes
            .get(syntax)
            .and_then(|s| s.syntax_checker.as_deref())
            .and_then(|oid| self.syntax_checkers.get(oid))
            .map(|c| Arc::clone(&c.implementation))
            .unwrap_or_else(|| Arc::new(OctetStringSyntaxChecker))
    }

    /// Map from every attribute type OID and name (lowercased) to the
    /// normalizer of its effective equality matching rule.
    ///
    /// Attribute types without an equality rule are left out.
    pub fn normalizer_mapping(&self) -> HashMap<String, OidNormalizer> {
        let mut mapping = HashMap::new();

        for at in self.attribute_types.iter() {
            let Some(rule) = self.effective_matching_rule(at, MatchingRuleUsage::Equality) else {
                continue;
            };
            let entry = OidNormalizer {
                oid: rule.oid().to_string(),
                normalizer: self.normalizer_for(rule),
            };
            for name in &at.header.names {
                mapping.insert(name.to_ascii_lowercase(), entry.clone());
            }
            mapping.insert(at.oid().to_string(), entry);
        }
        mapping
    }
}

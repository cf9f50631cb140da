//! Topological ordering of schemas by their declared dependencies.

use super::Schema;
use super::descriptor::schema_key;
use crate::error::{SchemaError, SchemaResult};
use log::trace;
use std::collections::HashSet;

/// What to do with a schema name met while walking dependencies.
#[derive(Debug)]
pub(crate) enum Visit {
    /// Include the schema and walk its own dependencies
    Expand(Schema),
    /// The schema is already available; stop here
    Satisfied,
}

/// Order `roots` and their transitive dependencies so that every schema
/// comes after the schemas it depends on.
///
/// `visit` is called once per distinct name with the schema that declared the
/// dependency (`None` for roots) and decides whether to expand the name or
/// treat it as satisfied. Its errors abort the walk. A dependency path leading
/// back to a schema still being expanded fails with
/// [`SchemaError::DependencyCycle`].
pub(crate) fn dependency_order<F>(roots: &[&str], mut visit: F) -> SchemaResult<Vec<Schema>>
where
    F: FnMut(&str, Option<&Schema>) -> SchemaResult<Visit>,
{
    let mut walk = DependencyWalk {
        visit: &mut visit,
        stack: Vec::new(),
        done: HashSet::new(),
        order: Vec::new(),
    };
    for root in roots {
        walk.walk(root, None)?;
    }
    Ok(walk.order)
}

struct DependencyWalk<'f, F> {
    visit: &'f mut F,
    stack: Vec<Schema>,
    done: HashSet<String>,
    order: Vec<Schema>,
}

impl<F> DependencyWalk<'_, F>
where
    F: FnMut(&str, Option<&Schema>) -> SchemaResult<Visit>,
{
    fn walk(&mut self, name: &str, dependent: Option<&Schema>) -> SchemaResult<()> {
        let key = schema_key(name);
        if self.done.contains(&key) {
            return Ok(());
        }
        if let Some(position) = self.stack.iter().position(|s| s.key() == key) {
            let mut path: Vec<String> = self.stack[position..]
                .iter()
                .map(|s| s.name.clone())
                .collect();
            path.push(name.to_string());
            return Err(SchemaError::DependencyCycle { path });
        }

        match (self.visit)(name, dependent)? {
            Visit::Satisfied => {
                trace!("Schema '{}' already available", name);
            }
            Visit::Expand(schema) => {
                self.stack.push(schema.clone());
                for dependency in &schema.dependencies {
                    self.walk(dependency, Some(&schema))?;
                }
                self.stack.pop();
                trace!("Schema '{}' ordered at position {}", schema.name, self.order.len());
                self.order.push(schema);
            }
        }
        self.done.insert(key);
        Ok(())
    }
}

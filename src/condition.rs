//! Condition registry: operation name to expression constructor.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use resql_core::{Expr, ResqlError, Result};

use crate::conditions;

/// Builds an expression from a translated field name and raw predicate arguments.
pub type Condition = Arc<dyn Fn(&str, &[&str]) -> Result<Expr> + Send + Sync>;

/// Resolves an operation name to its condition constructor.
pub trait ConditionFactory: Send + Sync {
    fn create_condition(&self, operation: &str) -> Result<Condition>;
}

/// Name-keyed condition registry.
///
/// ```
/// use resql::{ConditionFactory, ConditionMap, expr};
///
/// let conditions = ConditionMap::with_defaults()
///     .insert("between", |field: &str, args: &[&str]| {
///         let [low, high] = args else {
///             return Err(resql::ResqlError::InvalidArguments {
///                 operation: "between".into(),
///                 reason: "expected exactly two values".into(),
///             });
///         };
///         expr::and([expr::gte(field, *low), expr::lte(field, *high)])
///     });
///
/// assert!(conditions.create_condition("between").is_ok());
/// assert!(conditions.create_condition("regex").is_err());
/// ```
#[derive(Clone, Default)]
pub struct ConditionMap {
    conditions: IndexMap<String, Condition>,
}

impl ConditionMap {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in operation.
    pub fn with_defaults() -> Self {
        conditions::defaults()
    }

    /// Registers `condition` under `name`, replacing any previous entry.
    pub fn insert<F>(mut self, name: impl Into<String>, condition: F) -> Self
    where
        F: Fn(&str, &[&str]) -> Result<Expr> + Send + Sync + 'static,
    {
        self.conditions.insert(name.into(), Arc::new(condition));
        self
    }

    /// Registers an already shared condition.
    pub fn insert_shared(mut self, name: impl Into<String>, condition: Condition) -> Self {
        self.conditions.insert(name.into(), condition);
        self
    }

    /// Returns this registry with every entry of `other` laid over it.
    pub fn overlay(mut self, other: ConditionMap) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.conditions.contains_key(name)
    }

    /// Registered operation names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl ConditionFactory for ConditionMap {
    fn create_condition(&self, operation: &str) -> Result<Condition> {
        self.conditions
            .get(operation)
            .cloned()
            .ok_or_else(|| ResqlError::UndefinedOperation {
                operation: operation.to_owned(),
            })
    }
}

impl fmt::Debug for ConditionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

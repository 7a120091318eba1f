//! Declarative resource configuration.
//!
//! ```toml
//! resource = "articles"
//! default_fields = ["id", "title"]
//! allowed_select = ["id", "title", "body", "created_at"]
//! allowed_sort = ["created_at"]
//! default_limit = 25
//!
//! [columns]
//! id = "id"
//! title = "title"
//! body = "body"
//! createdAt = "created_at"
//!
//! [allowed_conditions]
//! id = ["eq", "in"]
//! body = ["like", "contains"]
//!
//! [pagination]
//! style = "limit_offset"
//! max_limit = 100
//! ```

use indexmap::IndexMap;
use thiserror::Error;

use crate::condition::ConditionMap;
use crate::extension::{default_limit, limit_number_pagination, limit_offset_pagination};
use crate::filter::{ARGS_DELIMITER, DelimitedArgsParser, MAIN_DELIMITER};
use crate::resource::{AllowedConditions, ResourceSelectBuilder};
use crate::translator::{MapTranslator, SnakeCaseTranslator};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "toml")]
    #[error("invalid resource configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("resource name must not be empty")]
    MissingResource,

    #[error("field {field:?} allows operation {operation:?}, which is not registered")]
    UnknownOperation { field: String, operation: String },
}

/// How external field names become column names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Naming {
    /// Look names up in the `columns` table.
    #[default]
    Map,
    /// Convert names to snake_case.
    SnakeCase,
}

/// Predicate delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    pub main_delimiter: char,
    pub args_delimiter: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            main_delimiter: MAIN_DELIMITER,
            args_delimiter: ARGS_DELIMITER.to_owned(),
        }
    }
}

/// Pagination style read from the query's page descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "style", rename_all = "snake_case"))]
pub enum PaginationConfig {
    LimitOffset {
        #[cfg_attr(feature = "serde", serde(default))]
        max_limit: Option<u64>,
        #[cfg_attr(feature = "serde", serde(default))]
        max_offset: Option<u64>,
    },
    LimitNumber {
        #[cfg_attr(feature = "serde", serde(default))]
        max_limit: Option<u64>,
    },
}

/// Everything needed to build a [`ResourceSelectBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ResourceConfig {
    pub resource: String,
    pub naming: Naming,
    /// External field name to column name, used with [`Naming::Map`].
    pub columns: IndexMap<String, String>,
    /// Qualifier prefixed to columns, used with [`Naming::SnakeCase`].
    pub qualifier: Option<String>,
    pub default_fields: Vec<String>,
    pub allowed_select: Option<Vec<String>>,
    pub always_select: Vec<String>,
    pub always_select_all: bool,
    pub allowed_sort: Vec<String>,
    pub allowed_conditions: IndexMap<String, Vec<String>>,
    pub parser: ParserConfig,
    pub pagination: Option<PaginationConfig>,
    pub default_limit: Option<u64>,
}

impl ResourceConfig {
    /// Parses a configuration from TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Builds the orchestrator with the built-in conditions.
    pub fn into_builder(self) -> Result<ResourceSelectBuilder, ConfigError> {
        self.into_builder_with(ConditionMap::with_defaults())
    }

    /// Builds the orchestrator with the given condition registry.
    ///
    /// Every allowed operation must be registered. Pagination runs before the
    /// default limit, so the default only applies when the page names no limit.
    pub fn into_builder_with(
        self,
        conditions: ConditionMap,
    ) -> Result<ResourceSelectBuilder, ConfigError> {
        if self.resource.is_empty() {
            return Err(ConfigError::MissingResource);
        }

        let allowed: AllowedConditions = self.allowed_conditions.into_iter().collect();
        let unknown = allowed.iter().find(|(_, op)| !conditions.contains(op));
        if let Some((field, operation)) = unknown {
            return Err(ConfigError::UnknownOperation {
                field: field.to_owned(),
                operation: operation.to_owned(),
            });
        }

        let mut builder = match self.naming {
            Naming::Map => {
                ResourceSelectBuilder::new(self.resource, MapTranslator::new(self.columns))
            }
            Naming::SnakeCase => {
                let translator = match self.qualifier {
                    Some(qualifier) => SnakeCaseTranslator::qualified(qualifier),
                    None => SnakeCaseTranslator::new(),
                };
                ResourceSelectBuilder::new(self.resource, translator)
            }
        };

        builder = builder
            .default_fields(self.default_fields)
            .always_select_fields(self.always_select)
            .always_select_all_fields(self.always_select_all)
            .allow_sorting_by_fields(self.allowed_sort)
            .allow_filtering(allowed)
            .conditions(conditions)
            .parser(DelimitedArgsParser::new(
                self.parser.main_delimiter,
                self.parser.args_delimiter,
            ));
        if let Some(fields) = self.allowed_select {
            builder = builder.allow_select_fields(fields);
        }

        match self.pagination {
            Some(PaginationConfig::LimitOffset {
                max_limit,
                max_offset,
            }) => builder = builder.extend(limit_offset_pagination(max_limit, max_offset)),
            Some(PaginationConfig::LimitNumber { max_limit }) => {
                builder = builder.extend(limit_number_pagination(max_limit))
            }
            None => {}
        }
        if let Some(limit) = self.default_limit {
            builder = builder.extend(default_limit(limit));
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_rejected() {
        let config = ResourceConfig {
            resource: "articles".into(),
            allowed_conditions: [("id".to_string(), vec!["eq".to_string(), "regex".to_string()])]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let err = config.into_builder().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"field "id" allows operation "regex", which is not registered"#
        );
    }

    #[test]
    fn test_missing_resource_rejected() {
        assert!(matches!(
            ResourceConfig::default().into_builder(),
            Err(ConfigError::MissingResource)
        ));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_parse_toml() {
        let config = ResourceConfig::from_toml_str(
            r#"
            resource = "articles"
            naming = "snake_case"
            default_fields = ["id"]

            [parser]
            main_delimiter = "="

            [pagination]
            style = "limit_number"
            max_limit = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.naming, Naming::SnakeCase);
        assert_eq!(config.parser.main_delimiter, '=');
        assert_eq!(config.parser.args_delimiter, ",");
        assert_eq!(
            config.pagination,
            Some(PaginationConfig::LimitNumber {
                max_limit: Some(50)
            })
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_unknown_keys_rejected() {
        assert!(matches!(
            ResourceConfig::from_toml_str("resource = \"a\"\nallowed_fields = []"),
            Err(ConfigError::Toml(_))
        ));
    }
}

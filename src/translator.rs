//! Field translators map external field names to column names.

use heck::ToSnakeCase;
use indexmap::IndexMap;
use resql_core::{ResqlError, Result};

/// Maps a batch of external names to internal names of the same length.
///
/// A translator fails atomically: either every name is translated, or the error
/// names the first entry it could not translate.
pub trait Translator: Send + Sync {
    fn translate(&self, fields: &[String]) -> Result<Vec<String>>;
}

impl<F> Translator for F
where
    F: Fn(&[String]) -> Result<Vec<String>> + Send + Sync,
{
    fn translate(&self, fields: &[String]) -> Result<Vec<String>> {
        self(fields)
    }
}

/// Translates through a lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapTranslator {
    table: IndexMap<String, String>,
}

impl MapTranslator {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.table.insert(field.into(), column.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.table.get(field).map(String::as_str)
    }
}

impl Translator for MapTranslator {
    fn translate(&self, fields: &[String]) -> Result<Vec<String>> {
        fields
            .iter()
            .map(|field| {
                self.get(field)
                    .map(str::to_owned)
                    .ok_or_else(|| ResqlError::Translation {
                        entry: field.clone(),
                        reason: "translation is not found".into(),
                    })
            })
            .collect()
    }
}

/// Converts `camelCase` / `kebab-case` field names to `snake_case` columns.
///
/// Total: it never fails. An optional qualifier prefixes every column, which keeps
/// names unambiguous once joins are involved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnakeCaseTranslator {
    qualifier: Option<String>,
}

impl SnakeCaseTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes every column with `<qualifier>.`
    pub fn qualified(qualifier: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
        }
    }
}

impl Translator for SnakeCaseTranslator {
    fn translate(&self, fields: &[String]) -> Result<Vec<String>> {
        Ok(fields
            .iter()
            .map(|field| match &self.qualifier {
                Some(qualifier) => format!("{qualifier}.{}", field.to_snake_case()),
                None => field.to_snake_case(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_map_translator() {
        let translator = MapTranslator::new([("id", "id"), ("createdAt", "created_at")]);
        assert_eq!(
            translator.translate(&names(&["createdAt", "id"])).unwrap(),
            names(&["created_at", "id"])
        );
        assert!(translator.translate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_map_translator_fails_on_first_unknown() {
        let translator = MapTranslator::default().insert("id", "id");
        let err = translator
            .translate(&names(&["id", "secret", "other"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"failed to translate format of the "secret" entry because translation is not found"#
        );
    }

    #[test]
    fn test_snake_case_translator() {
        let translator = SnakeCaseTranslator::new();
        assert_eq!(
            translator
                .translate(&names(&["createdAt", "author-name", "id"]))
                .unwrap(),
            names(&["created_at", "author_name", "id"])
        );

        let translator = SnakeCaseTranslator::qualified("articles");
        assert_eq!(
            translator.translate(&names(&["updatedAt"])).unwrap(),
            names(&["articles.updated_at"])
        );
    }

    #[test]
    fn test_closure_translator() {
        let upper = |fields: &[String]| -> Result<Vec<String>> {
            Ok(fields.iter().map(|f| f.to_uppercase()).collect())
        };
        assert_eq!(upper.translate(&names(&["id"])).unwrap(), names(&["ID"]));
    }
}

// testcat-core/src/infrastructure/yaml.rs

use crate::domain::catalog::{CatalogEntry, TestCatalog};
use crate::domain::error::DomainError;
use crate::domain::ports::CatalogLoader;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Loads catalog files written as `Class: [method, ...]` YAML mappings.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlCatalogLoader;

impl CatalogLoader for YamlCatalogLoader {
    fn load(&self, path: &Path) -> Result<TestCatalog, DomainError> {
        let content = fs::read_to_string(path).map_err(|source| DomainError::CatalogUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        parse_catalog(path, &content)
    }
}

/// Parses catalog text. `path` is only used for error reporting.
pub fn parse_catalog(path: &Path, content: &str) -> Result<TestCatalog, DomainError> {
    let malformed = |reason: String| DomainError::MalformedCatalog {
        path: path.to_path_buf(),
        reason,
    };

    if content.trim().is_empty() {
        return Err(malformed("document is empty".to_string()));
    }

    let document: Value =
        serde_yaml::from_str(content).map_err(|e| DomainError::InvalidYaml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Err(malformed("document is empty".to_string())),
        other => {
            return Err(malformed(format!(
                "top level must be a mapping, found {}",
                kind(&other)
            )));
        }
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let class = scalar_text(&key).ok_or_else(|| {
            malformed(format!("class name must be a scalar, found {}", kind(&key)))
        })?;

        let methods = match value {
            Value::Sequence(items) => items
                .iter()
                .map(|item| {
                    scalar_text(item).ok_or_else(|| {
                        malformed(format!(
                            "method of '{}' must be a scalar, found {}",
                            class,
                            kind(item)
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(malformed(format!(
                    "methods of '{}' must be a sequence, found {}",
                    class,
                    kind(&other)
                )));
            }
        };

        entries.push(CatalogEntry { class, methods });
    }

    Ok(TestCatalog::new(entries))
}

/// Text of a string, number or boolean scalar.
/// Booleans render as `True`/`False`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

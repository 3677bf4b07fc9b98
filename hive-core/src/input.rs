//! Decoding of the JSON the dashboard sends in.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::layout::{CategoryWeight, LayoutConfig};
use crate::summary::CategoryAmount;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate category id '{0}'")]
    DuplicateId(String),
}

impl InputError {
    /// 1-based position in the input, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            InputError::Json { source, .. } => Some((source.line(), source.column())),
            InputError::DuplicateId(_) => None,
        }
    }
}

fn decode<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<T, InputError> {
    serde_json::from_str(json).map_err(|source| InputError::Json { what, source })
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), InputError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(InputError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

/// Parse a JSON array of categories. Each needs `id` and `weight` (or `percentage`).
pub fn parse_categories(json: &str) -> Result<Vec<CategoryWeight>, InputError> {
    let categories: Vec<CategoryWeight> = decode(json, "category list")?;
    check_unique(categories.iter().map(|c| c.id.as_str()))?;
    Ok(categories)
}

/// Parse a JSON array of `{ id, amount }` records.
pub fn parse_amounts(json: &str) -> Result<Vec<CategoryAmount>, InputError> {
    let amounts: Vec<CategoryAmount> = decode(json, "amount list")?;
    check_unique(amounts.iter().map(|c| c.id.as_str()))?;
    Ok(amounts)
}

/// Parse a partial layout config; missing fields take their defaults.
/// An empty string means "all defaults".
pub fn parse_config(json: &str) -> Result<LayoutConfig, InputError> {
    if json.trim().is_empty() {
        return Ok(LayoutConfig::default());
    }
    decode(json, "layout config")
}

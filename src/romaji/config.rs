use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiTable {
    mappings: BTreeMap<String, String>,
}

/// Unified error type for mapping-table data.
///
/// Covers both TOML parsing/validation and the prefix-freeness checks the
/// trie runs during construction. All of these are build-time data errors in
/// a fixed, reviewed table; conversion itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("[mappings] table is empty")]
    Empty,

    #[error("key must be lowercase ASCII letters: {0:?}")]
    InvalidKey(String),

    #[error("empty value for key: {0}")]
    EmptyValue(String),

    #[error("key {0:?} extends a shorter complete key")]
    ShadowedKey(String),

    #[error("key {0:?} is a prefix of a longer key")]
    PrefixKey(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),
}

/// Parse TOML text into a sorted `BTreeMap<romaji, kana>`.
///
/// Keys are restricted to `[a-z]`; the trie alphabet is never extended.
/// Anything else in the input stream passes through conversion unchanged.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let table: RomajiTable =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if table.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &table.mappings {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(RomajiConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(table.mappings)
}

//! TOML url map: an array of `[[entry]]` tables.

use serde::{Deserialize, Serialize};

use super::SourceError;
use crate::registry::UrlMap;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlMap {
    #[serde(default, rename = "entry")]
    entries: Vec<TomlEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlEntry {
    namespace: String,
    url: String,
}

pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, SourceError> {
    let map: TomlMap = toml::from_str(text)?;
    Ok(map
        .entries
        .into_iter()
        .map(|e| (e.namespace, e.url))
        .collect())
}

pub fn render(map: &UrlMap) -> Result<String, SourceError> {
    let table = TomlMap {
        entries: map
            .iter()
            .map(|e| TomlEntry {
                namespace: e.namespace().to_string(),
                url: e.base_url().to_string(),
            })
            .collect(),
    };
    Ok(toml::to_string_pretty(&table)?)
}

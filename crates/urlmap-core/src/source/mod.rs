//! Reading and writing url map files.
//!
//! Three on-disk shapes are supported:
//! - JSON: `[["GLib", "https://docs.gtk.org/glib/"], ...]`
//! - JS: gi-docgen's `urlmap.js` (`baseURLs = [ ... ]`)
//! - TOML: `[[entry]]` tables with `namespace` and `url` keys
//!
//! All of them go through [`UrlMap::new`], so the registry invariants hold
//! regardless of where a map came from.

pub mod js;
mod toml_table;

use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{RegistryError, UrlMap};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read url map {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON url map: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML url map: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("render TOML url map: {0}")]
    TomlRender(#[from] toml::ser::Error),
    #[error("invalid urlmap.js at line {line}, column {column}: {message}")]
    Js {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("cannot infer url map format from {} (expected .json, .js or .toml)", .0.display())]
    UnknownFormat(PathBuf),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    Json,
    Js,
    Toml,
}

impl MapFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn name(self) -> &'static str {
        match self {
            MapFormat::Json => "json",
            MapFormat::Js => "js",
            MapFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(MapFormat::Json),
            "js" | "javascript" => Ok(MapFormat::Js),
            "toml" => Ok(MapFormat::Toml),
            other => Err(format!("unknown url map format `{other}` (json, js, toml)")),
        }
    }
}

/// Parse a map from text in the given format.
pub fn parse_str(text: &str, format: MapFormat) -> Result<UrlMap, SourceError> {
    let pairs = match format {
        MapFormat::Json => serde_json::from_str::<Vec<(String, String)>>(text)?,
        MapFormat::Js => js::parse_pairs(text)?,
        MapFormat::Toml => toml_table::parse_pairs(text)?,
    };
    Ok(UrlMap::new(pairs)?)
}

/// Load a map file, picking the format from its extension.
pub fn load_path(path: &Path) -> Result<UrlMap, SourceError> {
    let format =
        MapFormat::from_path(path).ok_or_else(|| SourceError::UnknownFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_str(&text, format)?;
    tracing::debug!(
        path = %path.display(),
        %format,
        entries = map.len(),
        "loaded url map file"
    );
    Ok(map)
}

/// Render a map in the given format. Entries keep insertion order.
pub fn render(map: &UrlMap, format: MapFormat) -> Result<String, SourceError> {
    match format {
        MapFormat::Json => render_json(map),
        MapFormat::Js => Ok(js::render(map)),
        MapFormat::Toml => toml_table::render(map),
    }
}

/// One pair per line, unlike `to_string_pretty` which splits every pair.
fn render_json(map: &UrlMap) -> Result<String, SourceError> {
    if map.is_empty() {
        return Ok("[]\n".to_string());
    }
    let mut out = String::from("[\n");
    let last = map.len() - 1;
    for (i, entry) in map.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        let _ = writeln!(
            out,
            "  [{}, {}]{sep}",
            serde_json::to_string(entry.namespace())?,
            serde_json::to_string(entry.base_url())?
        );
    }
    out.push_str("]\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERAL: &str = r#"[
        ["GLib", "https://docs.gtk.org/glib/"],
        ["Gio",  "https://docs.gtk.org/gio/"]
    ]"#;

    #[test]
    fn json_literal_lookup() {
        let map = parse_str(LITERAL, MapFormat::Json).unwrap();
        assert_eq!(map.lookup("Gio").unwrap(), "https://docs.gtk.org/gio/");
        assert!(map.lookup("Gtk").is_err());
    }

    #[test]
    fn json_duplicate_is_registry_error() {
        let text = r#"[["GLib","https://docs.gtk.org/glib/"],["GLib","https://docs.gtk.org/glib/"]]"#;
        assert!(matches!(
            parse_str(text, MapFormat::Json),
            Err(SourceError::Registry(RegistryError::DuplicateNamespace { .. }))
        ));
    }

    #[test]
    fn json_rejects_wrong_arity() {
        let text = r#"[["GLib"]]"#;
        assert!(matches!(
            parse_str(text, MapFormat::Json),
            Err(SourceError::Json(_))
        ));
    }

    #[test]
    fn json_render_layout() {
        let map = parse_str(LITERAL, MapFormat::Json).unwrap();
        let text = render(&map, MapFormat::Json).unwrap();
        assert_eq!(
            text,
            "[\n  [\"GLib\", \"https://docs.gtk.org/glib/\"],\n  [\"Gio\", \"https://docs.gtk.org/gio/\"]\n]\n"
        );
        assert_eq!(parse_str(&text, MapFormat::Json).unwrap(), map);
    }

    #[test]
    fn json_render_empty() {
        let map = UrlMap::default();
        assert_eq!(render(&map, MapFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn format_from_path() {
        assert_eq!(
            MapFormat::from_path(Path::new("docs/urlmap.js")),
            Some(MapFormat::Js)
        );
        assert_eq!(
            MapFormat::from_path(Path::new("map.TOML")),
            Some(MapFormat::Toml)
        );
        assert_eq!(MapFormat::from_path(Path::new("map.yaml")), None);
        assert_eq!(MapFormat::from_path(Path::new("urlmap")), None);
    }

    #[test]
    fn load_unknown_extension() {
        assert!(matches!(
            load_path(Path::new("urlmap.txt")),
            Err(SourceError::UnknownFormat(_))
        ));
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::builtin::Builtin;
use crate::registry::UrlMap;
use crate::source;

/// Global configuration loaded from `~/.config/urlmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlmapConfig {
    /// Built-in table loaded first; omitted means start from an empty map.
    #[serde(default)]
    pub builtin: Option<Builtin>,
    /// Extra map files (.json, .js or .toml) loaded in order after the built-in
    /// table. Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub maps: Vec<PathBuf>,
}

impl Default for UrlmapConfig {
    fn default() -> Self {
        Self {
            builtin: Some(Builtin::Glib),
            maps: Vec::new(),
        }
    }
}

impl UrlmapConfig {
    /// Build the merged url map: built-in table first, then each map file.
    /// A namespace defined twice across sources is an error.
    pub fn load_map(&self) -> Result<UrlMap> {
        load_map(self.builtin, &self.maps)
    }
}

/// Merge an optional built-in table with map files, in that order.
pub fn load_map(builtin: Option<Builtin>, maps: &[PathBuf]) -> Result<UrlMap> {
    let mut parts = Vec::with_capacity(maps.len() + 1);
    if let Some(b) = builtin {
        parts.push(
            b.load()
                .with_context(|| format!("built-in url map `{b}`"))?,
        );
    }
    for path in maps {
        parts.push(source::load_path(path)?);
    }

    let map = UrlMap::merge(&parts).context("merge url maps")?;
    tracing::info!(
        builtin = builtin.map(Builtin::name).unwrap_or("none"),
        files = maps.len(),
        entries = map.len(),
        "url map ready"
    );
    Ok(map)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlmapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Parse a config file and resolve its relative map paths.
pub fn load_from_path(path: &Path) -> Result<UrlmapConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let mut cfg: UrlmapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    if let Some(dir) = path.parent() {
        for map in &mut cfg.maps {
            if map.is_relative() {
                *map = dir.join(&*map);
            }
        }
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlmapConfig::default();
        assert_eq!(cfg.builtin, Some(Builtin::Glib));
        assert!(cfg.maps.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlmapConfig {
            builtin: Some(Builtin::Girepository),
            maps: vec![PathBuf::from("/usr/share/doc/gtk4/urlmap.js")],
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlmapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_means_no_builtin() {
        let cfg: UrlmapConfig = toml::from_str("").unwrap();
        assert!(cfg.builtin.is_none());
        assert!(cfg.maps.is_empty());
    }

    #[test]
    fn config_toml_unknown_builtin_rejected() {
        assert!(toml::from_str::<UrlmapConfig>(r#"builtin = "gtk""#).is_err());
    }

    #[test]
    fn relative_maps_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
                builtin = "glib"
                maps = ["extra.json", "/abs/urlmap.js"]
            "#,
        )
        .unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.maps[0], dir.path().join("extra.json"));
        assert_eq!(cfg.maps[1], PathBuf::from("/abs/urlmap.js"));
    }

    #[test]
    fn load_map_merges_builtin_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("gtk.json");
        fs::write(&extra, r#"[["Gtk", "https://docs.gtk.org/gtk4/"]]"#).unwrap();

        let cfg = UrlmapConfig {
            builtin: Some(Builtin::Glib),
            maps: vec![extra],
        };
        let map = cfg.load_map().unwrap();
        assert_eq!(map.lookup("GLib").unwrap(), "https://docs.gtk.org/glib/");
        assert_eq!(map.lookup("Gtk").unwrap(), "https://docs.gtk.org/gtk4/");
        assert_eq!(map.namespaces().last(), Some("Gtk"));
    }

    #[test]
    fn load_map_rejects_overlap_with_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("dup.json");
        fs::write(&extra, r#"[["Gio", "https://example.com/gio/"]]"#).unwrap();

        let err = load_map(Some(Builtin::Glib), &[extra]).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate namespace `Gio`"));
    }
}

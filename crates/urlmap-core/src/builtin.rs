//! Url maps shipped with the GLib family of reference manuals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::registry::{RegistryError, UrlMap};

/// Map used by the GLib, GModule, GObject and Gio manuals.
pub const GLIB_URL_MAP: &[(&str, &str)] = &[
    ("GLib", "https://docs.gtk.org/glib/"),
    ("GModule", "https://docs.gtk.org/gmodule/"),
    ("GObject", "https://docs.gtk.org/gobject/"),
    ("Gio", "https://docs.gtk.org/gio/"),
];

/// Map used by the GIRepository manual.
pub const GIREPOSITORY_URL_MAP: &[(&str, &str)] = &[
    ("GLib", "https://docs.gtk.org/glib/"),
    ("GModule", "https://docs.gtk.org/gmodule/"),
    ("GObject", "https://docs.gtk.org/gobject/"),
    ("Gio", "https://docs.gtk.org/gio/"),
    ("GIRepository", "https://docs.gtk.org/girepository/"),
];

/// Selects one of the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Builtin {
    Glib,
    Girepository,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::Glib, Builtin::Girepository];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Glib => "glib",
            Builtin::Girepository => "girepository",
        }
    }

    pub fn pairs(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Builtin::Glib => GLIB_URL_MAP,
            Builtin::Girepository => GIREPOSITORY_URL_MAP,
        }
    }

    pub fn load(self) -> Result<UrlMap, RegistryError> {
        UrlMap::new(self.pairs().iter().copied())
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
                format!("unknown built-in map `{s}` (known: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_load() {
        for b in Builtin::ALL {
            let map = b.load().unwrap();
            assert_eq!(map.len(), b.pairs().len());
        }
    }

    #[test]
    fn glib_map_resolves_gio() {
        let map = Builtin::Glib.load().unwrap();
        assert_eq!(map.lookup("Gio").unwrap(), "https://docs.gtk.org/gio/");
        assert!(map.lookup("GIRepository").is_err());
    }

    #[test]
    fn girepository_map_includes_itself() {
        let map = Builtin::Girepository.load().unwrap();
        assert_eq!(
            map.lookup("GIRepository").unwrap(),
            "https://docs.gtk.org/girepository/"
        );
    }

    #[test]
    fn parse_builtin_name() {
        assert_eq!("glib".parse::<Builtin>().unwrap(), Builtin::Glib);
        assert_eq!("GIRepository".parse::<Builtin>().unwrap(), Builtin::Girepository);
        assert!("gtk".parse::<Builtin>().is_err());
    }
}

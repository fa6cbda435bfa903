//! Namespace to base-URL registry.
//!
//! A [`UrlMap`] is built once from an ordered list of `(namespace, base URL)`
//! pairs and never changes afterwards. Matching is exact and case-sensitive;
//! splitting a qualified symbol such as `Gio.File` into namespace and path is
//! left to the caller.

mod entry;
mod error;

pub use entry::Entry;
pub use error::{LookupError, RegistryError};

use std::collections::HashMap;
use url::Url;

/// Immutable, insertion-ordered namespace to base-URL table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMap {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl UrlMap {
    /// Build a map from ordered pairs.
    ///
    /// A repeated namespace is reported before any other problem, so a
    /// duplicate always yields `DuplicateNamespace` even when some entry is
    /// also invalid. Otherwise fails on the first empty or padded namespace or
    /// invalid base URL, in input order.
    pub fn new<I, N, U>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (N, U)>,
        N: AsRef<str>,
        U: AsRef<str>,
    {
        let pairs: Vec<(N, U)> = pairs.into_iter().collect();

        let mut index = HashMap::with_capacity(pairs.len());
        for (i, (namespace, _)) in pairs.iter().enumerate() {
            let namespace = namespace.as_ref();
            if let Some(&first) = index.get(namespace) {
                return Err(RegistryError::DuplicateNamespace {
                    namespace: namespace.to_string(),
                    first,
                    second: i,
                });
            }
            index.insert(namespace.to_string(), i);
        }

        let entries = pairs
            .iter()
            .enumerate()
            .map(|(i, (namespace, base_url))| {
                Entry::parse(i, namespace.as_ref(), base_url.as_ref())
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(entries = entries.len(), "url map loaded");
        Ok(Self { entries, index })
    }

    /// Concatenate maps in order. A namespace defined by more than one map is
    /// a duplicate; indices in the error refer to the concatenated list.
    pub fn merge<'a, I>(maps: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = &'a UrlMap>,
    {
        let pairs: Vec<(&str, &str)> = maps
            .into_iter()
            .flat_map(|m| m.iter().map(|e| (e.namespace(), e.base_url())))
            .collect();
        Self::new(pairs)
    }

    /// Exact-match lookup of a namespace's base URL.
    pub fn lookup(&self, namespace: &str) -> Result<&str, LookupError> {
        self.get(namespace)
            .map(Entry::base_url)
            .ok_or_else(|| LookupError::NamespaceNotFound {
                namespace: namespace.to_string(),
            })
    }

    pub fn get(&self, namespace: &str) -> Option<&Entry> {
        self.index.get(namespace).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.index.contains_key(namespace)
    }

    /// Join `symbol_path` onto the namespace's base URL.
    ///
    /// The path must stay under the base: absolute URLs, rooted or
    /// scheme-relative paths, and `..` segments climbing out of it are
    /// rejected. A base without a trailing slash has its last segment
    /// replaced, as in RFC 3986 reference resolution.
    pub fn link(&self, namespace: &str, symbol_path: &str) -> Result<Url, LookupError> {
        let entry = self
            .get(namespace)
            .ok_or_else(|| LookupError::NamespaceNotFound {
                namespace: namespace.to_string(),
            })?;
        let invalid = |reason: &str| LookupError::InvalidSymbolPath {
            namespace: namespace.to_string(),
            path: symbol_path.to_string(),
            reason: reason.to_string(),
        };

        if symbol_path.starts_with('/') || symbol_path.starts_with('\\') {
            return Err(invalid("path is rooted"));
        }
        if Url::parse(symbol_path).is_ok() {
            return Err(invalid("path is an absolute URL"));
        }

        let base = entry.parsed_url();
        let scope = base.join("./").map_err(|e| invalid(&e.to_string()))?;
        let joined = base.join(symbol_path).map_err(|e| invalid(&e.to_string()))?;
        if !joined.as_str().starts_with(scope.as_str()) {
            return Err(invalid("path leaves the base URL"));
        }
        Ok(joined)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::namespace)
    }
}

impl<'a> IntoIterator for &'a UrlMap {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! A single namespace to base-URL pair.

use url::Url;

use super::error::RegistryError;

/// One row of a url map.
///
/// The base URL is kept both verbatim (what lookups return) and parsed (what
/// links are joined against), since `Url` normalises e.g. a missing trailing
/// slash on a bare origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    namespace: String,
    base_url: String,
    parsed: Url,
}

impl Entry {
    /// Validate a raw pair. `index` is the position in the input list and only
    /// used for error reporting.
    pub(crate) fn parse(
        index: usize,
        namespace: &str,
        base_url: &str,
    ) -> Result<Self, RegistryError> {
        if namespace.trim().is_empty() {
            return Err(RegistryError::EmptyNamespace { index });
        }
        if namespace.trim() != namespace {
            return Err(RegistryError::PaddedNamespace {
                namespace: namespace.to_string(),
                index,
            });
        }

        let invalid = |reason: String| RegistryError::InvalidBaseUrl {
            namespace: namespace.to_string(),
            url: base_url.to_string(),
            reason,
        };

        if base_url.trim().is_empty() {
            return Err(invalid("empty URL".to_string()));
        }
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            base_url: base_url.to_string(),
            parsed,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Base URL exactly as given at construction.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn parsed_url(&self) -> &Url {
        &self.parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_verbatim_url() {
        let e = Entry::parse(0, "Ex", "https://example.com").unwrap();
        assert_eq!(e.base_url(), "https://example.com");
        assert_eq!(e.parsed_url().as_str(), "https://example.com/");
    }

    #[test]
    fn rejects_blank_namespace() {
        let err = Entry::parse(3, "  ", "https://example.com/").unwrap_err();
        assert_eq!(err, RegistryError::EmptyNamespace { index: 3 });
    }

    #[test]
    fn rejects_padded_namespace() {
        for ns in [" GLib", "GLib ", "\tGio\n"] {
            assert_eq!(
                Entry::parse(1, ns, "https://docs.gtk.org/glib/").unwrap_err(),
                RegistryError::PaddedNamespace {
                    namespace: ns.to_string(),
                    index: 1,
                }
            );
        }
        assert!(Entry::parse(0, "GLib", "https://docs.gtk.org/glib/").is_ok());
    }

    #[test]
    fn rejects_relative_and_opaque_urls() {
        assert!(matches!(
            Entry::parse(0, "A", "glib/").unwrap_err(),
            RegistryError::InvalidBaseUrl { .. }
        ));
        assert!(matches!(
            Entry::parse(0, "A", "mailto:docs@example.com").unwrap_err(),
            RegistryError::InvalidBaseUrl { .. }
        ));
        assert!(matches!(
            Entry::parse(0, "A", "").unwrap_err(),
            RegistryError::InvalidBaseUrl { .. }
        ));
    }
}

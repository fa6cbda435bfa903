//! Error types for building and querying a url map.

use thiserror::Error;

/// Construction failed; no registry is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two entries share a namespace. Indices are positions in the input list.
    #[error("duplicate namespace `{namespace}` (entries {first} and {second})")]
    DuplicateNamespace {
        namespace: String,
        first: usize,
        second: usize,
    },
    #[error("entry {index} has an empty namespace")]
    EmptyNamespace { index: usize },
    /// Leading or trailing whitespace would let `" GLib"` sit beside `"GLib"`.
    #[error("entry {index} has whitespace around namespace `{namespace}`")]
    PaddedNamespace { namespace: String, index: usize },
    #[error("invalid base URL `{url}` for namespace `{namespace}`: {reason}")]
    InvalidBaseUrl {
        namespace: String,
        url: String,
        reason: String,
    },
}

/// Query failed. Callers decide whether this is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("namespace `{namespace}` not found")]
    NamespaceNotFound { namespace: String },
    #[error("cannot join `{path}` onto base URL of `{namespace}`: {reason}")]
    InvalidSymbolPath {
        namespace: String,
        path: String,
        reason: String,
    },
}

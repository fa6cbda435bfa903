//! `urlmap lookup` and `urlmap resolve`.

use anyhow::Result;
use std::io::Write;
use urlmap_core::UrlMap;

/// Print the base URL of `namespace`. An unknown namespace is an error so the
/// process exits non-zero.
pub fn run_lookup(map: &UrlMap, namespace: &str, out: &mut impl Write) -> Result<()> {
    match map.lookup(namespace) {
        Ok(url) => {
            writeln!(out, "{url}")?;
            Ok(())
        }
        Err(err) => {
            tracing::warn!(namespace, "lookup failed");
            Err(err.into())
        }
    }
}

/// Print the base URL of `namespace` joined with `symbol_path`.
pub fn run_resolve(
    map: &UrlMap,
    namespace: &str,
    symbol_path: &str,
    out: &mut impl Write,
) -> Result<()> {
    let url = map.link(namespace, symbol_path)?;
    tracing::debug!(namespace, symbol_path, %url, "resolved");
    writeln!(out, "{url}")?;
    Ok(())
}

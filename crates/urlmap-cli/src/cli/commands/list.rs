//! `urlmap list` – show every namespace in load order.

use anyhow::Result;
use std::io::Write;
use urlmap_core::UrlMap;

pub fn run_list(map: &UrlMap, out: &mut impl Write) -> Result<()> {
    if map.is_empty() {
        writeln!(out, "No namespaces loaded.")?;
        return Ok(());
    }
    let width = map
        .namespaces()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("NAMESPACE".len());
    writeln!(out, "{:<width$} BASE URL", "NAMESPACE")?;
    for entry in map {
        writeln!(out, "{:<width$} {}", entry.namespace(), entry.base_url())?;
    }
    Ok(())
}

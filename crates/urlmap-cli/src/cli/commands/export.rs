//! `urlmap export` – render the loaded map as JSON, urlmap.js or TOML.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use urlmap_core::source;
use urlmap_core::{MapFormat, UrlMap};

pub fn run_export(
    map: &UrlMap,
    format: MapFormat,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let text = source::render(map, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("write url map: {}", path.display()))?;
            tracing::info!(path = %path.display(), %format, "exported url map");
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}

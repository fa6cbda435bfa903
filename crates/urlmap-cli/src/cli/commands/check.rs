//! `urlmap check` – validate map files one by one.

use anyhow::{bail, Result};
use std::io::Write;
use std::path::PathBuf;
use urlmap_core::source;

/// Report each file as ok or failed. Fails if any file is invalid, after all
/// files have been reported.
pub fn run_check(paths: &[PathBuf], out: &mut impl Write) -> Result<()> {
    let mut failed = 0usize;
    for path in paths {
        match source::load_path(path) {
            Ok(map) => {
                let noun = if map.len() == 1 { "entry" } else { "entries" };
                writeln!(out, "ok      {} ({} {noun})", path.display(), map.len())?;
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(path = %path.display(), "invalid url map: {err}");
                writeln!(out, "invalid {}: {err}", path.display())?;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} url map files invalid", paths.len());
    }
    Ok(())
}

use anyhow::{Context, Result};
use geojson_diff::{DiffConfig, Snapshot};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

pub fn run(path: &str) -> Result<ExitCode> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read snapshot: {}", path))?;
    let snapshot = Snapshot::from_slice(&bytes)
        .with_context(|| format!("Failed to parse snapshot: {}", path))?;

    let index = snapshot.index(&DiffConfig::default());
    let stats = index.stats();

    let filename = Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| path.into());

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "Snapshot: {}", filename)?;
    writeln!(handle, "Features: {}", stats.feature_count)?;
    writeln!(handle, "Indexed: {}", stats.indexed)?;
    writeln!(handle, "Unresolved identities: {}", stats.unresolved)?;
    writeln!(handle, "Key collisions: {}", stats.collisions)?;

    Ok(ExitCode::from(0))
}

use crate::output::{json, text};
use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use geojson_diff::{CollisionPolicy, DiffConfig, DiffReport, Snapshot};
use std::io;
use std::process::ExitCode;

/// Property fields monitored by default. The engine takes whatever list it
/// is given; this default belongs to the CLI, matching the fields the
/// defibrillator dataset maintainers watched.
const DEFAULT_TRACKED_FIELDS: [&str; 9] = [
    "name",
    "operator",
    "opening_hours",
    "emergency",
    "defibrillator:location",
    "access",
    "indoor",
    "description",
    "phone",
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    old_path: &str,
    new_path: &str,
    format: OutputFormat,
    fields: Option<&str>,
    track_coordinates: bool,
    first_wins: bool,
    quiet: bool,
    verbose: bool,
) -> Result<ExitCode> {
    if quiet && verbose {
        bail!("Cannot use both --quiet and --verbose flags together");
    }

    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let config = build_config(fields, track_coordinates, first_wins)?;

    let old = load_snapshot(old_path)?;
    let new = load_snapshot(new_path)?;

    let report = old.diff(&new, &config);

    if verbosity == Verbosity::Verbose {
        print_diagnostics_to_stderr(&report, old_path, new_path);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            text::write_text_report(&mut handle, &report, verbosity)?;
        }
        OutputFormat::Json => {
            json::write_json_report(&mut handle, &report)?;
        }
    }

    Ok(exit_code_from_report(&report))
}

fn build_config(
    fields: Option<&str>,
    track_coordinates: bool,
    first_wins: bool,
) -> Result<DiffConfig> {
    let tracked: Vec<String> = match fields {
        Some(list) => list.split(',').map(|f| f.trim().to_string()).collect(),
        None => DEFAULT_TRACKED_FIELDS
            .iter()
            .map(|f| f.to_string())
            .collect(),
    };

    let policy = if first_wins {
        CollisionPolicy::FirstWriteWins
    } else {
        CollisionPolicy::LastWriteWins
    };

    DiffConfig::builder()
        .tracked_fields(tracked)
        .collision_policy(policy)
        .track_coordinates(track_coordinates)
        .build()
        .context("Invalid tracked-field list")
}

fn load_snapshot(path: &str) -> Result<Snapshot> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read snapshot: {}", path))?;
    Snapshot::from_slice(&bytes).with_context(|| format!("Failed to parse snapshot: {}", path))
}

fn print_diagnostics_to_stderr(report: &DiffReport, old_path: &str, new_path: &str) {
    for (path, stats) in [(old_path, &report.old_stats), (new_path, &report.new_stats)] {
        if stats.unresolved > 0 {
            eprintln!(
                "Warning: {}: {} of {} features have no resolvable identity and were skipped",
                path, stats.unresolved, stats.feature_count
            );
        }
        if stats.collisions > 0 {
            eprintln!(
                "Warning: {}: {} duplicate identity keys",
                path, stats.collisions
            );
        }
    }
}

fn exit_code_from_report(report: &DiffReport) -> ExitCode {
    if report.is_empty() {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    }
}

use crate::commands::diff::Verbosity;
use anyhow::Result;
use geojson_diff::{ChangeRecord, DiffReport, PropertyValue};
use std::io::Write;

pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    verbosity: Verbosity,
) -> Result<()> {
    if report.is_empty() {
        writeln!(w, "No changes found.")?;
        write_summary(w, report)?;
        return Ok(());
    }

    if verbosity != Verbosity::Quiet {
        write_section(w, "Added entries", report.added(), verbosity)?;
        write_section(w, "Removed entries", report.removed(), verbosity)?;
        write_section(w, "Modified entries", report.modified(), verbosity)?;
    }

    write_summary(w, report)?;

    Ok(())
}

fn write_section<'a, W: Write>(
    w: &mut W,
    title: &str,
    records: impl Iterator<Item = &'a ChangeRecord>,
    verbosity: Verbosity,
) -> Result<()> {
    let records: Vec<&ChangeRecord> = records.collect();
    if records.is_empty() {
        return Ok(());
    }

    writeln!(w, "{}", title)?;
    writeln!(w, "{}", "=".repeat(30))?;
    for record in records {
        writeln!(w, "- {} ({})", record.name, record.key)?;
        if let Some(address) = &record.address {
            writeln!(w, "    {}", address)?;
        }
        if verbosity == Verbosity::Verbose {
            if let Some((lon, lat)) = record.coordinate {
                writeln!(w, "    at {}, {}", lon, lat)?;
            }
        }
        for change in &record.changes {
            writeln!(
                w,
                "  • {}: {} → {}",
                change.field,
                render_side(&change.old),
                render_side(&change.new)
            )?;
        }
    }
    writeln!(w)?;

    Ok(())
}

fn render_side(value: &Option<PropertyValue>) -> String {
    match value {
        None => "<none>".to_string(),
        Some(v) => format!("'{}'", v.render()),
    }
}

fn write_summary<W: Write>(w: &mut W, report: &DiffReport) -> Result<()> {
    writeln!(w, "---")?;
    writeln!(w, "Summary:")?;
    writeln!(w, "  Added: {}", report.summary.added)?;
    writeln!(w, "  Removed: {}", report.summary.removed)?;
    writeln!(w, "  Modified: {}", report.summary.modified)?;
    writeln!(w, "  Total changes: {}", report.summary.total())?;

    Ok(())
}

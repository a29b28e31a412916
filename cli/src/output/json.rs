use anyhow::Result;
use geojson_diff::{serialize_diff_report, DiffReport};
use std::io::Write;

pub fn write_json_report<W: Write>(w: &mut W, report: &DiffReport) -> Result<()> {
    let json = serialize_diff_report(report)?;
    writeln!(w, "{}", json)?;
    Ok(())
}

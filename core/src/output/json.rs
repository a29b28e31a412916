//! JSON serialization of diff reports.
//!
//! Serialization goes through `serde_json::to_string` with the report's
//! field order fixed by the type definitions, so identical reports always
//! produce byte-identical output.

use crate::diff::DiffReport;

pub fn serialize_diff_report(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn serialize_diff_report_pretty(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

use crate::version_resolution::domain::{CoverageEntry, VersionRecord};

const COVERED_MARKER: &str = "DONE ";
const UNCOVERED_MARKER: &str = "     ";

/// CoverageReportFormatter adapter listing which KB rows have a dmidecode dump
///
/// Rows with a dump are prefixed `DONE `, the rest with five spaces, so the
/// report lines up with the KB text it echoes.
pub struct CoverageReportFormatter;

impl CoverageReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, entries: &[CoverageEntry]) -> String {
        let mut output = String::new();
        for entry in entries {
            output.push_str(if entry.has_firmware_evidence {
                COVERED_MARKER
            } else {
                UNCOVERED_MARKER
            });
            output.push_str(&Self::describe(&entry.record));
            output.push('\n');
        }
        output
    }

    fn describe(record: &VersionRecord) -> String {
        match &record.source_line {
            Some(line) => line.clone(),
            None => [
                record.osname.as_str(),
                record.full_version.as_str(),
                record.release_date.as_str(),
                record.build_number.as_str(),
                record.installer_build_number.as_str(),
            ]
            .join("\t"),
        }
    }
}

impl Default for CoverageReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::VersionRecord;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Shape of one KB table row:
///
/// `{OS tag} {major.minor}{descriptor} \t {release name} \t {date} \t {build} \t {installer build}`
///
/// The separator after the major pair swallows the stray `.0` in rows like
/// "5.1.0 GA" or "6.0.0b", and the descriptor is non-greedy so that it stops
/// at the first tab. If VMware changes the layout of the KB page, this is the
/// place to adjust. Digits are ASCII only; a blank date column still needs
/// at least one space between its tabs.
static KB_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (ESX|ESXi|ESXI|ESXi/ESX)?\s+
        (
          ([0-9]\.[0-9])
          (?:\s+|\.[0-9]?\s*|\S\s*)
          (.*?)
        )
        \t
        [^\t]+
        \t
        ([^\S\t]+|[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}|[0-9]{4}-[0-9]{2}-[0-9]{2})
        \t
        ([0-9]+)
        \t
        (\S+)
        \s*$
        ",
    )
    .expect("static regex")
});

static US_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("static regex")
});

static SKIPPABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:#.*)?$").expect("static regex"));

/// Outcome of parsing a whole KB table.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    /// Records in table order (newest release first, as VMware lists them)
    pub records: Vec<VersionRecord>,
    /// Lines that did not match, in input order
    pub failures: Vec<VersionMapError>,
}

/// RecordParser service turning KB table text into `VersionRecord`s
///
/// Pure string processing, no I/O. Every line is parsed independently.
pub struct RecordParser;

impl RecordParser {
    /// Parses a single line.
    ///
    /// # Returns
    /// * `Ok(None)` for blank and `#` comment lines
    /// * `Ok(Some(record))` for a well-formed row
    /// * `Err(VersionMapError::ParseFailure)` for anything else
    pub fn parse_line(
        line_number: usize,
        line: &str,
    ) -> std::result::Result<Option<VersionRecord>, VersionMapError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if SKIPPABLE.is_match(line) {
            return Ok(None);
        }

        let failure = || VersionMapError::ParseFailure {
            line_number,
            line: line.to_string(),
        };

        let caps = KB_ROW.captures(line).ok_or_else(failure)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();

        let release_date = Self::normalize_date(&group(5)).ok_or_else(failure)?;

        Ok(Some(VersionRecord {
            osname: group(1),
            full_version: group(2),
            major_version: group(3),
            true_minor_version: group(4),
            release_date,
            build_number: group(6),
            installer_build_number: group(7),
            interpolated_update_version: String::new(),
            interpolated_build_number: String::new(),
            source_line: Some(line.to_string()),
        }))
    }

    /// Parses every line of `text`, collecting records and failures side by side.
    pub fn parse_table(text: &str) -> ParsedTable {
        let mut table = ParsedTable::default();
        for (index, line) in text.lines().enumerate() {
            match Self::parse_line(index + 1, line) {
                Ok(Some(record)) => table.records.push(record),
                Ok(None) => {}
                Err(failure) => {
                    tracing::debug!(%failure, "skipping KB line");
                    table.failures.push(failure);
                }
            }
        }
        tracing::debug!(
            records = table.records.len(),
            failures = table.failures.len(),
            "parsed KB table"
        );
        table
    }

    /// Normalizes a release date to `YYYY-MM-DD`.
    ///
    /// Blank stays blank, ISO dates pass through, `M/D/YYYY` is rewritten.
    /// Returns `None` for a date that is not a real calendar day.
    pub fn normalize_date(raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Some(String::new());
        }
        let date = match US_DATE.captures(raw) {
            Some(caps) => {
                let month: u32 = caps[1].parse().ok()?;
                let day: u32 = caps[2].parse().ok()?;
                let year: i32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)?
            }
            None => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?,
        };
        Some(date.format("%Y-%m-%d").to_string())
    }
}

use super::VersionRecord;

/// One resolved line: this BIOS fingerprint means this version.
///
/// `build_number` is the build whose dump produced the line; once the
/// fingerprint has been rounded it is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub address: String,
    pub date: String,
    pub build_number: String,
    pub resolved_version: String,
}

impl ResultEntry {
    pub fn new(
        address: impl Into<String>,
        date: impl Into<String>,
        build_number: impl Into<String>,
        resolved_version: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            date: date.into(),
            build_number: build_number.into(),
            resolved_version: resolved_version.into(),
        }
    }
}

/// A version record and whether any dump backs one of its build numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEntry {
    pub record: VersionRecord,
    pub has_firmware_evidence: bool,
}

use crate::version_resolution::domain::{CoverageEntry, VersionRecord};
use std::collections::HashSet;

/// CoverageChecker service flagging versions that have no firmware dump yet
pub struct CoverageChecker;

impl CoverageChecker {
    /// Pairs every record with whether its base or effective build number was
    /// observed. Output keeps the order of `records`.
    pub fn check<S: AsRef<str>>(
        records: &[VersionRecord],
        observed_builds: &[S],
    ) -> Vec<CoverageEntry> {
        let observed: HashSet<&str> = observed_builds.iter().map(|b| b.as_ref()).collect();

        records
            .iter()
            .map(|record| CoverageEntry {
                has_firmware_evidence: observed.contains(record.build_number.as_str())
                    || observed.contains(record.interpolated_build_number.as_str()),
                record: record.clone(),
            })
            .collect()
    }

    /// Records without evidence, in input order.
    pub fn gaps(entries: &[CoverageEntry]) -> impl Iterator<Item = &VersionRecord> {
        entries
            .iter()
            .filter(|entry| !entry.has_firmware_evidence)
            .map(|entry| &entry.record)
    }
}

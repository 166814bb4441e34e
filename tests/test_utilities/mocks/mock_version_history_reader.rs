use esxi_bios_map::prelude::*;
use std::path::Path;

/// Mock VersionHistoryReader serving records from memory
pub struct MockVersionHistoryReader {
    records: Vec<VersionRecord>,
}

impl MockVersionHistoryReader {
    pub fn new(records: Vec<VersionRecord>) -> Self {
        Self { records }
    }

    /// Records produced by running KB text through the parser and interpolator.
    pub fn from_kb_text(text: &str) -> Self {
        let mut table = RecordParser::parse_table(text);
        Interpolator::interpolate(&mut table.records);
        Self::new(table.records)
    }
}

impl VersionHistoryReader for MockVersionHistoryReader {
    fn read_version_history(&self, _path: &Path) -> Result<Vec<VersionRecord>> {
        Ok(self.records.clone())
    }
}

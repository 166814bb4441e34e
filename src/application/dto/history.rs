use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::VersionRecord;
use std::path::PathBuf;

/// HistoryRequest - input of the version history use case
#[derive(Debug, Clone, Default)]
pub struct HistoryRequest {
    /// KB table text file; `None` reads standard input
    pub kb_table: Option<PathBuf>,
}

impl HistoryRequest {
    pub fn new(kb_table: Option<PathBuf>) -> Self {
        Self { kb_table }
    }
}

/// HistoryResponse - interpolated records in KB table order
#[derive(Debug, Clone)]
pub struct HistoryResponse {
    pub records: Vec<VersionRecord>,
    /// Lines that looked like data but did not match the table layout
    pub failures: Vec<VersionMapError>,
}

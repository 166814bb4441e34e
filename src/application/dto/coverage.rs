use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::{CoverageEntry, VersionRecord};
use crate::version_resolution::services::CoverageChecker;
use std::path::PathBuf;

/// CoverageRequest - input of the dump coverage use case
#[derive(Debug, Clone)]
pub struct CoverageRequest {
    /// KB table text file; `None` reads standard input
    pub kb_table: Option<PathBuf>,
    pub dmidecode_dir: PathBuf,
}

impl CoverageRequest {
    pub fn new(kb_table: Option<PathBuf>, dmidecode_dir: PathBuf) -> Self {
        Self {
            kb_table,
            dmidecode_dir,
        }
    }
}

/// CoverageResponse - every KB row with its dump evidence, in table order
#[derive(Debug, Clone)]
pub struct CoverageResponse {
    pub entries: Vec<CoverageEntry>,
    pub failures: Vec<VersionMapError>,
}

impl CoverageResponse {
    /// Rows no dump covers yet.
    pub fn gaps(&self) -> impl Iterator<Item = &VersionRecord> {
        CoverageChecker::gaps(&self.entries)
    }

    pub fn has_gaps(&self) -> bool {
        self.gaps().next().is_some()
    }
}

use crate::shared::Result;
use crate::version_resolution::domain::VersionRecord;
use std::path::Path;

/// VersionHistoryReader port for loading a version history snapshot
///
/// The snapshot is the JSON written by `esxi-bios-map history`: an array of
/// interpolated version records in KB table order.
pub trait VersionHistoryReader {
    /// Loads the snapshot at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid snapshot
    fn read_version_history(&self, path: &Path) -> Result<Vec<VersionRecord>>;
}

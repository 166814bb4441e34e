use crate::shared::Result;
use crate::version_resolution::domain::DumpArtifact;
use std::path::{Path, PathBuf};

/// A dump found in the dump directory, not read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpLocation {
    pub build_number: String,
    pub path: PathBuf,
}

/// FirmwareDumpSource port for the directory of `dmidecode` outputs
///
/// Dumps are files named `dmidecode.<build number>.txt`, each holding the
/// output of `dmidecode` on a VM running that ESXi build.
pub trait FirmwareDumpSource {
    /// Lists dumps under `dir`, sorted by path
    ///
    /// # Errors
    /// Returns an error if `dir` is not a readable directory
    fn find_dumps(&self, dir: &Path) -> Result<Vec<DumpLocation>>;

    /// Reads the text of one dump
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    fn read_dump(&self, location: &DumpLocation) -> Result<DumpArtifact>;
}

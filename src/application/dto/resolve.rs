use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::ResultEntry;
use crate::version_resolution::services::ReconcileOptions;
use std::path::PathBuf;

/// ResolveRequest - input of the firmware resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Build-number JSON snapshot written by `history`
    pub build_numbers: PathBuf,
    /// Directory walked for `dmidecode.<build>.txt` dumps
    pub dmidecode_dir: PathBuf,
    pub options: ReconcileOptions,
    /// Abort on a dump without an address or release date instead of skipping it
    pub strict: bool,
}

impl ResolveRequest {
    pub fn new(
        build_numbers: PathBuf,
        dmidecode_dir: PathBuf,
        options: ReconcileOptions,
        strict: bool,
    ) -> Self {
        Self {
            build_numbers,
            dmidecode_dir,
            options,
            strict,
        }
    }
}

/// ResolveResponse - ordered result entries and what was left out
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub entries: Vec<ResultEntry>,
    /// Dumps dropped for a missing fingerprint field
    pub skipped: Vec<VersionMapError>,
    /// Number of dumps that yielded a fingerprint
    pub fingerprinted_dumps: usize,
    /// Fingerprints shared by more than one version label
    pub ambiguous_fingerprints: usize,
}

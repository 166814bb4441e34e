pub mod fingerprint;
pub mod result_entry;
pub mod version_record;

pub use fingerprint::{DumpArtifact, Fingerprint, FingerprintObservation};
pub use result_entry::{CoverageEntry, ResultEntry};
pub use version_record::{is_all_digits, VersionRecord};

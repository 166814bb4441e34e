mod ambiguity_index;
mod build_lookup;
mod coverage_checker;
mod fingerprint_collector;
mod interpolator;
mod reconciler;
mod record_parser;

pub use ambiguity_index::AmbiguityIndex;
pub use build_lookup::{BuildLookup, BuildVersions};
pub use coverage_checker::CoverageChecker;
pub use fingerprint_collector::{CollectedFingerprints, FingerprintCollector, MissingFieldPolicy};
pub use interpolator::Interpolator;
pub use reconciler::{ReconcileOptions, Reconciler};
pub use record_parser::{ParsedTable, RecordParser};

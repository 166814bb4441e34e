use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::{DumpArtifact, Fingerprint, FingerprintObservation};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static ADDRESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Address:\s+(0x[0-9A-F]{5})\s*$").expect("static regex")
});

static RELEASE_DATE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Release\s+Date:\s+([0-9]{2}/[0-9]{2}/[0-9]{4})\s*$").expect("static regex")
});

/// What to do with a dump that lacks its `Address:` or `Release Date:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Drop the artifact and keep it in the skipped list (default)
    #[default]
    Skip,
    /// Abort the whole collection on the first incomplete artifact
    Abort,
}

impl MissingFieldPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MissingFieldPolicy::Abort
        } else {
            MissingFieldPolicy::Skip
        }
    }
}

/// Observations keyed by build number, plus the artifacts that were dropped.
#[derive(Debug, Clone, Default)]
pub struct CollectedFingerprints {
    pub observations: BTreeMap<String, FingerprintObservation>,
    pub skipped: Vec<VersionMapError>,
}

impl CollectedFingerprints {
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// FingerprintCollector service extracting BIOS fingerprints from dmidecode text
pub struct FingerprintCollector;

impl FingerprintCollector {
    /// Extracts the fingerprint of one artifact.
    ///
    /// # Errors
    /// `MissingFingerprintField` naming the first label that was not found
    pub fn extract(
        artifact: &DumpArtifact,
    ) -> std::result::Result<FingerprintObservation, VersionMapError> {
        let missing = |field: &'static str| VersionMapError::MissingFingerprintField {
            artifact: artifact.name.clone(),
            build_number: artifact.build_number.clone(),
            field,
        };

        let address = ADDRESS_LINE
            .captures(&artifact.contents)
            .ok_or_else(|| missing("Address"))?[1]
            .to_string();
        let date = RELEASE_DATE_LINE
            .captures(&artifact.contents)
            .ok_or_else(|| missing("Release Date"))?[1]
            .to_string();

        Ok(FingerprintObservation::new(
            artifact.build_number.clone(),
            Fingerprint::new(address, date),
            artifact.name.clone(),
        ))
    }

    /// Extracts fingerprints from every artifact.
    ///
    /// A later artifact filed under an already seen build number replaces the
    /// earlier one.
    ///
    /// # Errors
    /// Under `MissingFieldPolicy::Abort`, the first `MissingFingerprintField`
    pub fn collect(
        artifacts: &[DumpArtifact],
        policy: MissingFieldPolicy,
    ) -> std::result::Result<CollectedFingerprints, VersionMapError> {
        let mut collected = CollectedFingerprints::default();

        for artifact in artifacts {
            match Self::extract(artifact) {
                Ok(observation) => {
                    if let Some(previous) = collected
                        .observations
                        .insert(observation.build_number.clone(), observation)
                    {
                        tracing::warn!(
                            build = %previous.build_number,
                            replaced = %previous.artifact,
                            by = %artifact.name,
                            "duplicate dump for build number"
                        );
                    }
                }
                Err(error) => match policy {
                    MissingFieldPolicy::Abort => return Err(error),
                    MissingFieldPolicy::Skip => {
                        tracing::debug!(%error, "skipping dump artifact");
                        collected.skipped.push(error);
                    }
                },
            }
        }

        Ok(collected)
    }
}

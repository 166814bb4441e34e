use super::BuildLookup;
use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::FingerprintObservation;
use crate::version_resolution::policies::{LabelChoice, VersionOrdering};
use std::collections::{BTreeMap, BTreeSet};

/// Reverse index: BIOS address -> release date -> every version seen with it
///
/// Each ESXi build has exactly one BIOS, but one BIOS usually spans several
/// builds. A fingerprint that maps to more than one label is ambiguous and has
/// to be rounded by the `Reconciler`.
#[derive(Debug, Clone, Default)]
pub struct AmbiguityIndex {
    entries: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl AmbiguityIndex {
    /// Joins observations to versions through their build number.
    ///
    /// # Errors
    /// `UnknownBuildNumber` for the first observation whose build number is
    /// not in `lookup`; without it there is no version to attribute.
    pub fn build<'a>(
        lookup: &BuildLookup,
        observations: impl IntoIterator<Item = &'a FingerprintObservation>,
        choice: LabelChoice,
    ) -> std::result::Result<Self, VersionMapError> {
        let mut entries: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();

        for observation in observations {
            let versions = lookup.get(&observation.build_number).ok_or_else(|| {
                VersionMapError::UnknownBuildNumber {
                    build_number: observation.build_number.clone(),
                    artifact: observation.artifact.clone(),
                }
            })?;

            entries
                .entry(observation.address().to_string())
                .or_default()
                .entry(observation.date().to_string())
                .or_default()
                .insert(versions.label(choice).to_string());
        }

        Ok(Self { entries })
    }

    /// Labels recorded for `(address, date)`, or `None` if never observed.
    pub fn labels(&self, address: &str, date: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(address)?.get(date)
    }

    /// Labels for `(address, date)` sorted smallest first under `ordering`.
    pub fn sorted_candidates(
        &self,
        address: &str,
        date: &str,
        ordering: VersionOrdering,
    ) -> Option<Vec<String>> {
        let mut candidates: Vec<String> = self.labels(address, date)?.iter().cloned().collect();
        ordering.sort_labels(&mut candidates);
        Some(candidates)
    }

    /// Number of distinct `(address, date)` fingerprints.
    pub fn fingerprint_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Fingerprints that map to more than one version.
    pub fn ambiguous_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(BTreeMap::values)
            .filter(|labels| labels.len() > 1)
            .count()
    }
}

use super::{AmbiguityIndex, BuildLookup};
use crate::shared::error::VersionMapError;
use crate::version_resolution::domain::{FingerprintObservation, ResultEntry};
use crate::version_resolution::policies::{LabelChoice, TieBreakPolicy, VersionOrdering};

/// Knobs for one reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub label_choice: LabelChoice,
    pub tie_break: TieBreakPolicy,
    pub ordering: VersionOrdering,
    /// Emit every build's own label without rounding or deduplication
    pub dump: bool,
}

/// Reconciler service turning observations into an ordered result list
///
/// Observations are walked in version order (build number breaks ties) so
/// that builds of the same era are adjacent. Each fingerprint is rounded to
/// one version with the tie-break policy, and an entry whose
/// `(address, version)` equals the previously emitted one is dropped. A
/// long run of builds sharing one BIOS thus collapses to a single line.
///
/// With more than one candidate the resolved version is a bound chosen by the
/// policy, not proof of what the host runs.
pub struct Reconciler;

impl Reconciler {
    /// # Errors
    /// * `UnknownBuildNumber` if an observation's build is not in `lookup`
    /// * `StructuralError` if `index` has no candidates for an observed
    ///   fingerprint, meaning it was built from different observations
    pub fn reconcile<'a>(
        index: &AmbiguityIndex,
        lookup: &BuildLookup,
        observations: impl IntoIterator<Item = &'a FingerprintObservation>,
        options: ReconcileOptions,
    ) -> std::result::Result<Vec<ResultEntry>, VersionMapError> {
        let mut joined = observations
            .into_iter()
            .map(|observation| {
                lookup
                    .get(&observation.build_number)
                    .map(|versions| (versions.label(options.label_choice).to_string(), observation))
                    .ok_or_else(|| VersionMapError::UnknownBuildNumber {
                        build_number: observation.build_number.clone(),
                        artifact: observation.artifact.clone(),
                    })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        joined.sort_by(|(label_a, obs_a), (label_b, obs_b)| {
            options
                .ordering
                .compare_labels(label_a, label_b)
                .then_with(|| options.ordering.compare_builds(&obs_a.build_number, &obs_b.build_number))
        });

        let mut entries = Vec::new();
        let mut last_emitted: Option<(String, String)> = None;

        for (label, observation) in joined {
            if options.dump {
                entries.push(Self::entry(observation, label));
                continue;
            }

            let resolved = Self::resolve(index, observation, options)?;
            let key = (observation.address().to_string(), resolved.clone());
            if last_emitted.as_ref() == Some(&key) {
                tracing::trace!(build = %observation.build_number, "collapsed into previous entry");
                continue;
            }
            last_emitted = Some(key);
            entries.push(Self::entry(observation, resolved));
        }

        tracing::debug!(entries = entries.len(), dump = options.dump, "reconciled fingerprints");
        Ok(entries)
    }

    fn resolve(
        index: &AmbiguityIndex,
        observation: &FingerprintObservation,
        options: ReconcileOptions,
    ) -> std::result::Result<String, VersionMapError> {
        let candidates = index
            .sorted_candidates(observation.address(), observation.date(), options.ordering)
            .unwrap_or_default();
        options
            .tie_break
            .pick(&candidates)
            .map(str::to_string)
            .ok_or_else(|| VersionMapError::StructuralError {
                message: format!(
                    "no candidate versions for fingerprint {} {} of build {}",
                    observation.address(),
                    observation.date(),
                    observation.build_number
                ),
            })
    }

    fn entry(observation: &FingerprintObservation, version: String) -> ResultEntry {
        ResultEntry::new(
            observation.address(),
            observation.date(),
            observation.build_number.clone(),
            version,
        )
    }
}

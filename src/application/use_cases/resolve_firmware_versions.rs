use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::ports::outbound::{FirmwareDumpSource, ProgressReporter, VersionHistoryReader};
use crate::shared::Result;
use crate::version_resolution::domain::DumpArtifact;
use crate::version_resolution::services::{
    AmbiguityIndex, BuildLookup, FingerprintCollector, MissingFieldPolicy, Reconciler,
};

/// ResolveFirmwareVersionsUseCase - maps BIOS fingerprints to ESXi versions
///
/// Loads the build-number snapshot, fingerprints every dmidecode dump, indexes
/// which versions share each fingerprint and reconciles them into one ordered
/// result list.
///
/// # Type Parameters
/// * `H` - VersionHistoryReader implementation
/// * `D` - FirmwareDumpSource implementation
/// * `P` - ProgressReporter implementation
pub struct ResolveFirmwareVersionsUseCase<H, D, P> {
    history_reader: H,
    dump_source: D,
    progress_reporter: P,
}

impl<H, D, P> ResolveFirmwareVersionsUseCase<H, D, P>
where
    H: VersionHistoryReader,
    D: FirmwareDumpSource,
    P: ProgressReporter,
{
    /// Creates a new ResolveFirmwareVersionsUseCase with injected dependencies
    pub fn new(history_reader: H, dump_source: D, progress_reporter: P) -> Self {
        Self {
            history_reader,
            dump_source,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// * I/O failures reading the snapshot or the dumps
    /// * `MissingFingerprintField` when `request.strict` is set
    /// * `UnknownBuildNumber` when a dump is filed under a build the
    ///   snapshot does not know
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: build number -> version labels
        self.progress_reporter.report(&format!(
            "📖 Loading build numbers from: {}",
            request.build_numbers.display()
        ));
        let records = self
            .history_reader
            .read_version_history(&request.build_numbers)?;
        let lookup = BuildLookup::from_records(&records);
        self.progress_reporter.report(&format!(
            "✅ Loaded {} version record(s), {} build number(s)",
            records.len(),
            lookup.len()
        ));

        // Step 2: read and fingerprint the dumps
        let artifacts = self.read_dumps(&request)?;
        let collected = FingerprintCollector::collect(
            &artifacts,
            MissingFieldPolicy::from_strict(request.strict),
        )?;
        for skipped in &collected.skipped {
            self.progress_reporter
                .report_error(&format!("⚠️  Skipping dump: {}", skipped));
        }

        // Step 3: fingerprint -> candidate versions
        let index = AmbiguityIndex::build(
            &lookup,
            collected.observations.values(),
            request.options.label_choice,
        )?;
        tracing::debug!(
            fingerprints = index.fingerprint_count(),
            ambiguous = index.ambiguous_count(),
            "built ambiguity index"
        );

        // Step 4: one version per fingerprint
        let entries = Reconciler::reconcile(
            &index,
            &lookup,
            collected.observations.values(),
            request.options,
        )?;

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} fingerprint line(s) from {} dump(s)",
            entries.len(),
            collected.len()
        ));

        Ok(ResolveResponse {
            entries,
            fingerprinted_dumps: collected.len(),
            ambiguous_fingerprints: index.ambiguous_count(),
            skipped: collected.skipped,
        })
    }

    fn read_dumps(&self, request: &ResolveRequest) -> Result<Vec<DumpArtifact>> {
        self.progress_reporter.report(&format!(
            "🔍 Searching dmidecode dumps in: {}",
            request.dmidecode_dir.display()
        ));
        let locations = self.dump_source.find_dumps(&request.dmidecode_dir)?;
        let total = locations.len();

        let mut artifacts = Vec::with_capacity(total);
        for (i, location) in locations.iter().enumerate() {
            artifacts.push(self.dump_source.read_dump(location)?);
            self.progress_reporter
                .report_progress(i + 1, total, Some(&location.build_number));
        }
        self.progress_reporter
            .report(&format!("✅ Read {} dmidecode dump(s)", total));
        Ok(artifacts)
    }
}

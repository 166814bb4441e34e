use super::build_version_history::parse_and_interpolate;
use crate::application::dto::{CoverageRequest, CoverageResponse};
use crate::ports::outbound::{FirmwareDumpSource, KbTableReader, ProgressReporter};
use crate::shared::Result;
use crate::version_resolution::services::CoverageChecker;

/// CheckCoverageUseCase - lists KB rows that still lack a dmidecode dump
///
/// Only dump file names are needed here; the dumps themselves are not read.
///
/// # Type Parameters
/// * `R` - KbTableReader implementation
/// * `D` - FirmwareDumpSource implementation
/// * `P` - ProgressReporter implementation
pub struct CheckCoverageUseCase<R, D, P> {
    kb_table_reader: R,
    dump_source: D,
    progress_reporter: P,
}

impl<R, D, P> CheckCoverageUseCase<R, D, P>
where
    R: KbTableReader,
    D: FirmwareDumpSource,
    P: ProgressReporter,
{
    pub fn new(kb_table_reader: R, dump_source: D, progress_reporter: P) -> Self {
        Self {
            kb_table_reader,
            dump_source,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: CoverageRequest) -> Result<CoverageResponse> {
        let text = self
            .kb_table_reader
            .read_kb_table(request.kb_table.as_deref())?;
        let (records, failures) = parse_and_interpolate(&text, &self.progress_reporter);

        self.progress_reporter.report(&format!(
            "🔍 Searching dmidecode dumps in: {}",
            request.dmidecode_dir.display()
        ));
        let observed: Vec<String> = self
            .dump_source
            .find_dumps(&request.dmidecode_dir)?
            .into_iter()
            .map(|location| location.build_number)
            .collect();

        let entries = CoverageChecker::check(&records, &observed);
        let response = CoverageResponse { entries, failures };

        self.progress_reporter.report_completion(&format!(
            "📊 {} of {} version(s) have a dmidecode dump",
            response.entries.len() - response.gaps().count(),
            response.entries.len()
        ));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::DumpLocation;
    use crate::version_resolution::domain::DumpArtifact;
    use std::path::{Path, PathBuf};

    struct MockKbTableReader(&'static str);

    impl KbTableReader for MockKbTableReader {
        fn read_kb_table(&self, _path: Option<&Path>) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct MockDumpSource(Vec<&'static str>);

    impl FirmwareDumpSource for MockDumpSource {
        fn find_dumps(&self, dir: &Path) -> Result<Vec<DumpLocation>> {
            Ok(self
                .0
                .iter()
                .map(|build| DumpLocation {
                    build_number: build.to_string(),
                    path: dir.join(format!("dmidecode.{}.txt", build)),
                })
                .collect())
        }

        fn read_dump(&self, _location: &DumpLocation) -> Result<DumpArtifact> {
            anyhow::bail!("coverage never reads dump contents")
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    const KB_TABLE: &str = "\
ESXi 6.0 Update 2\tESXi 6.0 Update 2\t3/15/2016\t3620759\t3568722
ESXi 6.0 Update 1\tESXi 6.0 Update 1\t9/10/2015\t3029758\tNA
ESXi 6.0 GA\tESXi 6.0 GA\t3/12/2015\t2494585\tNA
";

    #[test]
    fn test_coverage_by_either_build_number() {
        let use_case = CheckCoverageUseCase::new(
            MockKbTableReader(KB_TABLE),
            MockDumpSource(vec!["3568722", "2494585"]),
            SilentReporter,
        );
        let response = use_case
            .execute(CoverageRequest::new(None, PathBuf::from("dmidecode")))
            .unwrap();

        let flags: Vec<bool> = response
            .entries
            .iter()
            .map(|e| e.has_firmware_evidence)
            .collect();
        assert_eq!(flags, vec![true, false, true]);
        assert!(response.has_gaps());
        let gaps: Vec<&str> = response.gaps().map(|r| r.build_number.as_str()).collect();
        assert_eq!(gaps, vec!["3029758"]);
    }

    #[test]
    fn test_source_lines_are_kept_for_the_report() {
        let use_case =
            CheckCoverageUseCase::new(MockKbTableReader(KB_TABLE), MockDumpSource(vec![]), SilentReporter);
        let response = use_case
            .execute(CoverageRequest::new(None, PathBuf::from("dmidecode")))
            .unwrap();
        assert_eq!(
            response.entries[2].record.source_line.as_deref(),
            Some("ESXi 6.0 GA\tESXi 6.0 GA\t3/12/2015\t2494585\tNA")
        );
    }
}

use crate::application::dto::{HistoryRequest, HistoryResponse};
use crate::ports::outbound::{KbTableReader, ProgressReporter};
use crate::shared::error::VersionMapError;
use crate::shared::Result;
use crate::version_resolution::domain::VersionRecord;
use crate::version_resolution::services::{Interpolator, RecordParser};

/// BuildVersionHistoryUseCase - turns the raw KB table into version records
///
/// Reads the table, parses every line, reports the lines that could not be
/// matched and interpolates update labels and effective build numbers.
///
/// # Type Parameters
/// * `R` - KbTableReader implementation
/// * `P` - ProgressReporter implementation
pub struct BuildVersionHistoryUseCase<R, P> {
    kb_table_reader: R,
    progress_reporter: P,
}

impl<R, P> BuildVersionHistoryUseCase<R, P>
where
    R: KbTableReader,
    P: ProgressReporter,
{
    /// Creates a new BuildVersionHistoryUseCase with injected dependencies
    pub fn new(kb_table_reader: R, progress_reporter: P) -> Self {
        Self {
            kb_table_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the KB table cannot be read. Unmatched lines are
    /// not errors; they come back in `HistoryResponse::failures`.
    pub fn execute(&self, request: HistoryRequest) -> Result<HistoryResponse> {
        match &request.kb_table {
            Some(path) => self
                .progress_reporter
                .report(&format!("📖 Reading KB table from: {}", path.display())),
            None => self
                .progress_reporter
                .report("📖 Reading KB table from standard input"),
        }

        let text = self
            .kb_table_reader
            .read_kb_table(request.kb_table.as_deref())?;
        let (records, failures) = parse_and_interpolate(&text, &self.progress_reporter);

        self.progress_reporter.report_completion(&format!(
            "✅ Parsed {} version record(s), {} unmatched line(s)",
            records.len(),
            failures.len()
        ));

        Ok(HistoryResponse { records, failures })
    }
}

/// Parses KB text and interpolates the records, reporting each unmatched line.
pub(crate) fn parse_and_interpolate<P: ProgressReporter>(
    text: &str,
    progress_reporter: &P,
) -> (Vec<VersionRecord>, Vec<VersionMapError>) {
    let mut table = RecordParser::parse_table(text);
    for failure in &table.failures {
        progress_reporter.report_error(&format!("⚠️  {}", failure));
    }
    Interpolator::interpolate(&mut table.records);
    (table.records, table.failures)
}

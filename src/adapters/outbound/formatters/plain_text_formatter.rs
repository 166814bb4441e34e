use crate::ports::outbound::ResolutionFormatter;
use crate::shared::Result;
use crate::version_resolution::domain::ResultEntry;

/// PlainTextFormatter adapter rendering one line per resolved fingerprint
///
/// Each line reads `<address> <date> <build_number> <resolved_version>`.
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionFormatter for PlainTextFormatter {
    fn format(&self, entries: &[ResultEntry]) -> Result<String> {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&format!(
                "{} {} {} {}\n",
                entry.address, entry.date, entry.build_number, entry.resolved_version
            ));
        }
        Ok(output)
    }
}

/// Formatter adapters for version history, resolution and coverage output
mod coverage_report_formatter;
mod facter_template_formatter;
mod plain_text_formatter;
mod version_history_json_formatter;

pub use coverage_report_formatter::CoverageReportFormatter;
pub use facter_template_formatter::FacterTemplateFormatter;
pub use plain_text_formatter::PlainTextFormatter;
pub use version_history_json_formatter::VersionHistoryJsonFormatter;

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod firmware_dump_source;
pub mod formatter;
pub mod kb_table_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod template_reader;
pub mod version_history_reader;

pub use firmware_dump_source::{DumpLocation, FirmwareDumpSource};
pub use formatter::ResolutionFormatter;
pub use kb_table_reader::KbTableReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use template_reader::TemplateReader;
pub use version_history_reader::VersionHistoryReader;

/// Mock implementations for testing
mod mock_firmware_dump_source;
mod mock_kb_table_reader;
mod mock_progress_reporter;
mod mock_version_history_reader;

pub use mock_firmware_dump_source::MockFirmwareDumpSource;
pub use mock_kb_table_reader::MockKbTableReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_version_history_reader::MockVersionHistoryReader;

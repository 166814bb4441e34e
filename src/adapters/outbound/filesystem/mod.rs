/// Filesystem adapters for file I/O operations
mod dump_directory;
mod file_reader;
mod file_writer;

pub use dump_directory::DmidecodeDirectory;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};

use crate::shared::Result;
use std::path::Path;

/// KbTableReader port for reading the raw VMware build-number KB table
///
/// The table is the text copied out of the KB article: one release per
/// line, columns separated by tabs.
pub trait KbTableReader {
    /// Reads the KB table text
    ///
    /// # Arguments
    /// * `path` - File to read, or `None` to read from standard input
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a symlink or is too large
    /// - The input cannot be read or is not valid UTF-8
    fn read_kb_table(&self, path: Option<&Path>) -> Result<String>;
}

use crate::ports::outbound::{KbTableReader, TemplateReader, VersionHistoryReader};
use crate::shared::error::VersionMapError;
use crate::shared::security::InputFile;
use crate::shared::Result;
use crate::version_resolution::domain::VersionRecord;
use anyhow::Context;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading input files from the file system
///
/// Implements the KB table, version history and template reader ports.
/// Explicitly named files must be regular files, not symlinks, and within
/// the size limit of their `InputFile` kind.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the regular-file, symlink and size checks.
    fn safe_read_file(&self, path: &Path, kind: InputFile) -> Result<String> {
        kind.check(path)?;

        fs::read_to_string(path).map_err(|e| {
            VersionMapError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read {}: {}", kind.description(), e),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl KbTableReader for FileSystemReader {
    fn read_kb_table(&self, path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => self.safe_read_file(path, InputFile::KbTable),
            None => {
                let mut content = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut content)
                    .context("Failed to read KB table from standard input")?;
                Ok(content)
            }
        }
    }
}

impl VersionHistoryReader for FileSystemReader {
    fn read_version_history(&self, path: &Path) -> Result<Vec<VersionRecord>> {
        let content = self.safe_read_file(path, InputFile::BuildNumbers)?;
        let records: Vec<VersionRecord> = serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse build-number JSON: {}\n\n💡 Hint: Generate it with `esxi-bios-map history < kb.txt`",
                path.display()
            )
        })?;
        Ok(records)
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path, InputFile::Template)
    }
}

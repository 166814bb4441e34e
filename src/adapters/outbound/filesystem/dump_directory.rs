use crate::ports::outbound::{DumpLocation, FirmwareDumpSource};
use crate::shared::error::VersionMapError;
use crate::shared::security::InputFile;
use crate::shared::Result;
use crate::version_resolution::domain::DumpArtifact;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static DUMP_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^dmidecode\.([0-9]+)\.txt$").expect("static regex"));

/// Maximum directory depth walked below the dump directory
const MAX_WALK_DEPTH: usize = 32;

/// DmidecodeDirectory adapter walking a directory tree of `dmidecode` dumps
///
/// Sub-directories are walked recursively; symbolic links are not followed.
/// Files whose names do not look like `dmidecode.<build>.txt` are ignored.
pub struct DmidecodeDirectory;

impl DmidecodeDirectory {
    pub fn new() -> Self {
        Self
    }

    fn walk(&self, dir: &Path, depth: usize, found: &mut Vec<DumpLocation>) -> Result<()> {
        if depth > MAX_WALK_DEPTH {
            tracing::warn!(dir = %dir.display(), "maximum directory depth reached, not descending");
            return Ok(());
        }

        let entries = fs::read_dir(dir).map_err(|e| VersionMapError::FileReadError {
            path: dir.to_path_buf(),
            details: format!("Failed to list directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| VersionMapError::FileReadError {
                path: dir.to_path_buf(),
                details: e.to_string(),
            })?;
            let file_type = entry.file_type().map_err(|e| VersionMapError::FileReadError {
                path: entry.path(),
                details: e.to_string(),
            })?;
            let path = entry.path();

            if file_type.is_symlink() {
                tracing::debug!(path = %path.display(), "skipping symbolic link");
            } else if file_type.is_dir() {
                self.walk(&path, depth + 1, found)?;
            } else if let Some(build_number) = Self::build_number_of(&path) {
                found.push(DumpLocation { build_number, path });
            }
        }
        Ok(())
    }

    /// `dmidecode.3620759.txt` -> `3620759`
    fn build_number_of(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        DUMP_FILE_NAME
            .captures(name)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for DmidecodeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FirmwareDumpSource for DmidecodeDirectory {
    fn find_dumps(&self, dir: &Path) -> Result<Vec<DumpLocation>> {
        if !dir.is_dir() {
            return Err(VersionMapError::InvalidPath {
                path: dir.to_path_buf(),
                reason: "Not a directory".to_string(),
                hint: "Point --dmidecode-dir at the directory holding dmidecode.<build>.txt files"
                    .to_string(),
            }
            .into());
        }

        let mut found = Vec::new();
        self.walk(dir, 0, &mut found)?;
        found.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!(dir = %dir.display(), dumps = found.len(), "found dmidecode dumps");
        Ok(found)
    }

    fn read_dump(&self, location: &DumpLocation) -> Result<DumpArtifact> {
        let path: &PathBuf = &location.path;
        InputFile::DmidecodeDump.check(path)?;
        let contents = fs::read_to_string(path).map_err(|e| VersionMapError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(DumpArtifact::new(
            path.display().to_string(),
            location.build_number.clone(),
            contents,
        ))
    }
}

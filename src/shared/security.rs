use crate::shared::error::VersionMapError;
use std::fs;
use std::path::Path;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// The files this tool reads by name, each with its own size ceiling.
///
/// The ceilings sit well above anything VMware or `dmidecode` produce, so
/// only a wrong path (a disk image, a log archive) runs into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    /// Text copied from the VMware build-number KB article
    KbTable,
    /// JSON snapshot written by `history`
    BuildNumbers,
    /// Facter template holding the `[PLACEHOLDER]` line
    Template,
    /// Output of `dmidecode -t bios` for one build
    DmidecodeDump,
}

impl InputFile {
    pub fn description(self) -> &'static str {
        match self {
            InputFile::KbTable => "KB table",
            InputFile::BuildNumbers => "build-number JSON",
            InputFile::Template => "template",
            InputFile::DmidecodeDump => "dmidecode dump",
        }
    }

    pub fn max_size(self) -> u64 {
        match self {
            InputFile::KbTable => 8 * MIB,
            InputFile::BuildNumbers => 32 * MIB,
            InputFile::Template => MIB,
            InputFile::DmidecodeDump => 4 * MIB,
        }
    }

    fn hint(self) -> &'static str {
        match self {
            InputFile::KbTable => "Pass the tab-separated text copied from the KB article",
            InputFile::BuildNumbers => {
                "Pass the JSON written by `esxi-bios-map history`, not a copy behind a symlink"
            }
            InputFile::Template => "Pass the Facter template that contains the [PLACEHOLDER] line",
            InputFile::DmidecodeDump => {
                "Each dmidecode.<build>.txt should hold the text output of `dmidecode -t bios`"
            }
        }
    }

    fn invalid(self, path: &Path, reason: String) -> VersionMapError {
        VersionMapError::InvalidPath {
            path: path.to_path_buf(),
            reason,
            hint: self.hint().to_string(),
        }
    }

    /// Checks `path` before it is read and returns its size.
    ///
    /// The path must name an existing regular file, not a symbolic link, no
    /// larger than [`InputFile::max_size`].
    pub fn check(self, path: &Path) -> Result<u64, VersionMapError> {
        let metadata = fs::symlink_metadata(path).map_err(|e| VersionMapError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Cannot open {}: {}", self.description(), e),
        })?;

        if metadata.is_symlink() {
            return Err(self.invalid(
                path,
                format!("{} is a symbolic link; links are not followed", self.description()),
            ));
        }
        if !metadata.is_file() {
            return Err(self.invalid(path, format!("{} is not a regular file", self.description())));
        }
        if metadata.len() > self.max_size() {
            return Err(self.invalid(
                path,
                format!(
                    "{} is too large ({} bytes, limit {} bytes)",
                    self.description(),
                    metadata.len(),
                    self.max_size()
                ),
            ));
        }
        Ok(metadata.len())
    }
}

/// Refuses to replace an output path that is a symbolic link.
///
/// A missing path is fine, it will be created.
pub fn check_output_target(path: &Path) -> Result<(), VersionMapError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(VersionMapError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is a symbolic link; write to the real file instead".to_string(),
        }),
        _ => Ok(()),
    }
}

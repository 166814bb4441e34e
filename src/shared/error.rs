use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// `coverage --fail-on-gaps` found versions without a firmware dump
    CoverageGaps = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad input files, unknown build numbers, I/O errors, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CoverageGaps => write!(f, "Coverage Gaps (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building the version history and resolving fingerprints.
///
/// `ParseFailure` and `MissingFingerprintField` are local to one line or one
/// dump artifact and are normally reported and skipped. `UnknownBuildNumber`
/// means the dump directory and the version history are out of sync and aborts
/// the resolution. `StructuralError` is an engine defect and is always fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionMapError {
    #[error("Could not match line {line_number}: \"{line}\"")]
    ParseFailure { line_number: usize, line: String },

    #[error("Dump artifact {artifact} (build {build_number}) has no '{field}' line\n\n💡 Hint: The file should contain the output of `dmidecode -t bios`")]
    MissingFingerprintField {
        artifact: String,
        build_number: String,
        field: &'static str,
    },

    #[error("Build number {build_number} from {artifact} is not in the version history\n\n💡 Hint: Regenerate the build-number JSON from an up-to-date KB table with `esxi-bios-map history`")]
    UnknownBuildNumber {
        build_number: String,
        artifact: String,
    },

    #[error("Internal error: {message}")]
    StructuralError { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid path: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidPath {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

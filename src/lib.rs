//! esxi-bios-map - map VMware ESXi versions to BIOS fingerprints
//!
//! A VMware guest cannot ask its hypervisor for the ESXi version, but the
//! virtual BIOS it boots from changes with ESXi releases. This library parses
//! the VMware build-number KB table, collects the BIOS `Address` and
//! `Release Date` of `dmidecode` dumps taken under known builds, and resolves
//! each fingerprint to a version, rounding low or high when one fingerprint
//! is shared by several releases.
//!
//! # Architecture
//!
//! - **Domain Layer** (`version_resolution`): records, fingerprints, policies
//!   and the parsing, interpolation and reconciliation services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console and formatter implementations
//! - **Shared** (`shared`): Error types, result alias and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use esxi_bios_map::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ResolveFirmwareVersionsUseCase::new(
//!     FileSystemReader::new(),
//!     DmidecodeDirectory::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ResolveRequest::new(
//!     PathBuf::from("build_numbers/esxi_build_numbers.json"),
//!     PathBuf::from("dmidecode"),
//!     ReconcileOptions::default(),
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = PlainTextFormatter::new().format(&response.entries)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod version_resolution;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DmidecodeDirectory, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CoverageReportFormatter, FacterTemplateFormatter, PlainTextFormatter,
        VersionHistoryJsonFormatter,
    };
    pub use crate::application::dto::{
        CoverageRequest, CoverageResponse, HistoryRequest, HistoryResponse, OutputMode,
        ResolveRequest, ResolveResponse,
    };
    pub use crate::application::use_cases::{
        BuildVersionHistoryUseCase, CheckCoverageUseCase, ResolveFirmwareVersionsUseCase,
    };
    pub use crate::ports::outbound::{
        DumpLocation, FirmwareDumpSource, KbTableReader, OutputPresenter, ProgressReporter,
        ResolutionFormatter, TemplateReader, VersionHistoryReader,
    };
    pub use crate::shared::error::VersionMapError;
    pub use crate::shared::Result;
    pub use crate::version_resolution::domain::{
        CoverageEntry, DumpArtifact, Fingerprint, FingerprintObservation, ResultEntry,
        VersionRecord,
    };
    pub use crate::version_resolution::policies::{LabelChoice, TieBreakPolicy, VersionOrdering};
    pub use crate::version_resolution::services::{
        AmbiguityIndex, BuildLookup, CoverageChecker, FingerprintCollector, Interpolator,
        MissingFieldPolicy, ReconcileOptions, Reconciler, RecordParser,
    };
}

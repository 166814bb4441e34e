/// Use cases module containing application business logic orchestration
mod build_version_history;
mod check_coverage;
mod resolve_firmware_versions;

pub use build_version_history::BuildVersionHistoryUseCase;
pub use check_coverage::CheckCoverageUseCase;
pub use resolve_firmware_versions::ResolveFirmwareVersionsUseCase;

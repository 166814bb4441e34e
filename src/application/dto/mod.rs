/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and their results
/// back out to the formatters, keeping the domain layer isolated.
mod coverage;
mod history;
mod output_format;
mod resolve;

pub use coverage::{CoverageRequest, CoverageResponse};
pub use history::{HistoryRequest, HistoryResponse};
pub use output_format::OutputMode;
pub use resolve::{ResolveRequest, ResolveResponse};

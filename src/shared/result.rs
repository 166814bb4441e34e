/// Crate-wide Result alias; typed failures are `VersionMapError`, carried as
/// `anyhow::Error` so callers can attach context while propagating.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

use crate::shared::Result;
use crate::version_resolution::domain::ResultEntry;

/// ResolutionFormatter port for rendering resolved fingerprints
///
/// Implemented by the plain line formatter and the Facter template
/// formatter.
pub trait ResolutionFormatter {
    /// Formats the ordered result entries
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, entries: &[ResultEntry]) -> Result<String>;
}

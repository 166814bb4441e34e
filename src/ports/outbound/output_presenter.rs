use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Output is either a JSON snapshot, resolution lines, a rendered Facter
/// fact, or a coverage report; the presenter only decides where it goes.
pub trait OutputPresenter {
    /// Presents the formatted content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The output path is a symlink or its directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}

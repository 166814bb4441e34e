use crate::shared::Result;
use std::path::Path;

/// TemplateReader port for loading a report template
pub trait TemplateReader {
    /// Reads the template text at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    fn read_template(&self, path: &Path) -> Result<String>;
}

use crate::adapters::outbound::formatters::{FacterTemplateFormatter, PlainTextFormatter};
use crate::application::dto::OutputMode;
use crate::ports::outbound::{ResolutionFormatter, TemplateReader};
use crate::shared::Result;

/// Factory for creating resolution formatters
///
/// Template mode reads the template up front so that a missing or unreadable
/// template fails before any dump is processed.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the given output mode
    ///
    /// # Errors
    /// Returns an error if the template of `OutputMode::Template` cannot be read
    pub fn create<T: TemplateReader>(
        mode: &OutputMode,
        template_reader: &T,
    ) -> Result<Box<dyn ResolutionFormatter>> {
        match mode {
            OutputMode::Plain => Ok(Box::new(PlainTextFormatter::new())),
            OutputMode::Template(path) => {
                let template = template_reader.read_template(path)?;
                Ok(Box::new(FacterTemplateFormatter::new(
                    path.display().to_string(),
                    template,
                )))
            }
        }
    }

    /// Returns the progress message for the given output mode
    pub fn progress_message(mode: &OutputMode) -> &'static str {
        match mode {
            OutputMode::Plain => "📝 Generating plain fingerprint list...",
            OutputMode::Template(_) => "📝 Generating Facter fact from template...",
        }
    }
}

use std::path::PathBuf;

/// How `resolve` renders its result entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `<address> <date> <build> <version>` line per entry (default)
    #[default]
    Plain,
    /// Expand the `[PLACEHOLDER]` line of a Facter fact template
    Template(PathBuf),
}

impl OutputMode {
    pub fn from_template(template: Option<PathBuf>) -> Self {
        match template {
            Some(path) => OutputMode::Template(path),
            None => OutputMode::Plain,
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Plain => write!(f, "plain"),
            OutputMode::Template(path) => write!(f, "template ({})", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_template() {
        assert_eq!(OutputMode::from_template(None), OutputMode::Plain);
        assert_eq!(
            OutputMode::from_template(Some(PathBuf::from("t.rb"))),
            OutputMode::Template(PathBuf::from("t.rb"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputMode::Plain.to_string(), "plain");
        assert_eq!(
            OutputMode::Template(PathBuf::from("t.rb")).to_string(),
            "template (t.rb)"
        );
    }
}

use esxi_bios_map::prelude::*;
use std::path::Path;

/// Mock KbTableReader returning fixed KB text
pub struct MockKbTableReader {
    content: String,
    should_fail: bool,
}

impl MockKbTableReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl KbTableReader for MockKbTableReader {
    fn read_kb_table(&self, path: Option<&Path>) -> Result<String> {
        if self.should_fail {
            anyhow::bail!(
                "Mock KB read failure: {}",
                path.map_or("<stdin>".to_string(), |p| p.display().to_string())
            );
        }
        Ok(self.content.clone())
    }
}

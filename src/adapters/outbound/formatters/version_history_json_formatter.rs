use crate::shared::Result;
use crate::version_resolution::domain::VersionRecord;
use anyhow::Context;

/// VersionHistoryJsonFormatter adapter writing the build-number snapshot
///
/// The snapshot is a pretty-printed JSON array of records in KB table order
/// and is what `resolve` reads back as its build-number input.
pub struct VersionHistoryJsonFormatter;

impl VersionHistoryJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, records: &[VersionRecord]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(records)
            .context("Failed to serialize version history to JSON")?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for VersionHistoryJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_has_nine_attributes() {
        let record = VersionRecord {
            osname: "ESXi".to_string(),
            major_version: "6.0".to_string(),
            build_number: "2494585".to_string(),
            installer_build_number: "NA".to_string(),
            interpolated_build_number: "2494585".to_string(),
            source_line: Some("raw line".to_string()),
            ..Default::default()
        };
        let json = VersionHistoryJsonFormatter::new().format(&[record]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value[0].as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert_eq!(object["interpolated_build_number"], "2494585");
        assert!(!json.contains("raw line"));
    }

    #[test]
    fn test_empty_snapshot() {
        let json = VersionHistoryJsonFormatter::new().format(&[]).unwrap();
        assert_eq!(json, "[]\n");
    }
}

use serde::{Deserialize, Serialize};

/// One row of the VMware build-number KB table.
///
/// The first seven fields come straight from the parser. The two
/// `interpolated_*` fields are empty until the `Interpolator` has run over the
/// whole table; after that the record is not modified again.
///
/// Field names double as the keys of the JSON snapshot, so renaming one is a
/// format change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionRecord {
    pub osname: String,
    pub full_version: String,
    pub major_version: String,
    pub true_minor_version: String,
    pub release_date: String,
    pub build_number: String,
    pub installer_build_number: String,
    #[serde(default)]
    pub interpolated_update_version: String,
    #[serde(default)]
    pub interpolated_build_number: String,
    /// Raw KB line the record was parsed from; absent when loaded from JSON.
    #[serde(skip)]
    pub source_line: Option<String>,
}

impl VersionRecord {
    /// Major version with the interpolated update appended, e.g. `6.0u2`.
    pub fn minor_label(&self) -> String {
        format!("{}{}", self.major_version, self.interpolated_update_version)
    }

    /// Build numbers of this record that are purely numeric, base build first.
    pub fn numeric_build_numbers(&self) -> impl Iterator<Item = &str> {
        [
            self.build_number.as_str(),
            self.installer_build_number.as_str(),
        ]
        .into_iter()
        .filter(|b| is_all_digits(b))
    }
}

/// True for a non-empty string made only of ASCII digits.
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

use crate::version_resolution::domain::{is_all_digits, VersionRecord};
use regex::Regex;
use std::sync::LazyLock;

static UPDATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:U|Update )([0-9]+)").expect("static regex"));

/// State carried from one record to the next during a single pass.
///
/// `current_major` starts as `None`, so the first record always counts as a
/// new major line.
#[derive(Debug, Default)]
struct InterpolationState {
    current_major: Option<String>,
    current_update_label: String,
}

impl InterpolationState {
    /// Advances the state past `record` and returns the update label it gets.
    fn step(&mut self, record: &VersionRecord) -> String {
        if self.current_major.as_deref() != Some(record.major_version.as_str()) {
            self.current_major = Some(record.major_version.clone());
            self.current_update_label.clear();
        } else if let Some(caps) = UPDATE_MARKER.captures(&record.true_minor_version) {
            self.current_update_label = format!("u{}", &caps[1]);
        }
        self.current_update_label.clone()
    }
}

/// Interpolator service filling in the derived fields of every record
///
/// Patch releases between two named updates still belong to the most recent
/// update, so "6.0 EP 3" after "6.0 Update 1" is labelled `u1`. The label is
/// reset whenever the major version changes.
pub struct Interpolator;

impl Interpolator {
    /// Enriches records given in table order (newest first).
    ///
    /// The walk runs oldest to newest, i.e. from the end of the slice to the
    /// start; the slice itself keeps its table order.
    pub fn interpolate(records: &mut [VersionRecord]) {
        let mut state = InterpolationState::default();
        for record in records.iter_mut().rev() {
            record.interpolated_update_version = state.step(record);
            record.interpolated_build_number = Self::effective_build_number(record).to_string();
        }
    }

    /// Installer build number when it is numeric, the base build number otherwise.
    pub fn effective_build_number(record: &VersionRecord) -> &str {
        if is_all_digits(&record.installer_build_number) {
            &record.installer_build_number
        } else {
            &record.build_number
        }
    }
}

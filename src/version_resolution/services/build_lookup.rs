use crate::version_resolution::domain::VersionRecord;
use crate::version_resolution::policies::LabelChoice;
use std::collections::HashMap;

/// Version labels a single build number resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVersions {
    pub major: String,
    pub minor: String,
}

impl BuildVersions {
    pub fn label(&self, choice: LabelChoice) -> &str {
        match choice {
            LabelChoice::Major => &self.major,
            LabelChoice::Minor => &self.minor,
        }
    }
}

/// Build number -> version labels, built from an interpolated version history
///
/// Both the base and the installer build number of a record are indexed when
/// numeric. Records are applied in history order, so for a build number that
/// appears on several rows the last row wins.
#[derive(Debug, Clone, Default)]
pub struct BuildLookup {
    builds: HashMap<String, BuildVersions>,
}

impl BuildLookup {
    pub fn from_records(records: &[VersionRecord]) -> Self {
        let mut builds = HashMap::new();
        for record in records {
            for build in record.numeric_build_numbers() {
                builds.insert(
                    build.to_string(),
                    BuildVersions {
                        major: record.major_version.clone(),
                        minor: record.minor_label(),
                    },
                );
            }
        }
        tracing::debug!(builds = builds.len(), "indexed build numbers");
        Self { builds }
    }

    pub fn get(&self, build_number: &str) -> Option<&BuildVersions> {
        self.builds.get(build_number)
    }

    pub fn contains(&self, build_number: &str) -> bool {
        self.builds.contains_key(build_number)
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }
}

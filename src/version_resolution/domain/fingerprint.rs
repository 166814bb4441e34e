/// Raw text of one firmware dump, filed under the build number that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpArtifact {
    /// Where the dump came from (file path or any other label), for messages only.
    pub name: String,
    pub build_number: String,
    pub contents: String,
}

impl DumpArtifact {
    pub fn new(name: String, build_number: String, contents: String) -> Self {
        Self {
            name,
            build_number,
            contents,
        }
    }
}

/// BIOS fingerprint observed for one build: the entry-point address and the
/// release date exactly as `dmidecode` prints them (`MM/DD/YYYY`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    pub address: String,
    pub date: String,
}

impl Fingerprint {
    pub fn new(address: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            date: date.into(),
        }
    }
}

/// A fingerprint joined with the build number it was filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintObservation {
    pub build_number: String,
    pub fingerprint: Fingerprint,
    pub artifact: String,
}

impl FingerprintObservation {
    pub fn new(build_number: impl Into<String>, fingerprint: Fingerprint, artifact: impl Into<String>) -> Self {
        Self {
            build_number: build_number.into(),
            fingerprint,
            artifact: artifact.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.fingerprint.address
    }

    pub fn date(&self) -> &str {
        &self.fingerprint.date
    }
}

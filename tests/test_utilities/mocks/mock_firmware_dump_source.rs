use esxi_bios_map::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Mock FirmwareDumpSource holding dmidecode text per build number
#[derive(Default)]
pub struct MockFirmwareDumpSource {
    dumps: BTreeMap<String, String>,
}

impl MockFirmwareDumpSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dump with a regular BIOS Information section.
    pub fn with_bios(mut self, build_number: &str, address: &str, date: &str) -> Self {
        self.dumps.insert(
            build_number.to_string(),
            format!(
                "# dmidecode 2.12\nHandle 0x0000, DMI type 0, 24 bytes\nBIOS Information\n\tVendor: Phoenix Technologies LTD\n\tVersion: 6.00\n\tRelease Date: {}\n\tAddress: {}\n\tRuntime Size: 90656 bytes\n",
                date, address
            ),
        );
        self
    }

    /// Adds a dump with arbitrary contents.
    pub fn with_raw(mut self, build_number: &str, contents: &str) -> Self {
        self.dumps
            .insert(build_number.to_string(), contents.to_string());
        self
    }
}

impl FirmwareDumpSource for MockFirmwareDumpSource {
    fn find_dumps(&self, dir: &Path) -> Result<Vec<DumpLocation>> {
        Ok(self
            .dumps
            .keys()
            .map(|build| DumpLocation {
                build_number: build.clone(),
                path: dir.join(format!("dmidecode.{}.txt", build)),
            })
            .collect())
    }

    fn read_dump(&self, location: &DumpLocation) -> Result<DumpArtifact> {
        let contents = self
            .dumps
            .get(&location.build_number)
            .ok_or_else(|| anyhow::anyhow!("no mock dump for {}", location.build_number))?;
        Ok(DumpArtifact::new(
            location.path.display().to_string(),
            location.build_number.clone(),
            contents.clone(),
        ))
    }
}

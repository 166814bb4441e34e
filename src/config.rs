//! Configuration file support for esxi-bios-map.
//!
//! Provides YAML-based configuration through `esxi-bios-map.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options.

use anyhow::{bail, Context};
use esxi_bios_map::version_resolution::policies::VersionOrdering;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use esxi_bios_map::shared::Result;

pub const CONFIG_FILENAME: &str = "esxi-bios-map.config.yml";

/// Build-number snapshot used when neither CLI nor config names one.
pub const DEFAULT_BUILD_NUMBERS: &str = "build_numbers/esxi_build_numbers.json";

/// Dump directory used when neither CLI nor config names one.
pub const DEFAULT_DMIDECODE_DIR: &str = "dmidecode";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub build_numbers: Option<PathBuf>,
    pub dmidecode_dir: Option<PathBuf>,
    pub minor: Option<bool>,
    pub minor_error_high: Option<bool>,
    pub dump: Option<bool>,
    pub strict: Option<bool>,
    pub template: Option<PathBuf>,
    pub version_ordering: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `version_ordering`; `validate_config` has already vetted it.
    pub fn version_ordering(&self) -> Result<Option<VersionOrdering>> {
        self.version_ordering
            .as_deref()
            .map(|value| value.parse::<VersionOrdering>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ordering) = config.version_ordering {
        if let Err(e) = ordering.parse::<VersionOrdering>() {
            bail!(
                "Invalid config: version_ordering: {}\n\n\
                 💡 Hint: Use 'numeric' (default) or 'lexicographic'.",
                e
            );
        }
    }
    for (key, path) in [
        ("build_numbers", &config.build_numbers),
        ("dmidecode_dir", &config.dmidecode_dir),
        ("template", &config.template),
    ] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default, or give a path.",
                key
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// `resolve` settings after merging CLI options over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSettings {
    pub build_numbers: PathBuf,
    pub dmidecode_dir: PathBuf,
    pub minor: bool,
    pub minor_error_high: bool,
    pub dump: bool,
    pub strict: bool,
    pub template: Option<PathBuf>,
    pub version_ordering: VersionOrdering,
}

/// Command-line values for `resolve`, before merging.
#[derive(Debug, Clone, Default)]
pub struct ResolveOverrides {
    pub build_numbers: Option<PathBuf>,
    pub dmidecode_dir: Option<PathBuf>,
    pub minor: bool,
    pub minor_error_high: bool,
    pub dump: bool,
    pub strict: bool,
    pub template: Option<PathBuf>,
    pub version_ordering: Option<VersionOrdering>,
}

/// Merges CLI values over config values over defaults.
///
/// Flags are switches: set on either side means set. Paths and the ordering
/// given on the command line win over the config file.
pub fn merge_resolve_settings(
    cli: ResolveOverrides,
    config: Option<&ConfigFile>,
) -> Result<ResolveSettings> {
    let flag = |cli_value: bool, pick: fn(&ConfigFile) -> Option<bool>| {
        cli_value || config.and_then(pick).unwrap_or(false)
    };

    let config_ordering = match config {
        Some(config) => config.version_ordering()?,
        None => None,
    };

    Ok(ResolveSettings {
        build_numbers: cli
            .build_numbers
            .or_else(|| config.and_then(|c| c.build_numbers.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_NUMBERS)),
        dmidecode_dir: resolve_dmidecode_dir(cli.dmidecode_dir, config),
        minor: flag(cli.minor, |c| c.minor),
        minor_error_high: flag(cli.minor_error_high, |c| c.minor_error_high),
        dump: flag(cli.dump, |c| c.dump),
        strict: flag(cli.strict, |c| c.strict),
        template: cli
            .template
            .or_else(|| config.and_then(|c| c.template.clone())),
        version_ordering: cli
            .version_ordering
            .or(config_ordering)
            .unwrap_or_default(),
    })
}

/// Dump directory from CLI, then config, then the default.
pub fn resolve_dmidecode_dir(cli: Option<PathBuf>, config: Option<&ConfigFile>) -> PathBuf {
    cli.or_else(|| config.and_then(|c| c.dmidecode_dir.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DMIDECODE_DIR))
}

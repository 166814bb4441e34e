/// End-to-end tests for config file loading and CLI option merging.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Lays out a working directory the way the defaults expect it:
/// `build_numbers/esxi_build_numbers.json` and `dmidecode/`.
fn create_workspace(dir: &Path) {
    fs::create_dir(dir.join("build_numbers")).unwrap();
    cargo_bin_cmd!("esxi-bios-map")
        .current_dir(dir)
        .args(["history", "-i"])
        .arg(fixtures_path().join("kb.txt"))
        .args(["-o", "build_numbers/esxi_build_numbers.json"])
        .assert()
        .success();

    let dumps = dir.join("dmidecode");
    fs::create_dir(&dumps).unwrap();
    for sub in ["5.5", "6.0", "6.5"] {
        for entry in fs::read_dir(fixtures_path().join("dmidecode").join(sub)).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), dumps.join(entry.file_name())).unwrap();
        }
    }
}

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());

        let output = cargo_bin_cmd!("esxi-bios-map")
            .current_dir(dir.path())
            .arg("resolve")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.lines().count(), 3);
    }

    #[test]
    fn test_auto_discovery_applies_minor() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        fs::write(dir.path().join("esxi-bios-map.config.yml"), "minor: true\n").unwrap();

        let output = cargo_bin_cmd!("esxi-bios-map")
            .current_dir(dir.path())
            .arg("resolve")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("0xEA0C0 09/30/2015 3568722 6.0u2"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        fs::write(
            dir.path().join("esxi-bios-map.config.yml"),
            "format: markdown\n",
        )
        .unwrap();

        let output = cargo_bin_cmd!("esxi-bios-map")
            .current_dir(dir.path())
            .arg("resolve")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'format'"));
    }
}

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_paths() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());
        let snapshot = dir.path().join("build_numbers/esxi_build_numbers.json");
        let config_path = dir.path().join("custom-config.yml");
        fs::write(
            &config_path,
            format!(
                "build_numbers: {}\ndmidecode_dir: {}\nminor: true\nminor_error_high: true\n",
                snapshot.display(),
                dir.path().join("dmidecode").display()
            ),
        )
        .unwrap();

        let output = cargo_bin_cmd!("esxi-bios-map")
            .args(["resolve", "-c"])
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("0xEA050 04/14/2014 1331820 5.5u3\n"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("esxi-bios-map")
            .args(["resolve", "-c", "nonexistent-config.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_config_value_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "version_ordering: alphabetical\n").unwrap();

        cargo_bin_cmd!("esxi-bios-map")
            .args(["resolve", "-c"])
            .arg(&config_path)
            .assert()
            .code(3);
    }
}

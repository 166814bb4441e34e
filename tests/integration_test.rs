/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use esxi_bios_map::prelude::*;

const KB_TABLE: &str = include_str!("fixtures/kb.txt");

fn dumps() -> MockFirmwareDumpSource {
    MockFirmwareDumpSource::new()
        .with_bios("1331820", "0xEA050", "04/14/2014")
        .with_bios("3029944", "0xEA050", "04/14/2014")
        .with_bios("2494585", "0xEA0C0", "09/21/2015")
        .with_bios("3029758", "0xEA0C0", "09/21/2015")
        .with_bios("3568722", "0xEA0C0", "09/30/2015")
        .with_bios("4564106", "0xEA520", "04/05/2016")
}

fn resolve(options: ReconcileOptions) -> ResolveResponse {
    let use_case = ResolveFirmwareVersionsUseCase::new(
        MockVersionHistoryReader::from_kb_text(KB_TABLE),
        dumps(),
        MockProgressReporter::new(),
    );
    use_case
        .execute(ResolveRequest::new(
            PathBuf::from("esxi_build_numbers.json"),
            PathBuf::from("dmidecode"),
            options,
            false,
        ))
        .unwrap()
}

fn plain(entries: &[ResultEntry]) -> String {
    PlainTextFormatter::new().format(entries).unwrap()
}

#[test]
fn test_history_happy_path() {
    let reporter = MockProgressReporter::new();
    let use_case =
        BuildVersionHistoryUseCase::new(MockKbTableReader::new(KB_TABLE), reporter.clone());

    let response = use_case.execute(HistoryRequest::new(None)).unwrap();

    let labels: Vec<String> = response.records.iter().map(|r| r.minor_label()).collect();
    assert_eq!(
        labels,
        vec!["6.5", "6.0u2", "6.0u1", "6.0u1", "6.0", "5.5u3", "5.5"]
    );
    assert_eq!(response.records[1].interpolated_build_number, "3568722");
    assert_eq!(response.records[0].interpolated_build_number, "4564106");
    assert_eq!(response.records[6].release_date, "2013-09-22");

    // Only the column header line is not a KB row
    assert_eq!(response.failures.len(), 1);
    assert_eq!(reporter.errors().len(), 1);
    assert!(reporter.errors()[0].contains("Release Name"));
}

#[test]
fn test_history_read_failure() {
    let use_case = BuildVersionHistoryUseCase::new(
        MockKbTableReader::with_failure(),
        MockProgressReporter::new(),
    );
    let result = use_case.execute(HistoryRequest::new(Some(PathBuf::from("kb.txt"))));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("kb.txt"));
}

#[test]
fn test_resolve_major_versions() {
    let response = resolve(ReconcileOptions::default());
    assert_eq!(
        plain(&response.entries),
        "0xEA050 04/14/2014 1331820 5.5\n\
         0xEA0C0 09/21/2015 2494585 6.0\n\
         0xEA520 04/05/2016 4564106 6.5\n"
    );
    assert_eq!(response.fingerprinted_dumps, 6);
    assert_eq!(response.ambiguous_fingerprints, 0);
}

#[test]
fn test_resolve_minor_versions_round_low() {
    let response = resolve(ReconcileOptions {
        label_choice: LabelChoice::Minor,
        ..Default::default()
    });
    assert_eq!(
        plain(&response.entries),
        "0xEA050 04/14/2014 1331820 5.5\n\
         0xEA0C0 09/21/2015 2494585 6.0\n\
         0xEA0C0 09/30/2015 3568722 6.0u2\n\
         0xEA520 04/05/2016 4564106 6.5\n"
    );
    assert_eq!(response.ambiguous_fingerprints, 2);
}

#[test]
fn test_resolve_minor_versions_round_high() {
    let response = resolve(ReconcileOptions {
        label_choice: LabelChoice::Minor,
        tie_break: TieBreakPolicy::RoundHigh,
        ..Default::default()
    });
    let versions: Vec<&str> = response
        .entries
        .iter()
        .map(|e| e.resolved_version.as_str())
        .collect();
    assert_eq!(versions, vec!["5.5u3", "6.0u1", "6.0u2", "6.5"]);
}

#[test]
fn test_resolve_dump_mode_keeps_every_build() {
    let response = resolve(ReconcileOptions {
        dump: true,
        ..Default::default()
    });
    assert_eq!(
        plain(&response.entries),
        "0xEA050 04/14/2014 1331820 5.5\n\
         0xEA050 04/14/2014 3029944 5.5\n\
         0xEA0C0 09/21/2015 2494585 6.0\n\
         0xEA0C0 09/21/2015 3029758 6.0\n\
         0xEA0C0 09/30/2015 3568722 6.0\n\
         0xEA520 04/05/2016 4564106 6.5\n"
    );
}

#[test]
fn test_resolve_renders_template() {
    let response = resolve(ReconcileOptions {
        label_choice: LabelChoice::Minor,
        ..Default::default()
    });
    let formatter = FacterTemplateFormatter::new("vmware_version.rb", "if x\n  [PLACEHOLDER]\nend\n");
    let output = formatter.format(&response.entries).unwrap();

    assert_eq!(
        output,
        "# This file was generated from vmware_version.rb\n\
         \n\
         if x\n  \
         elsif biosaddress == '0xEA050'\n      \
         vmversion = '5.5'\n  \
         elsif biosaddress == '0xEA0C0' and biosdate == '09/21/2015'\n      \
         vmversion = '6.0'\n  \
         elsif biosaddress == '0xEA0C0' and biosdate == '09/30/2015'\n      \
         vmversion = '6.0u2'\n  \
         elsif biosaddress == '0xEA520'\n      \
         vmversion = '6.5'\n\
         end\n"
    );
}

#[test]
fn test_resolve_skips_incomplete_dump_and_reports_it() {
    let reporter = MockProgressReporter::new();
    let use_case = ResolveFirmwareVersionsUseCase::new(
        MockVersionHistoryReader::from_kb_text(KB_TABLE),
        dumps().with_raw("3247720", "BIOS Information\n\tVendor: Phoenix Technologies LTD\n"),
        reporter.clone(),
    );
    let response = use_case
        .execute(ResolveRequest::new(
            PathBuf::from("b.json"),
            PathBuf::from("d"),
            ReconcileOptions::default(),
            false,
        ))
        .unwrap();

    assert_eq!(response.skipped.len(), 1);
    assert_eq!(response.entries.len(), 3);
    assert!(reporter
        .errors()
        .iter()
        .any(|m| m.contains("dmidecode.3247720.txt")));
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Progress: 7/7")));
}

#[test]
fn test_resolve_unknown_build_aborts() {
    let use_case = ResolveFirmwareVersionsUseCase::new(
        MockVersionHistoryReader::from_kb_text(KB_TABLE),
        dumps().with_bios("9999999", "0xEA520", "04/05/2016"),
        MockProgressReporter::new(),
    );
    let err = use_case
        .execute(ResolveRequest::new(
            PathBuf::from("b.json"),
            PathBuf::from("d"),
            ReconcileOptions::default(),
            false,
        ))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<VersionMapError>(),
        Some(VersionMapError::UnknownBuildNumber { build_number, .. }) if build_number == "9999999"
    ));
}

#[test]
fn test_coverage_reports_missing_dump() {
    let use_case = CheckCoverageUseCase::new(
        MockKbTableReader::new(KB_TABLE),
        dumps(),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(CoverageRequest::new(None, PathBuf::from("dmidecode")))
        .unwrap();

    let report = CoverageReportFormatter::new().format(&response.entries);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "DONE ESXi 6.5 GA\tESXi 6.5 GA\t11/15/2016\t4564106\tNA");
    assert_eq!(
        lines[2],
        "     ESXi 6.0 Express Patch 4\tESXi 6.0 EP 4\t11/25/2015\t3247720\tNA"
    );

    let gaps: Vec<&str> = response.gaps().map(|r| r.build_number.as_str()).collect();
    assert_eq!(gaps, vec!["3247720"]);
}

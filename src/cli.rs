use clap::{Args as ClapArgs, Parser, Subcommand};
use esxi_bios_map::version_resolution::policies::VersionOrdering;
use std::path::PathBuf;

/// Map VMware ESXi versions to the BIOS fingerprints of their virtual hardware
#[derive(Parser, Debug)]
#[command(name = "esxi-bios-map")]
#[command(version)]
#[command(
    about = "Map VMware ESXi versions to BIOS fingerprints",
    long_about = "Parse the VMware build-number KB table into a JSON snapshot, resolve \
                  dmidecode dumps of guests to ESXi versions, and report which \
                  versions still lack a dump."
)]
pub struct Args {
    /// Path to a config file (defaults to ./esxi-bios-map.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse the KB build-number table into the JSON snapshot
    History(HistoryArgs),
    /// Resolve dmidecode dumps to ESXi versions
    Resolve(ResolveArgs),
    /// List KB versions that have no dmidecode dump yet
    Coverage(CoverageArgs),
}

#[derive(ClapArgs, Debug)]
pub struct HistoryArgs {
    /// KB table text (reads standard input when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ResolveArgs {
    /// Build-number JSON snapshot written by `history`
    #[arg(short, long, value_name = "FILE")]
    pub build_numbers: Option<PathBuf>,

    /// Directory holding dmidecode.<build>.txt dumps
    #[arg(short, long, value_name = "DIR")]
    pub dmidecode_dir: Option<PathBuf>,

    /// Show minor versions (6.0u2) instead of major versions (6.0)
    #[arg(long)]
    pub minor: bool,

    /// When one BIOS is shared by several versions, report the newest (an upper bound)
    /// instead of the oldest (a lower bound); neither proves the exact version
    #[arg(long)]
    pub minor_error_high: bool,

    /// Print every build's fingerprint without rounding or deduplication
    #[arg(long)]
    pub dump: bool,

    /// Facter template whose [PLACEHOLDER] line is replaced by the version mapping
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Fail on a dump without Address or Release Date instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Version comparison: numeric or lexicographic
    #[arg(long, value_name = "ORDERING")]
    pub version_ordering: Option<VersionOrdering>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CoverageArgs {
    /// KB table text (reads standard input when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding dmidecode.<build>.txt dumps
    #[arg(short, long, value_name = "DIR")]
    pub dmidecode_dir: Option<PathBuf>,

    /// Exit with code 1 when any version lacks a dump
    #[arg(long)]
    pub fail_on_gaps: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

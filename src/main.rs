mod cli;
mod config;

use cli::{Args, Command, CoverageArgs, HistoryArgs, ResolveArgs};
use config::{ConfigFile, ResolveOverrides};
use esxi_bios_map::adapters::outbound::console::StderrProgressReporter;
use esxi_bios_map::adapters::outbound::filesystem::{DmidecodeDirectory, FileSystemReader};
use esxi_bios_map::adapters::outbound::formatters::{
    CoverageReportFormatter, VersionHistoryJsonFormatter,
};
use esxi_bios_map::application::dto::{
    CoverageRequest, HistoryRequest, OutputMode, ResolveRequest,
};
use esxi_bios_map::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use esxi_bios_map::application::use_cases::{
    BuildVersionHistoryUseCase, CheckCoverageUseCase, ResolveFirmwareVersionsUseCase,
};
use esxi_bios_map::shared::error::ExitCode;
use esxi_bios_map::shared::Result;
use esxi_bios_map::version_resolution::policies::{LabelChoice, TieBreakPolicy};
use esxi_bios_map::version_resolution::services::ReconcileOptions;
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::History(history) => run_history(history),
        Command::Resolve(resolve) => run_resolve(resolve, config.as_ref()),
        Command::Coverage(coverage) => run_coverage(coverage, config.as_ref()),
    }
}

/// Explicit `--config` must exist; otherwise look for the default file in `.`.
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            eprintln!("⚙️  Loaded config from: {}", path.display());
            Ok(Some(config))
        }
        None => {
            let config = config::discover_config(Path::new("."))?;
            if config.is_some() {
                eprintln!("⚙️  Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            Ok(config)
        }
    }
}

fn run_history(args: HistoryArgs) -> Result<ExitCode> {
    let use_case =
        BuildVersionHistoryUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(HistoryRequest::new(args.input))?;

    let output = VersionHistoryJsonFormatter::new().format(&response.records)?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)?;
    Ok(ExitCode::Success)
}

fn run_resolve(args: ResolveArgs, config: Option<&ConfigFile>) -> Result<ExitCode> {
    let settings = config::merge_resolve_settings(
        ResolveOverrides {
            build_numbers: args.build_numbers,
            dmidecode_dir: args.dmidecode_dir,
            minor: args.minor,
            minor_error_high: args.minor_error_high,
            dump: args.dump,
            strict: args.strict,
            template: args.template,
            version_ordering: args.version_ordering,
        },
        config,
    )?;
    tracing::debug!(?settings, "effective resolve settings");

    // Read the template before any dump so a bad path fails fast
    let mode = OutputMode::from_template(settings.template.clone());
    let formatter = FormatterFactory::create(&mode, &FileSystemReader::new())?;

    let use_case = ResolveFirmwareVersionsUseCase::new(
        FileSystemReader::new(),
        DmidecodeDirectory::new(),
        StderrProgressReporter::new(),
    );
    let options = ReconcileOptions {
        label_choice: LabelChoice::from_prefer_minor(settings.minor),
        tie_break: TieBreakPolicy::from_round_high(settings.minor_error_high),
        ordering: settings.version_ordering,
        dump: settings.dump,
    };
    let response = use_case.execute(ResolveRequest::new(
        settings.build_numbers,
        settings.dmidecode_dir,
        options,
        settings.strict,
    ))?;

    eprintln!("{}", FormatterFactory::progress_message(&mode));
    let output = formatter.format(&response.entries)?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)?;
    Ok(ExitCode::Success)
}

fn run_coverage(args: CoverageArgs, config: Option<&ConfigFile>) -> Result<ExitCode> {
    let dmidecode_dir = config::resolve_dmidecode_dir(args.dmidecode_dir, config);
    let use_case = CheckCoverageUseCase::new(
        FileSystemReader::new(),
        DmidecodeDirectory::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(CoverageRequest::new(args.input, dmidecode_dir))?;

    let output = CoverageReportFormatter::new().format(&response.entries);
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)?;

    if args.fail_on_gaps && response.has_gaps() {
        eprintln!(
            "❌ {} version(s) have no dmidecode dump",
            response.gaps().count()
        );
        return Ok(ExitCode::CoverageGaps);
    }
    Ok(ExitCode::Success)
}

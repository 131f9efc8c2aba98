use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use constguard_analysis::enforcement::{
    AnnotationCatalog, AnnotationDecoder, CheckRunner, CheckSummary, VariantContext,
};
use constguard_analysis::provider::JsonModelProvider;
use constguard_analysis::reporters::{create_reporter, CheckOutcome};
use constguard_core::config::{ConstguardConfig, ReportFormat};
use constguard_core::constants::EXIT_OK;
use constguard_core::errors::RunError;
use constguard_core::events::EventDispatcher;

mod cli;
mod progress;

use cli::Cli;
use progress::ProgressPrinter;

fn main() -> ExitCode {
    constguard_core::tracing::init_tracing();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => return finish(&cli, None, Err(error)),
    };
    let result = run(&cli, &config);
    finish(&cli, Some(&config), result)
}

fn load_config(cli: &Cli) -> Result<ConstguardConfig, RunError> {
    let root = std::env::current_dir().map_err(|e| RunError::Usage(e.to_string()))?;
    let overrides = cli.overrides();
    Ok(ConstguardConfig::load(
        &root,
        cli.config.as_deref(),
        Some(&overrides),
    )?)
}

fn run(cli: &Cli, config: &ConstguardConfig) -> Result<CheckSummary, RunError> {
    let (flavor, build_type) = config.active_variant()?;
    let context = VariantContext::new(flavor, build_type);

    let catalog = AnnotationCatalog::for_package(config.check.effective_annotation_package());
    let mut events = EventDispatcher::new();
    if config.report.effective_format() == ReportFormat::Text && !cli.quiet {
        events.register(Arc::new(ProgressPrinter));
    }

    CheckRunner::new(JsonModelProvider::new(), AnnotationDecoder::new(catalog))
        .with_events(events)
        .run(&cli.artifacts, context)
}

fn finish(
    cli: &Cli,
    config: Option<&ConstguardConfig>,
    result: Result<CheckSummary, RunError>,
) -> ExitCode {
    let (format, show_passes) = match config {
        Some(config) => (
            config.report.effective_format(),
            config.report.effective_show_passes(),
        ),
        None if cli.json => (ReportFormat::Json, false),
        None => (ReportFormat::Text, false),
    };

    let reporter = create_reporter(format, show_passes);
    match reporter.render(CheckOutcome::from(&result)) {
        Ok(rendered) => match (&result, format) {
            (Err(_), ReportFormat::Text) => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        },
        Err(e) => tracing::error!(reporter = reporter.name(), error = %e, "failed to render report"),
    }

    let code = match &result {
        Ok(_) => EXIT_OK,
        Err(error) => error.exit_code(),
    };
    ExitCode::from(code as u8)
}

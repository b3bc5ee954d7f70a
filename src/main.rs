use std::{
    io::{self, IsTerminal},
    process::ExitCode,
    str::FromStr,
    sync::Arc,
};

use clap::{CommandFactory, Parser};
use coinfolio::{
    adapters::exchange::ClientRegistry,
    application::service::CoinfolioApplicationService,
    cli::{Cli, CliAdapter, CliError},
    config::AppConfig,
    ports::FetchError,
    prettyprint::PrettyFormatter,
};
use error_stack::{report, Report, ResultExt};
use indicatif::ProgressStyle;
use tracing::Level;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{
    filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(request) = cli.portfolio_request() else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("{error}");
                ExitCode::FAILURE
            }
        };
    };

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(report) => {
            eprintln!("{report:?}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if let Err(report) = setup_tracing(log_level) {
        eprintln!("{}", report.current_context());
        return ExitCode::FAILURE;
    }
    setup_panic_hook();

    let registry = match ClientRegistry::gateway(&config.gateway) {
        Ok(registry) => registry,
        Err(report) => {
            tracing::debug!("{report:?}");
            eprintln!("{}", report.current_context());
            return ExitCode::FAILURE;
        }
    };
    let application_service = Arc::new(CoinfolioApplicationService::new(Arc::new(registry)));
    let cli_adapter = CliAdapter::new(application_service, config.btc_precision);

    match cli_adapter.run(&request, &mut io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            report_failure(&report);
            ExitCode::FAILURE
        }
    }
}

/// Prints the fetch error itself when there is one, so the user sees which
/// exchange or credential failed rather than the adapter's summary.
fn report_failure(report: &Report<CliError>) {
    tracing::debug!("{report:?}");
    match report.downcast_ref::<FetchError>() {
        Some(cause) => eprintln!("{cause}"),
        None => eprintln!("{}", report.current_context()),
    }
}

fn setup_tracing(log_level: &str) -> error_stack::Result<(), CliError> {
    let level = Level::from_str(log_level)
        .map_err(|_| report!(CliError::InvalidLogLevel(log_level.to_string())))?;

    let progress_style =
        ProgressStyle::with_template("{span_child_prefix}{spinner} {span_name}{{{span_fields}}}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let indicatif_layer = IndicatifLayer::new().with_progress_style(progress_style);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(io::stderr().is_terminal()))
        .with_writer(indicatif_layer.get_stderr_writer());

    Registry::default()
        .with(Targets::new().with_target("coinfolio", level))
        .with(indicatif_layer)
        .with(stderr_layer)
        .try_init()
        .change_context(CliError::LoggingSetupFailed)
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

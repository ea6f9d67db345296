//! Argos ROI command-line entry point.
//!
//! Loads the configured workspace and prints the dashboard and the
//! aggregated global view as JSON on stdout. Logs go to stderr.

use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use argos_roi::adapters::{FileAnalysisStorage, InMemoryAnalysisStorage};
use argos_roi::application::{
    load_store, DashboardView, GetDashboardHandler, GetDashboardQuery,
    GetGlobalViewHandler, GetGlobalViewQuery, GlobalView,
};
use argos_roi::config::{AppConfig, LoggingConfig};
use argos_roi::ports::AnalysisStorage;

#[derive(Serialize)]
struct Report {
    dashboard: DashboardView,
    global: GlobalView,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(true).init();
    }
}

fn run(config: &AppConfig) -> Result<Report, Box<dyn std::error::Error>> {
    let storage: Box<dyn AnalysisStorage> = match &config.storage.path {
        Some(path) => Box::new(FileAnalysisStorage::new(path)),
        None => Box::new(InMemoryAnalysisStorage::new()),
    };

    let defaults = config.defaults.global_params()?;
    let store = load_store(storage.as_ref(), defaults)?;
    info!(analyses = store.len(), "Workspace ready");

    let format = config.format.number_format();
    Ok(Report {
        dashboard: GetDashboardHandler::new(format.clone()).handle(&store, GetDashboardQuery),
        global: GetGlobalViewHandler::new(format).handle(&store, GetGlobalViewQuery),
    })
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("argos-roi: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Err(err) = config.validate() {
        error!(error = %err, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let report = match run(&config) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "Failed to build report");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to serialize report");
            ExitCode::FAILURE
        }
    }
}

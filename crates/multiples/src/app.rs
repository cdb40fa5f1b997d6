//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::warn;

use multiples_cli::presenter::CLIResultPresenter;
use multiples_core::observers::LoggingObserver;
use multiples_core::progress::CancellationToken;
use multiples_core::registry::DefaultFactory;
use multiples_core::request::MultiplesRequest;
use multiples_orchestration::calculator_selection::get_calculators_to_run;
use multiples_orchestration::interfaces::ResultPresenter;
use multiples_orchestration::orchestrator::{execute_calculations_with_observer, first_failure};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        multiples_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.serve {
        return run_server(config);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let request = MultiplesRequest::new(config.total, config.multiples.clone());

    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    let observer = LoggingObserver::new();
    let results =
        execute_calculations_with_observer(&calculators, &request, &opts, &cancel, &observer);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(sum) => presenter.present_result(&result.algorithm, &request, *sum, result.duration),
            Err(e) => presenter.present_error(&result.algorithm, e),
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    match first_failure(&results) {
        Some(e) => Err::<(), _>(e.clone()).context("calculation failed"),
        None => Ok(()),
    }
}

fn run_server(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    runtime.block_on(multiples_server::serve(config.server_config()))
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }
}

//! Multiples: sum-of-multiples calculator and REST server.

use std::process::ExitCode;

use multiples_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(errors::exit_code(&e))
        }
    }
}

pub mod arango;
pub mod bootstrap;
pub mod config;
pub mod metadata;
pub mod probes;
pub mod runner;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    match runner::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Fatal error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

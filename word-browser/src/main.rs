use std::process::ExitCode;

use config::Config;
use dictionary::Dictionary;
use session::Session;
use tracing_subscriber::EnvFilter;
use utilities::StdConsole;

mod config;
mod session;
mod utilities;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(status) => ExitCode::from(status),
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> anyhow::Result<u8> {
    let config = Config::from_env()?;
    tracing::debug!(
        url = %config.api_url,
        timeout = config.timeout_seconds,
        "loaded configuration"
    );
    let dict = Dictionary::new(config.dictionary())?;

    let mut console = StdConsole::new();
    let outcome = Session::new(&dict, &mut console).run().await?;
    tracing::info!(?outcome, "session ended");
    Ok(outcome.exit_status())
}

mod cli;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ftdc::progress::SpinnerProgress;
use ftdc::{AtlasConfig, AtlasSession, Credentials, Error, FtdcDataService, FtdcLoader};
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  match run(Cli::parse()).await {
    Ok(download_path) => {
      println!("Downloaded to: `{download_path}`", download_path = download_path.display());
      ExitCode::SUCCESS
    }
    Err(error) if error.is_ftdc_error() => {
      eprintln!("Error: {error}");
      ExitCode::FAILURE
    }
    Err(error) => {
      eprintln!("Unexpected error: {error}");
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli) -> Result<std::path::PathBuf, Error> {
  let Cli {
    group_key,
    replica_set_name,
    size,
    public,
    private,
    output_dir,
    poll_interval,
    max_wait,
  } = cli;

  let config = AtlasConfig::default()
    .with_poll_interval(Duration::from_secs(poll_interval))
    .with_max_wait(max_wait.map(Duration::from_secs));
  let session = AtlasSession::new(Credentials::new(public, private)?, config);
  let progress = SpinnerProgress::new(format!("Requesting FTDC data for {replica_set_name}"))?;

  let service = FtdcDataService::new(session).with_progress(Arc::new(progress));

  service
    .get_ftdc_data(&group_key, &replica_set_name, size, output_dir.as_deref())
    .await
}

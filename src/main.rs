use std::process::ExitCode;

use clap::Parser;
use cli::Args;
use ton_deployer::address::Address;
use ton_deployer::client::TonClient;
use ton_deployer::error::DeployerResult;
use ton_deployer::workflow;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;

/// Configures tracing with default level INFO,
/// If the environment variable `RUST_LOG` is set, it will be used instead.
fn configure_tracing() {
    let level_filter_layer =
        EnvFilter::builder().with_default_directive(tracing::Level::INFO.into()).from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(level_filter_layer).init();
}

async fn run(args: Args) -> DeployerResult<Address> {
    let (client_config, package) = args.to_config()?;

    let server_address = client_config.network.server_address.clone();
    let client = TonClient::new(client_config)?;
    println!("Deploying through node at {server_address}");

    workflow::run(&client, &package).await
}

#[tokio::main]
async fn main() -> ExitCode {
    configure_tracing();

    // parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

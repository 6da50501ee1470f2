mod cli;
mod markdown;
mod search;
mod wikipedia;

pub const USER_AGENT: &str = concat!(
    "manahealth/",
    env!("CARGO_PKG_VERSION"),
    " (bilingual health information lookup)"
);

use clap::Parser;
use cli::Cli;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("manahealth=info".parse()?),
        )
        .init();

    let args = Cli::parse();
    let gateway = cli::gateway_from_env()
        .inspect_err(|e| tracing::error!("failed to start: {e}"))?;

    let output = cli::run(args.command, &gateway).await?;
    println!("{output}");

    info!("done");
    Ok(())
}

use anyhow::Result;
use frontdesk::prelude::*;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let config = RegistryConfig::from_env();
    tracing::info!(?config, "starting front desk");

    let registry = SharedRegistry::from_config(config);
    let console = Console::new(registry, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// Verbosity comes from `RUST_LOG`, defaulting to warnings only.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use depfetch::app::AppContext;
use depfetch::cli::{commands, Cli};
use depfetch::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config)?;

    commands::fetch_dependencies(&ctx).await?;

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use dessert_clicker::config::Config;
use dessert_clicker::{logging, ui};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dessert-clicker", version, about = "Sell desserts, one click at a time")]
struct Cli {
    /// Config file (default: <config dir>/dessert-clicker/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file, overriding the config
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }

    let log_path = logging::init_tracing(&config.logging).context("initializing logging")?;
    tracing::debug!(
        config = %config_path.display(),
        log = %log_path.display(),
        "Starting dessert-clicker"
    );

    ui::runtime::run(config)
}

use anyhow::Context;
use clap::Parser;
use linguist_config::Config;

mod cli;
mod commands;
mod logging;

use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.json_logs)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::new(),
    };

    tracing::debug!(command = ?cli.command, background = cli.background, "running command");

    let output = commands::run(cli.command, &config, cli.background)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

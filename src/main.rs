use std::io;

use anyhow::Context;
use clap::Parser;
use creator_cards_lib::shell::run_command;
use creator_cards_lib::{build_deck, init_tracing_subscriber, load_config, Cli};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    if let Err(err) = run(cli).await {
        error!("creator-cards failed: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.clone())
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let deck = build_deck(config)?;

    let mut stdout = io::stdout().lock();
    run_command(&deck, &cli.command, &mut stdout).await
}

use clap::Parser;
use listing_search_cli::argparse::{Cli, Commands};
use listing_search_cli::commands::{handle_explain_command, handle_filter_command, load_config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file if it exists
    dotenv::dotenv().ok();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config.as_deref())?;
    let output = match &cli.command {
        Commands::Explain(args) => handle_explain_command(args, &config)?,
        Commands::Filter(args) => handle_filter_command(args, &config)?,
    };
    println!("{}", output);
    Ok(())
}

/// Medialib - media library showcase
use clap::{Parser, Subcommand};
use medialib_cli::{config::AppConfig, search, showcase};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medialib")]
#[command(about = "Media content, playlists and library search", long_about = None)]
struct Cli {
    /// Program to run (defaults to the showcase)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe and play sample media, then copy a playlist
    Showcase,
    /// List and sort a media library, then search it by title from stdin
    Library,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    // Logs go to stderr; stdout carries the program output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!(?config, "Loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Showcase) {
        Commands::Showcase => {
            tracing::info!("Running showcase");
            showcase::run(&mut out, &config.showcase)?;
        }
        Commands::Library => {
            tracing::info!("Running library search");
            let stdin = io::stdin();
            search::run(&mut stdin.lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}


use anyhow::{Context, Result};
use clap::Parser;
use paradox_core::{Game, GameConfig};
use std::{fs::File, io, path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;

mod plain;
mod tui;

#[derive(Parser, Debug)]
#[command(version, about = "Escape the time loop in Dr. TTN's mansion", long_about = None)]
struct Args {
    /// TOML file overriding the start position and inventory capacity
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Line-oriented mode: read commands from stdin, print to stdout
    #[arg(long)]
    plain: bool,

    /// Skip the title banner and story
    #[arg(long)]
    no_intro: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    tracing::info!(?config, plain = args.plain, "starting session");

    let game = Game::new(&config);
    let show_banner = !args.no_intro;

    if args.plain {
        plain::run(game, show_banner)
    } else {
        tui::run(game, show_banner)
    }
}

/// Routes `tracing` output so it never lands on the game screen.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`. The full-screen UI
/// only logs when a log file is given.
fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else if args.plain {
        builder.with_writer(io::stderr).init();
    }
    Ok(())
}

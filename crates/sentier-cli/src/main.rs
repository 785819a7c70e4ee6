//! Terminal frontend for the Sentier text adventure.

mod demo;
mod terminal;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{LevelFilter, info};

use sentier_engine::{EngineConfig, Game};
use terminal::{TerminalInput, TerminalOutput};

/// Name used when the player does not give one.
const DEFAULT_NAME: &str = "Aventurier";

#[derive(Parser)]
#[command(
    name = "sentier",
    about = "Sentier: a text adventure through an enchanted kingdom",
    version
)]
struct Cli {
    /// Player name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// RNG seed for reproducible NPC movement and theft rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report every NPC move after each turn
    #[arg(long)]
    trace_npcs: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<EngineConfig, String> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.trace_npcs {
        config = config.with_trace_npcs(true);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;
    let mut input = TerminalInput::new(io::stdin());

    let name = match cli.name {
        Some(name) => name,
        None => input
            .ask("\nEntrez votre nom: ")
            .map_err(|e| e.to_string())?
            .unwrap_or_default(),
    };
    let name = match name.trim() {
        "" => DEFAULT_NAME.to_string(),
        trimmed => trimmed.to_string(),
    };

    let (world, start) = demo::world().map_err(|e| format!("failed to build world: {e}"))?;
    let player = demo::player(&name, start).map_err(|e| format!("failed to set up quests: {e}"))?;

    let mut game =
        Game::new(world, player, config).map_err(|e| format!("failed to start game: {e}"))?;
    info!("starting game for '{name}'");
    game.run(&mut input, &mut TerminalOutput)
        .map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! Connect Four GUI
//!
//! Play Connect Four against the AI. Settings come from a TOML file and
//! can be overridden on the command line.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use connect4::ui::Connect4App;
use connect4::{AppConfig, FirstTurn, Strategy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Minimax search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,

    /// Seed for the AI's random source
    #[arg(short, long)]
    seed: Option<u64>,

    /// Move-selection strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstTurn>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Load the config file and layer command-line overrides on top
    fn resolve_config(&self) -> Result<AppConfig, connect4::ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(depth) = self.depth {
            config.engine.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.engine.seed = Some(seed);
        }
        if let Some(strategy) = self.strategy {
            config.engine.strategy = strategy;
        }
        if let Some(first) = self.first {
            config.game.first_turn = first;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config = args.resolve_config()?;
    info!(
        "starting: strategy {:?}, depth {}, first turn {:?}",
        config.engine.strategy, config.engine.depth, config.game.first_turn
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([700.0, 560.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(move |cc| Ok(Box::new(Connect4App::new(cc, config)))),
    )?;
    Ok(())
}

use std::io;
use std::path::PathBuf;

use clap::Parser;
use memora_core::Coord;

use crate::prompt::Prompter;
use crate::settings::Settings;

mod game;
mod prompt;
mod render;
mod settings;
mod vocabulary;

#[derive(Parser, Debug)]
#[command(version, about = "Memory matching game for players sharing one terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board side length, one of 4, 6, 8 or 10
    #[arg(long)]
    size: Option<Coord>,

    /// Player name, repeat once per player in turn order
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// File with one symbol per line, the built-in emoji set is used otherwise
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// TOML file with default settings, command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the hidden board before play starts
    #[arg(long)]
    show_solution: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            symbols: self.symbols.clone(),
            size: self.size,
            players: (!self.players.is_empty()).then(|| self.players.clone()),
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(args.settings());
    log::debug!("settings: {:?}", settings);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    game::run(&settings, args.show_solution, &mut prompter)
}

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process;

use zoetrope::core::config;
use zoetrope::core::deck::Deck;
use zoetrope::tui;

#[derive(Parser)]
#[command(name = "zoetrope", about = "Terminal slide carousel")]
struct Args {
    /// Deck file (TOML) to display; falls back to the built-in demo deck
    deck: Option<String>,

    /// Disable ticker auto-advance
    #[arg(long)]
    no_auto: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to zoetrope.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("zoetrope.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Zoetrope starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            log::warn!("Failed to load config: {e}");
            process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.deck.as_deref(), args.no_auto);

    let deck = match &resolved.deck_path {
        Some(path) => match Deck::load(path) {
            Ok(deck) => deck,
            Err(e) => {
                eprintln!("Failed to load deck {}: {e}", path.display());
                log::warn!("Failed to load deck {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => Deck::demo(),
    };

    tui::run(resolved, deck)
}

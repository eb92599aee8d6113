//! deckhand — terminal slide-deck presenter.

use deckhand::app::{logging, App, AppConfig, AppState};
use deckhand::domain::deck::{load_deck, Navigator};
use deckhand::error::Result;
use deckhand::presentation;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: deckhand <DECK.toml> [--config <CONFIG.toml>]";

#[derive(Debug)]
struct Args {
    deck: PathBuf,
    config: Option<PathBuf>,
}

#[derive(Debug)]
enum Command {
    Present(Args),
    Help,
}

fn parse_args(args: impl Iterator<Item = String>) -> Option<Command> {
    let mut deck = None;
    let mut config = None;

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => config = Some(PathBuf::from(args.next()?)),
            "--help" | "-h" => return Some(Command::Help),
            _ => deck = Some(PathBuf::from(arg)),
        }
    }

    Some(Command::Present(Args {
        deck: deck?,
        config,
    }))
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load_with_file(path)?,
        None => AppConfig::load()?,
    };
    logging::init_logging(&config.logging)?;

    // Deck problems are fatal before the terminal is touched.
    let deck = load_deck(&args.deck)?;
    let navigator = Navigator::new(deck);
    let state = AppState::new(config, args.deck);

    presentation::install_panic_hook();
    let mut terminal = presentation::init()?;

    let mut app = App::new(state, navigator);
    let result = app.run(&mut terminal).await;

    presentation::restore()?;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    match parse_args(std::env::args().skip(1)) {
        Some(Command::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Some(Command::Present(args)) => match run(args).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("deckhand: {err}");
                ExitCode::FAILURE
            }
        },
        None => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

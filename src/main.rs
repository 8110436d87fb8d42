use hangman::cli::{CliInterface, parse_cli};
use hangman::game_state::game_loop;
use hangman::logging::{init_logger, level_for_verbosity};
use hangman::tui::TuiInterface;
use hangman::wordbank::{WordSource, default_corpus_path, load_corpus};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Err(e) = init_logger(level_for_verbosity(cli.verbose), cli.tui) {
        eprintln!("Failed to initialize logging: {e}");
    }

    // An explicit path wins, then a user word list if one is installed,
    // then the list compiled into the binary.
    let path: Option<PathBuf> = cli
        .wordbank_path
        .clone()
        .or_else(|| default_corpus_path().filter(|p| p.is_file()));
    let corpus = match load_corpus(path.as_deref()) {
        Ok(corpus) => Some(corpus),
        Err(e) => {
            log::warn!("{e}; playing with the fallback word");
            None
        }
    };

    let mut source = match cli.seed {
        Some(seed) => WordSource::seeded(seed),
        None => WordSource::from_entropy(),
    };

    let summary = if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize TUI: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(corpus.as_deref(), &mut source, &mut interface, cli.difficulty)
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(corpus.as_deref(), &mut source, &mut interface, cli.difficulty)
    };

    log::info!(
        "played {} rounds",
        summary.won + summary.lost + summary.abandoned
    );
    ExitCode::SUCCESS
}

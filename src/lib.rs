// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod difficulty;
pub mod drawing;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use difficulty::Difficulty;
pub use engine::{GuessEngine, GuessOutcome, MAX_WRONG_GUESSES, Round, RoundStatus};
pub use error::WordSourceError;
pub use game_state::{GameInterface, SessionSummary, UserAction, game_loop};
pub use wordbank::{
    Word, WordSource, WordSourceConfig, candidate_pool, load_corpus, load_wordbank_from_str,
};

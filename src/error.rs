//! Word source error types.
//!
//! Neither variant ever reaches the player: the word source logs them and
//! falls back to its configured placeholder word.

use derive_more::{Display, Error};
use std::io;
use std::path::PathBuf;

use crate::difficulty::Difficulty;

#[derive(Debug, Display, Error)]
pub enum WordSourceError {
    /// The word list could not be read.
    #[display("word list unavailable at {}: {}", path.display(), source)]
    CorpusUnavailable { path: PathBuf, source: io::Error },
    /// Filtering left no word for the requested level.
    #[display("no {difficulty} words left after filtering")]
    EmptyCandidatePool {
        #[error(not(source))]
        difficulty: Difficulty,
    },
}

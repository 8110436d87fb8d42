//! Guess engine for a single round of Hangman.
//!
//! # State Machine
//! - `Playing` is initial. An accepted miss that reaches [`MAX_WRONG_GUESSES`]
//!   moves to `Lost`; an accepted hit that completes the word moves to `Won`.
//! - `Won` and `Lost` are terminal: later guesses are ignored.
//!
//! A round never changes its target. Starting a new game replaces the whole
//! [`Round`] (see [`GuessEngine::reset`]).

use std::collections::BTreeSet;

use crate::debug_log;
use crate::wordbank::Word;

pub const MAX_WRONG_GUESSES: u8 = 6;
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a single call to [`Round::guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; round continues.
    Hit,
    /// Letter is not in the word; round continues.
    Miss,
    /// Letter completed the word.
    Won,
    /// Letter was the last allowed miss.
    Lost,
    /// Letter was already guessed. Nothing changed.
    Repeated,
    /// Not a single `a`-`z` letter. Nothing changed.
    Invalid,
    /// Round had already ended. Nothing changed.
    RoundOver,
}

impl GuessOutcome {
    /// Whether the guess was recorded in the round.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Hit | Self::Miss | Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            status: RoundStatus::Playing,
        }
    }

    /// Applies one guess. Duplicate, invalid and post-terminal guesses are
    /// no-ops reported through the returned outcome.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status.is_terminal() {
            return GuessOutcome::RoundOver;
        }
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Invalid;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        if !self.target.as_str().contains(letter) {
            self.wrong_guesses += 1;
            debug_log!(
                "miss '{}' ({}/{})",
                letter,
                self.wrong_guesses,
                MAX_WRONG_GUESSES
            );
            if self.wrong_guesses >= MAX_WRONG_GUESSES {
                self.status = RoundStatus::Lost;
                return GuessOutcome::Lost;
            }
            return GuessOutcome::Miss;
        }

        debug_log!("hit '{}'", letter);
        if self.is_solved() {
            self.status = RoundStatus::Won;
            return GuessOutcome::Won;
        }
        GuessOutcome::Hit
    }

    fn is_solved(&self) -> bool {
        self.target.as_str().chars().all(|c| self.guessed.contains(&c))
    }

    /// Per position: the letter when guessed (or once the round is lost),
    /// otherwise `None`.
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        let show_all = self.status == RoundStatus::Lost;
        self.target
            .as_str()
            .chars()
            .map(|c| (show_all || self.guessed.contains(&c)).then_some(c))
            .collect()
    }

    /// [`revealed`](Self::revealed) with [`PLACEHOLDER`] for hidden letters.
    #[must_use]
    pub fn revealed_form(&self) -> String {
        self.revealed()
            .into_iter()
            .map(|c| c.unwrap_or(PLACEHOLDER))
            .collect()
    }

    #[must_use]
    pub fn is_letter_used(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Guessed letters that are not in the word, alphabetical.
    pub fn missed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.target.as_str().contains(*c))
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }
}

/// Owns the active round for one game session.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    round: Round,
}

impl GuessEngine {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            round: Round::new(target),
        }
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        self.round.guess(letter)
    }

    /// Discards the current round and starts a fresh one around `target`.
    pub fn reset(&mut self, target: Word) {
        debug_log!(
            "discarding round ({:?}, {} wrong)",
            self.round.status,
            self.round.wrong_guesses
        );
        self.round = Round::new(target);
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }
}

use derive_more::Display;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::difficulty::Difficulty;
use crate::error::WordSourceError;
use crate::{debug_log, info_log};

pub const EMBEDDED_CORPUS: &str = include_str!("resources/words.txt");

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 20;

pub const FALLBACK_WORD: &str = "fallback";

/// Articles, prepositions and conjunctions that never make a round.
pub const DEFAULT_STOP_WORDS: [&str; 38] = [
    "the", "a", "an", "in", "on", "at", "to", "from", "by", "for", "of", "and", "or", "but", "if",
    "than", "so", "yet", "with", "about", "as", "into", "like", "through", "after", "over",
    "under", "between", "out", "against", "during", "without", "before", "around", "near",
    "since", "until", "upon",
];

/// A secret word: lowercase `a`-`z` only, between three and twenty letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Word(String);

impl Word {
    /// Normalises `raw` (trim, lowercase) and validates it.
    pub fn parse(raw: &str) -> Option<Self> {
        let word = raw.trim().to_lowercase();
        is_valid_word(&word).then_some(Self(word))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Each letter of the word, once, in first-seen order.
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for c in self.0.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid_word(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Stop words and fallback word, injected rather than read from globals.
#[derive(Debug, Clone)]
pub struct WordSourceConfig {
    stop_words: HashSet<String>,
    fallback: Word,
}

impl WordSourceConfig {
    /// Builds a config; returns `None` if `fallback` is not itself a valid word.
    pub fn new<I, S>(stop_words: I, fallback: &str) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Some(Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
            fallback: Word::parse(fallback)?,
        })
    }

    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    #[must_use]
    pub fn fallback(&self) -> &Word {
        &self.fallback
    }
}

impl Default for WordSourceConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            fallback: Word(FALLBACK_WORD.to_string()),
        }
    }
}

/// Normalises a newline-delimited corpus into the candidate list, before any
/// difficulty filter. Order of the input is kept.
pub fn load_wordbank_from_str(data: &str, config: &WordSourceConfig) -> Vec<Word> {
    data.lines()
        .filter_map(Word::parse)
        .filter(|word| !config.is_stop_word(word.as_str()))
        .collect()
}

/// Words of `words` matching the length policy of `difficulty`.
pub fn candidate_pool(words: &[Word], difficulty: Difficulty) -> Vec<&Word> {
    words
        .iter()
        .filter(|word| difficulty.accepts(word.as_str()))
        .collect()
}

/// Reads the word list at `path`, or the bundled list when `path` is `None`.
pub fn load_corpus(path: Option<&Path>) -> Result<String, WordSourceError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| WordSourceError::CorpusUnavailable {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(EMBEDDED_CORPUS.to_string()),
    }
}

/// `<data dir>/hangman/words.txt`, if the platform has a data directory.
pub fn default_corpus_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("hangman").join("words.txt"))
}

/// Picks round targets from a corpus under a difficulty policy.
///
/// The random source is injected so tests can seed it; selection is uniform
/// and does not avoid repeats across rounds.
pub struct WordSource<R = ChaCha8Rng> {
    config: WordSourceConfig,
    rng: R,
}

impl WordSource<ChaCha8Rng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(WordSourceConfig::default(), ChaCha8Rng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random::<u64>())
    }
}

impl<R: Rng> WordSource<R> {
    pub fn with_rng(config: WordSourceConfig, rng: R) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &WordSourceConfig {
        &self.config
    }

    /// Selects a target from `corpus`. Never fails: an empty candidate pool
    /// yields the fallback word.
    pub fn select_word(&mut self, corpus: &str, difficulty: Difficulty) -> Word {
        match self.try_select(corpus, difficulty) {
            Ok(word) => word,
            Err(e) => {
                log::warn!("{e}; using fallback word '{}'", self.config.fallback);
                self.config.fallback.clone()
            }
        }
    }

    /// Like [`select_word`](Self::select_word), for a corpus that may not have
    /// been obtained at all.
    pub fn resolve(&mut self, corpus: Option<&str>, difficulty: Difficulty) -> Word {
        match corpus {
            Some(corpus) => self.select_word(corpus, difficulty),
            None => {
                log::warn!(
                    "no word list available; using fallback word '{}'",
                    self.config.fallback
                );
                self.config.fallback.clone()
            }
        }
    }

    fn try_select(&mut self, corpus: &str, difficulty: Difficulty) -> Result<Word, WordSourceError> {
        let words = load_wordbank_from_str(corpus, &self.config);
        let pool = candidate_pool(&words, difficulty);
        debug_log!(
            "{} usable words, {} for {}",
            words.len(),
            pool.len(),
            difficulty
        );
        if pool.is_empty() {
            return Err(WordSourceError::EmptyCandidatePool { difficulty });
        }
        let index = self.rng.random_range(0..pool.len());
        info_log!("selected word #{} of {} for {}", index, pool.len(), difficulty);
        Ok(pool[index].clone())
    }
}

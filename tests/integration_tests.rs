// Integration tests for the hangman application
// These tests drive whole sessions through the line interface

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use hangman::cli::CliInterface;
use hangman::wordbank::{DEFAULT_STOP_WORDS, EMBEDDED_CORPUS, FALLBACK_WORD};
use hangman::*;

fn temp_corpus(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hangman-{}-{name}.txt", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_scripted_session_win_then_exit() {
    // Only one novice word, so the round is fully determined.
    let corpus = "cat\nelephant\nhouse\n";
    let input = "z\nc\nc\na\nt\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut source = WordSource::seeded(1);

    let summary = game_loop(Some(corpus), &mut source, &mut interface, Some(Difficulty::Novice));

    assert_eq!(summary, SessionSummary { won: 1, lost: 0, abandoned: 0 });
}

#[test]
fn test_scripted_session_through_menu() {
    let corpus = "dog\nhorse\n";
    // Menu: bad choice, then novice. Six misses lose the round, then a
    // second novice round is won.
    let input = "9\n1\nz\nq\nx\nj\nk\nv\nnew\nn\nd\no\ng\nno\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut source = WordSource::seeded(7);

    let summary = game_loop(Some(corpus), &mut source, &mut interface, None);

    assert_eq!(summary, SessionSummary { won: 1, lost: 1, abandoned: 0 });
}

#[test]
fn test_end_of_input_abandons_round() {
    let mut interface = CliInterface::new(Cursor::new("e\n"));
    let mut source = WordSource::seeded(2);

    let summary = game_loop(
        Some(EMBEDDED_CORPUS),
        &mut source,
        &mut interface,
        Some(Difficulty::Hard),
    );

    assert_eq!(summary.abandoned, 1);
    assert_eq!(summary.won + summary.lost, 0);
}

#[test]
fn test_corpus_file_round_trip_through_session() {
    let path = temp_corpus("session", "The\nOwl\n  owl  \nnon-profit\n");
    let corpus = load_corpus(Some(path.as_path())).unwrap();
    fs::remove_file(&path).ok();

    let mut interface = CliInterface::new(Cursor::new("o\nw\nl\nexit\n"));
    let mut source = WordSource::seeded(11);
    let summary = game_loop(Some(&corpus), &mut source, &mut interface, Some(Difficulty::Novice));

    assert_eq!(summary.won, 1);
}

#[test]
fn test_missing_corpus_file_is_reported() {
    let path = std::env::temp_dir().join("hangman-definitely-missing/words.txt");
    match load_corpus(Some(path.as_path())) {
        Err(WordSourceError::CorpusUnavailable { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected CorpusUnavailable, got {other:?}"),
    }
}

#[test]
fn test_unavailable_corpus_plays_fallback_word() {
    let mut letters: Vec<char> = FALLBACK_WORD.chars().collect();
    letters.dedup();
    let input: String = letters.iter().map(|c| format!("{c}\n")).collect();
    let mut interface = CliInterface::new(Cursor::new(input));
    let mut source = WordSource::seeded(5);

    let summary = game_loop(None, &mut source, &mut interface, Some(Difficulty::Intermediate));

    assert_eq!(summary.won, 1);
}

#[test]
fn test_empty_pool_falls_back_for_every_level() {
    // Only stop words and invalid entries.
    let corpus = "the\nand\nx1\n\nit's\n";
    let mut source = WordSource::seeded(0);
    for difficulty in Difficulty::ALL {
        assert_eq!(source.select_word(corpus, difficulty).as_str(), FALLBACK_WORD);
    }
}

#[test]
fn test_selected_words_respect_difficulty_and_stop_words() {
    let mut source = WordSource::seeded(42);
    for difficulty in Difficulty::ALL {
        for _ in 0..50 {
            let word = source.select_word(EMBEDDED_CORPUS, difficulty);
            assert!(difficulty.accepts(word.as_str()), "{word} for {difficulty}");
            assert!(!DEFAULT_STOP_WORDS.contains(&word.as_str()));
            assert!(word.as_str().chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}

#[test]
fn test_same_seed_same_words() {
    let mut a = WordSource::seeded(1234);
    let mut b = WordSource::seeded(1234);
    for difficulty in Difficulty::ALL {
        assert_eq!(
            a.select_word(EMBEDDED_CORPUS, difficulty),
            b.select_word(EMBEDDED_CORPUS, difficulty)
        );
    }
}

#[test]
fn test_every_word_in_pool_is_winnable_in_distinct_guesses() {
    let config = WordSourceConfig::default();
    let words = load_wordbank_from_str("cat\nbanana\nmississippi\n", &config);
    for word in &words {
        let mut engine = GuessEngine::new(word.clone());
        let distinct = word.distinct_letters();
        for (i, letter) in distinct.iter().enumerate() {
            let outcome = engine.guess(*letter);
            if i + 1 == distinct.len() {
                assert_eq!(outcome, GuessOutcome::Won);
            } else {
                assert_eq!(outcome, GuessOutcome::Hit);
            }
        }
        assert_eq!(engine.round().wrong_guesses(), 0);
        assert_eq!(engine.round().revealed_form(), word.as_str());
    }
}

#[test]
fn test_wrong_guess_budget_is_exact() {
    let mut engine = GuessEngine::new(Word::parse("dog").unwrap());
    let misses = ['a', 'b', 'c', 'e', 'f', 'h'];
    for (i, letter) in misses.iter().enumerate() {
        let outcome = engine.guess(*letter);
        let expected = if i + 1 == usize::from(MAX_WRONG_GUESSES) {
            GuessOutcome::Lost
        } else {
            GuessOutcome::Miss
        };
        assert_eq!(outcome, expected);
    }
    assert_eq!(engine.guess('d'), GuessOutcome::RoundOver);
    assert_eq!(engine.round().status(), RoundStatus::Lost);
    assert_eq!(engine.round().revealed_form(), "dog");

    engine.reset(Word::parse("cat").unwrap());
    assert_eq!(engine.round().status(), RoundStatus::Playing);
    assert_eq!(engine.round().remaining_attempts(), MAX_WRONG_GUESSES);
    assert_eq!(engine.round().revealed_form(), "___");
}

use clap::Parser;
use crate::difficulty::Difficulty;
use crate::drawing::{gallows, mood};
use crate::engine::{GuessOutcome, Round, RoundStatus};
use crate::game_state::{GameInterface, SessionSummary, UserAction};
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Difficulty of the first round (skips the menu)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Letter(char),
    Invalid,
    Exit,
    NewGame,
}

/// A single ASCII letter, folded to lowercase.
fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Reads one trimmed, lowercased line. `None` on end of input or read error.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nGuess a letter ('new' for a new game, 'exit' to quit):");
    let Some(input) = read_trimmed_line(reader) else {
        return GuessInput::Exit;
    };

    match input.as_str() {
        "exit" | "quit" => GuessInput::Exit,
        "new" | "next" => GuessInput::NewGame,
        _ => match parse_letter(&input) {
            Some(letter) => GuessInput::Letter(letter),
            None => {
                println!("Invalid guess. Please enter a single letter a-z.");
                GuessInput::Invalid
            }
        },
    }
}

/// Prompts until a level is chosen. `None` means quit.
pub fn read_difficulty<R: BufRead>(reader: &mut R) -> Option<Difficulty> {
    loop {
        println!("\nChoose a difficulty ('exit' to quit):");
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            println!("{}. {:<13} {}", i + 1, difficulty.to_string(), difficulty.description());
        }
        let input = read_trimmed_line(reader)?;
        if input == "exit" || input == "quit" {
            return None;
        }
        match Difficulty::from_menu_input(&input) {
            Some(difficulty) => return Some(difficulty),
            None => println!("Invalid choice. Enter 1, 2 or 3."),
        }
    }
}

/// Letters spaced out for readability, e.g. `c _ t`.
#[must_use]
pub fn spaced(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_round(round: &Round, difficulty: Difficulty) {
    println!();
    for line in gallows(round.wrong_guesses()) {
        println!("{line}");
    }
    println!("{}", mood(round.wrong_guesses(), round.status()));
    println!();
    println!("Word ({difficulty}): {}", spaced(&round.revealed_form()));
    let used: String = round.guessed_letters().collect();
    println!(
        "Used: {}   Attempts left: {}",
        if used.is_empty() { "-".to_string() } else { spaced(&used) },
        round.remaining_attempts()
    );
}

pub fn display_outcome(outcome: GuessOutcome, letter: char) {
    match outcome {
        GuessOutcome::Hit => println!("Yes, '{letter}' is in the word."),
        GuessOutcome::Miss => println!("No '{letter}' in the word."),
        GuessOutcome::Repeated => println!("You already tried '{letter}'."),
        GuessOutcome::Invalid => println!("'{letter}' is not a letter."),
        GuessOutcome::Won | GuessOutcome::Lost | GuessOutcome::RoundOver => {}
    }
}

pub fn display_round_over(round: &Round) {
    match round.status() {
        RoundStatus::Won => println!("\nCongratulations! You won!"),
        RoundStatus::Lost => println!(
            "\nGame over! The word was: {}",
            round.target().as_str().to_uppercase()
        ),
        RoundStatus::Playing => {}
    }
}

pub fn display_new_game_message(difficulty: Difficulty) {
    println!("\nNew {difficulty} game started ({}).", difficulty.description());
}

pub fn display_exit_message(summary: &SessionSummary) {
    println!(
        "Exiting. Won {}, lost {}.",
        summary.won, summary.lost
    );
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for line-based play
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn choose_difficulty(&mut self) -> Option<Difficulty> {
        read_difficulty(&mut self.reader)
    }

    fn display_round(&mut self, round: &Round, difficulty: Difficulty) {
        display_round(round, difficulty);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Letter(letter) => Some(UserAction::Guess(letter)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn display_outcome(&mut self, outcome: GuessOutcome, letter: char) {
        display_outcome(outcome, letter);
    }

    fn display_round_over(&mut self, round: &Round) -> UserAction {
        display_round_over(round);
        loop {
            println!("\nPlay again? ('new' for a new game, 'exit' to quit):");
            match read_trimmed_line(&mut self.reader).as_deref() {
                None | Some("exit" | "quit" | "n" | "no") => return UserAction::Exit,
                Some("new" | "next" | "y" | "yes") => return UserAction::NewGame,
                Some(_) => println!("Please answer 'new' or 'exit'."),
            }
        }
    }

    fn display_new_game_message(&mut self, difficulty: Difficulty) {
        display_new_game_message(difficulty);
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        display_exit_message(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::Word;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "hangman", "-i", "words.txt", "-d", "hard", "--seed", "9", "--tui", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.seed, Some(9));
        assert!(cli.tui);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_cli_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["hangman", "-d", "expert"]).is_err());
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(parse_letter("a"), Some('a'));
        assert_eq!(parse_letter("Q"), Some('q'));
        assert_eq!(parse_letter("ab"), None);
        assert_eq!(parse_letter("1"), None);
        assert_eq!(parse_letter(""), None);
        assert_eq!(parse_letter("\u{e9}"), None);
    }

    #[test]
    fn test_read_guess_letter() {
        let mut reader = Cursor::new("  E \n");
        match read_guess(&mut reader) {
            GuessInput::Letter(c) => assert_eq!(c, 'e'),
            _ => panic!("Expected a letter"),
        }
    }

    #[test]
    fn test_read_guess_commands() {
        assert!(matches!(read_guess(&mut Cursor::new("EXIT\n")), GuessInput::Exit));
        assert!(matches!(read_guess(&mut Cursor::new("new\n")), GuessInput::NewGame));
        assert!(matches!(read_guess(&mut Cursor::new("next\n")), GuessInput::NewGame));
    }

    #[test]
    fn test_read_guess_invalid() {
        assert!(matches!(read_guess(&mut Cursor::new("ab\n")), GuessInput::Invalid));
        assert!(matches!(read_guess(&mut Cursor::new("7\n")), GuessInput::Invalid));
        assert!(matches!(read_guess(&mut Cursor::new("\n")), GuessInput::Invalid));
    }

    #[test]
    fn test_read_guess_end_of_input_exits() {
        assert!(matches!(read_guess(&mut Cursor::new("")), GuessInput::Exit));
    }

    #[test]
    fn test_read_difficulty_retries_until_valid() {
        let mut reader = Cursor::new("5\nexpert\n2\n");
        assert_eq!(read_difficulty(&mut reader), Some(Difficulty::Intermediate));
    }

    #[test]
    fn test_read_difficulty_exit_and_eof() {
        assert_eq!(read_difficulty(&mut Cursor::new("exit\n")), None);
        assert_eq!(read_difficulty(&mut Cursor::new("")), None);
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("c_t"), "c _ t");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn test_round_over_prompt() {
        let mut round = Round::new(Word::parse("cat").unwrap());
        for c in "cat".chars() {
            round.guess(c);
        }
        let mut ui = CliInterface::new(Cursor::new("maybe\nyes\n"));
        assert_eq!(ui.display_round_over(&round), UserAction::NewGame);

        let mut ui = CliInterface::new(Cursor::new(""));
        assert_eq!(ui.display_round_over(&round), UserAction::Exit);
    }
}

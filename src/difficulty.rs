use clap::ValueEnum;
use derive_more::Display;
use std::ops::RangeInclusive;

use crate::wordbank::MAX_WORD_LEN;

/// Word-length policy chosen once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, ValueEnum)]
pub enum Difficulty {
    #[display("novice")]
    Novice,
    #[display("intermediate")]
    Intermediate,
    #[display("hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Novice, Self::Intermediate, Self::Hard];

    /// Inclusive range of word lengths this level draws from.
    #[must_use]
    pub fn length_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Novice => 3..=4,
            Self::Intermediate => 5..=7,
            Self::Hard => 8..=MAX_WORD_LEN,
        }
    }

    #[must_use]
    pub fn accepts(self, word: &str) -> bool {
        self.length_range().contains(&word.len())
    }

    /// Menu text shown next to the level name.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Novice => "3-4 letter words",
            Self::Intermediate => "5-7 letter words",
            Self::Hard => "8+ letter words",
        }
    }

    /// Parses menu input: a level name, its first letter, or its 1-based index.
    pub fn from_menu_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "n" | "novice" => Some(Self::Novice),
            "2" | "i" | "intermediate" => Some(Self::Intermediate),
            "3" | "h" | "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_novice_accepts_three_and_four_letters() {
        assert!(Difficulty::Novice.accepts("cat"));
        assert!(Difficulty::Novice.accepts("jump"));
        assert!(!Difficulty::Novice.accepts("at"));
        assert!(!Difficulty::Novice.accepts("house"));
    }

    #[test]
    fn test_intermediate_range() {
        assert!(Difficulty::Intermediate.accepts("coder"));
        assert!(Difficulty::Intermediate.accepts("puzzles"));
        assert!(!Difficulty::Intermediate.accepts("play"));
        assert!(!Difficulty::Intermediate.accepts("elephant"));
    }

    #[test]
    fn test_hard_is_eight_or_more() {
        assert!(Difficulty::Hard.accepts("elephant"));
        assert!(Difficulty::Hard.accepts("programming"));
        assert!(!Difficulty::Hard.accepts("giraffe"));
    }

    #[test]
    fn test_levels_do_not_overlap() {
        for len in 1..=MAX_WORD_LEN {
            let word = "a".repeat(len);
            let matching = Difficulty::ALL.iter().filter(|d| d.accepts(&word)).count();
            assert!(matching <= 1, "length {len} accepted by {matching} levels");
        }
    }

    #[test]
    fn test_from_menu_input() {
        assert_eq!(Difficulty::from_menu_input("1"), Some(Difficulty::Novice));
        assert_eq!(Difficulty::from_menu_input(" Hard \n"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_menu_input("i"), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::from_menu_input("4"), None);
        assert_eq!(Difficulty::from_menu_input(""), None);
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Difficulty::Intermediate.to_string(), "intermediate");
    }
}

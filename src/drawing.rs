//! Gallows picture and caption, shared by the line and full-screen interfaces.

use crate::engine::{MAX_WRONG_GUESSES, RoundStatus};

pub const GALLOWS_HEIGHT: usize = 7;

/// Seven lines of ASCII art: the frame is always drawn, then one body part
/// per wrong guess (head, body, left arm, right arm, left leg, right leg).
#[must_use]
pub fn gallows(wrong_guesses: u8) -> [String; GALLOWS_HEIGHT] {
    let part = |n: u8, drawn: &'static str| if wrong_guesses >= n { drawn } else { " " };

    [
        "  +-----+".to_string(),
        "  |     |".to_string(),
        format!("  |     {}", part(1, "O")),
        format!("  |    {}{}{}", part(3, "/"), part(2, "|"), part(4, "\\")),
        format!("  |    {} {}", part(5, "/"), part(6, "\\")),
        "  |".to_string(),
        "=====".to_string(),
    ]
}

/// Short caption matching how close the figure is to being finished.
#[must_use]
pub fn mood(wrong_guesses: u8, status: RoundStatus) -> &'static str {
    if status == RoundStatus::Won {
        return "Yay!";
    }
    match wrong_guesses {
        0 => "Let's play!",
        1 => "Hmm...",
        2 => "Oops!",
        3 => "Oh no!",
        4 => "Help!",
        n if n < MAX_WRONG_GUESSES => "Please!",
        _ => "Game over!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gallows_has_no_body() {
        let lines = gallows(0);
        let art = lines.join("\n");
        assert!(!art.contains('O'));
        assert!(!art.contains('/'));
        assert!(art.contains("+-----+"));
    }

    #[test]
    fn test_full_gallows() {
        let lines = gallows(6);
        assert_eq!(lines[2], "  |     O");
        assert_eq!(lines[3], "  |    /|\\");
        assert_eq!(lines[4], "  |    / \\");
    }

    #[test]
    fn test_parts_appear_in_order() {
        assert_eq!(gallows(2)[3], "  |     | ");
        assert_eq!(gallows(3)[3], "  |    /| ");
        assert_eq!(gallows(5)[4], "  |    /  ");
    }

    #[test]
    fn test_mood() {
        assert_eq!(mood(0, RoundStatus::Playing), "Let's play!");
        assert_eq!(mood(5, RoundStatus::Playing), "Please!");
        assert_eq!(mood(6, RoundStatus::Lost), "Game over!");
        assert_eq!(mood(3, RoundStatus::Won), "Yay!");
    }
}

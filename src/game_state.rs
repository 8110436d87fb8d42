use rand::Rng;

use crate::difficulty::Difficulty;
use crate::engine::{GuessEngine, GuessOutcome, Round, RoundStatus};
use crate::{debug_log, info_log};
use crate::wordbank::{Word, WordSource};

/// What the player asked for while a round is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Rounds finished during one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: u32,
    pub lost: u32,
    /// Rounds left before reaching a result.
    pub abandoned: u32,
}

/// Presentation layer driven by [`game_loop`].
///
/// Implementations render state they are handed and translate player input;
/// they never mutate a round themselves.
pub trait GameInterface {
    /// Returns the level for the next round, or `None` to quit.
    fn choose_difficulty(&mut self) -> Option<Difficulty>;
    fn display_round(&mut self, round: &Round, difficulty: Difficulty);
    /// Returns `None` when the input was not understood.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, outcome: GuessOutcome, letter: char);
    /// Called once when a round reaches `Won` or `Lost`. Returns the next
    /// action: [`UserAction::NewGame`] or [`UserAction::Exit`].
    fn display_round_over(&mut self, round: &Round) -> UserAction;
    fn display_new_game_message(&mut self, difficulty: Difficulty);
    fn display_exit_message(&mut self, summary: &SessionSummary);
}

enum RoundEnd {
    Finished,
    NewGame,
    Exit,
}

/// Runs rounds until the player exits.
///
/// `corpus` is `None` when the word list could not be loaded; rounds then use
/// the fallback word. `preset` skips the difficulty menu for the first round.
pub fn game_loop<R: Rng, I: GameInterface>(
    corpus: Option<&str>,
    source: &mut WordSource<R>,
    interface: &mut I,
    preset: Option<Difficulty>,
) -> SessionSummary {
    let mut summary = SessionSummary::default();
    let mut next_difficulty = preset;
    let mut current = None;

    loop {
        let Some(difficulty) = next_difficulty.take().or_else(|| interface.choose_difficulty())
        else {
            break;
        };

        let word = source.resolve(corpus, difficulty);
        info_log!("new {} round, {} letters", difficulty, word.len());
        let engine = start_round(&mut current, word);
        interface.display_new_game_message(difficulty);

        let end = play_round(engine, difficulty, interface);
        let round = engine.round();
        match round.status() {
            RoundStatus::Won => summary.won += 1,
            RoundStatus::Lost => summary.lost += 1,
            RoundStatus::Playing => {
                debug_log!("round abandoned");
                summary.abandoned += 1;
            }
        }

        match end {
            RoundEnd::Exit => break,
            RoundEnd::Finished => {
                if interface.display_round_over(round) == UserAction::Exit {
                    break;
                }
            }
            RoundEnd::NewGame => {}
        }
    }

    info_log!(
        "session over: {} won, {} lost, {} abandoned",
        summary.won,
        summary.lost,
        summary.abandoned
    );
    interface.display_exit_message(&summary);
    summary
}

/// Replaces the previous round, if any, with a fresh one around `word`.
fn start_round(slot: &mut Option<GuessEngine>, word: Word) -> &mut GuessEngine {
    match slot {
        Some(engine) => {
            engine.reset(word);
            engine
        }
        None => slot.insert(GuessEngine::new(word)),
    }
}

fn play_round<I: GameInterface>(
    engine: &mut GuessEngine,
    difficulty: Difficulty,
    interface: &mut I,
) -> RoundEnd {
    loop {
        interface.display_round(engine.round(), difficulty);

        let letter = match interface.read_action() {
            Some(UserAction::Guess(letter)) => letter,
            Some(UserAction::NewGame) => return RoundEnd::NewGame,
            Some(UserAction::Exit) => return RoundEnd::Exit,
            None => continue,
        };

        let outcome = engine.guess(letter);
        interface.display_outcome(outcome, letter);
        if engine.round().is_over() {
            interface.display_round(engine.round(), difficulty);
            return RoundEnd::Finished;
        }
    }
}

//! Hangman game state and transitions
//!
//! `GameState` is a plain serializable value. `apply_guess` consumes a state
//! and returns the next one inside a `GuessOutcome`; persistence is left to
//! the caller.

use crate::constants::MASK_CHAR;
use crate::error::{AppError, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Derived game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One hangman game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Secret word, lowercase
    pub word: String,

    /// Guessed letters in guess order
    pub guessed: Vec<char>,

    /// Letters revealed so far, counted per occurrence
    pub success: u32,

    /// Wrong guesses so far
    pub fail: u32,

    /// Wrong guesses allowed before the game is lost
    pub max_fails: u32,
}

/// Result of submitting one letter
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub state: GameState,
    pub letter: char,
    /// Whether the letter occurs in the secret word
    pub correct: bool,
    /// Whether the guess left the state untouched (repeat or finished game)
    pub unchanged: bool,
    pub message: String,
}

impl GameState {
    pub fn new(word: impl Into<String>, max_fails: u32) -> Self {
        Self {
            word: word.into().to_lowercase(),
            guessed: Vec::new(),
            success: 0,
            fail: 0,
            max_fails,
        }
    }

    /// Start a game with a word picked at random from `words`
    pub fn random(words: &[String], max_fails: u32) -> Result<Self> {
        let word = words
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| AppError::Config("word list is empty".to_string()))?;
        Ok(Self::new(word.as_str(), max_fails))
    }

    fn is_revealed(&self, c: char) -> bool {
        !c.is_alphabetic() || self.guessed.contains(&lowercase(c))
    }

    /// Secret word with unguessed letters replaced, space separated
    ///
    /// "cat" with nothing guessed renders as `_ _ _`.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| (if self.is_revealed(c) { c } else { MASK_CHAR }).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of characters in the secret word
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.is_revealed(c))
    }

    pub fn is_lost(&self) -> bool {
        self.fail >= self.max_fails
    }

    /// Win takes precedence over loss
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Guessed letters as display strings
    pub fn guessed_letters(&self) -> Vec<String> {
        self.guessed.iter().map(|c| c.to_string()).collect()
    }

    /// Apply one submitted letter
    ///
    /// Fails with `InvalidInput` unless `input` is exactly one alphabetic
    /// character (surrounding whitespace ignored). Guesses on a finished game
    /// leave it untouched.
    pub fn apply_guess(mut self, input: &str) -> Result<GuessOutcome> {
        let letter = parse_letter(input)?;
        let occurrences = self.word.chars().filter(|&c| lowercase(c) == letter).count() as u32;
        let correct = occurrences > 0;

        if self.status() != GameStatus::InProgress {
            let message = format!(
                "This game is over. The word was '{}'. Start a new game to play again.",
                self.word
            );
            return Ok(self.unchanged(letter, correct, message));
        }

        if self.guessed.contains(&letter) {
            let message = format!("You already guessed '{}'.", letter);
            return Ok(self.unchanged(letter, correct, message));
        }

        self.guessed.push(letter);
        let mut message = if correct {
            self.success += occurrences;
            format!("Nice! '{}' appears {} time(s).", letter, occurrences)
        } else {
            self.fail += 1;
            format!("Sorry, '{}' is not in the word.", letter)
        };

        match self.status() {
            GameStatus::Won => message = format!("You won! The word was '{}'.", self.word),
            GameStatus::Lost => message = format!("Game over! The word was '{}'.", self.word),
            GameStatus::InProgress => {}
        }

        Ok(GuessOutcome {
            state: self,
            letter,
            correct,
            unchanged: false,
            message,
        })
    }

    fn unchanged(self, letter: char, correct: bool, message: String) -> GuessOutcome {
        GuessOutcome {
            state: self,
            letter,
            correct,
            unchanged: true,
            message,
        }
    }
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Validate a submitted guess and normalize it to lowercase
pub fn parse_letter(input: &str) -> Result<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(lowercase(c)),
        _ => Err(AppError::InvalidInput(
            "Please submit a single letter".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(state: GameState, letter: &str) -> GuessOutcome {
        state.apply_guess(letter).unwrap()
    }

    #[test]
    fn test_masked_word() {
        let mut game = GameState::new("cat", 6);
        assert_eq!(game.masked_word(), "_ _ _");

        game.guessed = vec!['c', 't'];
        assert_eq!(game.masked_word(), "c _ t");
    }

    #[test]
    fn test_masked_word_reveals_non_alphabetic() {
        let game = GameState::new("ice-cream", 6);
        assert_eq!(game.masked_word(), "_ _ _ - _ _ _ _ _");
        assert_eq!(game.word_len(), 9);
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(parse_letter("a").unwrap(), 'a');
        assert_eq!(parse_letter("Q").unwrap(), 'q');
        assert_eq!(parse_letter(" e ").unwrap(), 'e');
        assert!(parse_letter("ab").is_err());
        assert!(parse_letter("1").is_err());
        assert!(parse_letter("").is_err());
        assert!(parse_letter("-").is_err());
    }

    #[test]
    fn test_invalid_guess_is_rejected() {
        let err = GameState::new("cat", 6).apply_guess("ab").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_correct_guess_counts_occurrences() {
        let outcome = guess(GameState::new("banana", 6), "a");

        assert!(outcome.correct);
        assert!(!outcome.unchanged);
        assert_eq!(outcome.state.success, 3);
        assert_eq!(outcome.state.fail, 0);
        assert_eq!(outcome.state.masked_word(), "_ a _ a _ a");
    }

    #[test]
    fn test_wrong_guess_increments_fail() {
        let outcome = guess(GameState::new("cat", 6), "z");

        assert!(!outcome.correct);
        assert_eq!(outcome.state.fail, 1);
        assert_eq!(outcome.state.success, 0);
        assert_eq!(outcome.state.guessed, vec!['z']);
    }

    #[test]
    fn test_repeat_guess_keeps_counters() {
        let state = guess(GameState::new("cat", 6), "c").state;
        let state = guess(state, "x").state;
        let before = state.clone();

        let again = guess(state, "c");
        assert!(again.unchanged);
        assert_eq!(again.state, before);
        assert!(again.message.contains("already guessed"));

        let again = guess(again.state, "X");
        assert!(again.unchanged);
        assert_eq!(again.state.fail, 1);
    }

    #[test]
    fn test_guess_order_preserved() {
        let state = guess(GameState::new("cat", 6), "t").state;
        let state = guess(state, "q").state;
        let state = guess(state, "c").state;
        assert_eq!(state.guessed_letters(), vec!["t", "q", "c"]);
    }

    #[test]
    fn test_win() {
        let state = guess(GameState::new("cat", 6), "c").state;
        let state = guess(state, "a").state;
        let outcome = guess(state, "t");

        assert_eq!(outcome.state.status(), GameStatus::Won);
        assert_eq!(outcome.state.masked_word(), "c a t");
        assert!(outcome.message.contains("You won"));
    }

    #[test]
    fn test_win_checked_before_loss() {
        let mut state = GameState::new("cat", 3);
        state.guessed = vec!['c', 'a', 'x', 'y', 'z'];
        state.fail = 3;
        state.success = 2;
        // Already at the threshold; the final letter still wins
        let mut pending = state.clone();
        pending.fail = 2;
        let outcome = guess(pending, "t");
        assert_eq!(outcome.state.status(), GameStatus::Won);

        state.guessed.push('t');
        assert!(state.is_lost());
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn test_loss_reveals_word() {
        let mut state = GameState::new("cat", 3);
        let mut last = None;
        for letter in ["x", "y", "z"] {
            let outcome = guess(state, letter);
            state = outcome.state.clone();
            last = Some(outcome);
        }
        let outcome = last.unwrap();

        assert_eq!(outcome.state.status(), GameStatus::Lost);
        assert_eq!(outcome.state.fail, 3);
        assert!(outcome.message.contains("cat"));
    }

    #[test]
    fn test_finished_game_ignores_guesses() {
        let mut state = GameState::new("cat", 1);
        state = guess(state, "x").state;
        assert_eq!(state.status(), GameStatus::Lost);

        let outcome = guess(state.clone(), "c");
        assert!(outcome.unchanged);
        assert_eq!(outcome.state, state);
        assert!(outcome.message.contains("game is over"));
    }

    #[test]
    fn test_random_picks_from_list() {
        let words = vec!["gold".to_string()];
        let game = GameState::random(&words, 6).unwrap();
        assert_eq!(game.word, "gold");
        assert_eq!(game.max_fails, 6);

        assert!(GameState::random(&[], 6).is_err());
    }

    #[test]
    fn test_state_serde() {
        let state = guess(GameState::new("cat", 6), "c").state;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"word":"cat","guessed":["c"],"success":1,"fail":0,"max_fails":6}"#
        );
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

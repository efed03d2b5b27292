use crate::error::{AppError, Result};
use crate::models::{GameState, GameStatus};
use crate::server::pages;
use crate::services::{load_game, store_game};
use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    response::{Html, IntoResponse},
    Json,
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Shared state for the hangman game
#[derive(Clone)]
pub struct HangmanState {
    /// Cookie signing key
    pub key: Key,
    pub words: Arc<Vec<String>>,
    pub max_fails: u32,
}

impl FromRef<HangmanState> for Key {
    fn from_ref(state: &HangmanState) -> Key {
        state.key.clone()
    }
}

impl HangmanState {
    fn new_game(&self) -> Result<GameState> {
        GameState::random(&self.words, self.max_fails)
    }

    /// Game held by the session, or a fresh one stored into the jar
    fn current_game(&self, jar: SignedCookieJar) -> Result<(SignedCookieJar, GameState)> {
        if let Some(game) = load_game(&jar) {
            return Ok((jar, game));
        }
        debug!("No game in session, starting one");
        let game = self.new_game()?;
        let jar = store_game(jar, &game)?;
        Ok((jar, game))
    }
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub letter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    pub state: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub masked: String,
    pub guessed: Vec<String>,
    pub success: u32,
    pub fail: u32,
    pub max_fails: u32,
}

impl From<&GameState> for StateResponse {
    fn from(game: &GameState) -> Self {
        Self {
            masked: game.masked_word(),
            guessed: game.guessed_letters(),
            success: game.success,
            fail: game.fail,
            max_fails: game.max_fails,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
    #[serde(flatten)]
    pub state: StateResponse,
    pub correct: bool,
    pub message: String,
    pub won: bool,
    pub lost: bool,
}

/// GET / - Game page with the masked word
#[instrument(skip_all)]
pub async fn index_handler(
    State(state): State<HangmanState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse> {
    let (jar, game) = state.current_game(jar)?;
    let page = pages::hangman_page(&game.masked_word(), game.word_len(), game.max_fails);
    Ok((jar, Html(page)))
}

/// POST /new - Start a new game
#[instrument(skip_all)]
pub async fn new_game_handler(
    State(state): State<HangmanState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse> {
    let game = state.new_game()?;
    let jar = store_game(jar, &game)?;
    info!(word_len = game.word_len(), "New game started");

    Ok((
        jar,
        Json(NewGameResponse {
            state: true,
            message: "New game started".to_string(),
        }),
    ))
}

/// POST /guess - Submit one letter
///
/// Body: `{"letter": "e"}`. Anything other than a single alphabetic
/// character is answered with 400 and `{"error": ...}`.
#[instrument(skip_all)]
pub async fn guess_handler(
    State(state): State<HangmanState>,
    jar: SignedCookieJar,
    body: std::result::Result<Json<GuessRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = body.map_err(|e| {
        debug!(error = %e, "Rejected guess body");
        AppError::InvalidInput("Please submit a single letter".to_string())
    })?;
    let letter = request.letter.unwrap_or_default();

    let (jar, game) = state.current_game(jar)?;
    let outcome = game.apply_guess(&letter)?;
    let jar = store_game(jar, &outcome.state)?;

    let status = outcome.state.status();
    info!(
        letter = %outcome.letter,
        correct = outcome.correct,
        unchanged = outcome.unchanged,
        status = ?status,
        "Guess applied"
    );

    Ok((
        jar,
        Json(GuessResponse {
            state: StateResponse::from(&outcome.state),
            correct: outcome.correct,
            message: outcome.message,
            won: status == GameStatus::Won,
            lost: status == GameStatus::Lost,
        }),
    ))
}

/// GET /state - Current game as JSON
#[instrument(skip_all)]
pub async fn state_handler(
    State(state): State<HangmanState>,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse> {
    let (jar, game) = state.current_game(jar)?;
    Ok((jar, Json(StateResponse::from(&game))))
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok", "app": "hangman" }))
}

//! Signed-cookie persistence for the hangman game
//!
//! The whole `GameState` travels in one HMAC-signed cookie. There is no
//! server-side store; rotating the secret invalidates every session.

use crate::constants::SESSION_COOKIE;
use crate::error::{Error, Result};
use crate::models::GameState;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use tracing::debug;

/// Derive the 64-byte cookie signing key from an arbitrary secret
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Read the game from the jar
///
/// Missing, tampered and undecodable cookies all yield `None`.
pub fn load_game(jar: &SignedCookieJar) -> Option<GameState> {
    let cookie = jar.get(SESSION_COOKIE)?;
    match serde_json::from_str(cookie.value()) {
        Ok(game) => Some(game),
        Err(e) => {
            debug!(error = %e, "Discarding undecodable session cookie");
            None
        }
    }
}

/// Write the game into the jar
pub fn store_game(jar: SignedCookieJar, game: &GameState) -> Result<SignedCookieJar> {
    let value = serde_json::to_string(game)
        .map_err(|e| Error::Parse(format!("Failed to encode session: {}", e)))?;

    let cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok(jar.add(cookie))
}

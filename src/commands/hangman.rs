use crate::constants::WORDS;
use crate::server::{self, HangmanState};
use crate::services::signing_key;
use crate::utils::get_secret_key;
use std::sync::Arc;

pub async fn run(host: String, port: u16, max_fails: u32) {
    println!("🎯 Starting hangman on {}:{}", host, port);

    let (secret, is_default) = get_secret_key();
    if is_default {
        tracing::warn!("SECRET_KEY not set, using an insecure development key");
    }

    let state = HangmanState {
        key: signing_key(&secret),
        words: Arc::new(WORDS.iter().map(|w| w.to_string()).collect()),
        max_fails,
    };
    tracing::info!(words = state.words.len(), max_fails, "Hangman configured");

    let app = server::hangman_router(state);
    if let Err(e) = server::serve(app, &host, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}

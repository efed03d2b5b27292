use crate::constants::{DEFAULT_DATA_BASE_URL, DEFAULT_SECRET_KEY};

/// Get the session signing secret from environment variable or use the insecure default
///
/// Returns the secret and whether the default was used.
pub fn get_secret_key() -> (String, bool) {
    match std::env::var("SECRET_KEY") {
        Ok(key) if !key.is_empty() => (key, false),
        _ => (DEFAULT_SECRET_KEY.to_string(), true),
    }
}

/// Get market data base URL from environment variable or use default
pub fn get_data_base_url() -> String {
    std::env::var("GOLD_DATA_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_BASE_URL.to_string())
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `debug` selects the default level.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .try_init();
}

/// Escape text for embedding in HTML content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

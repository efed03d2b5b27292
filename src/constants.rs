//! Application Constants
//!
//! Fixed values shared by the chart viewer and the hangman game.

/// Yahoo Finance symbol for COMEX gold futures
pub const GOLD_SYMBOL: &str = "GC=F";

/// Default lookback range passed to the data source
pub const DEFAULT_PERIOD: &str = "1y";

/// Default bar interval passed to the data source
pub const DEFAULT_INTERVAL: &str = "1d";

/// Default base URL of the Yahoo chart API
pub const DEFAULT_DATA_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Upstream request timeout in seconds
pub const DATA_REQUEST_TIMEOUT_SECS: u64 = 30;

/// MACD spans (fast EMA, slow EMA, signal EMA)
pub mod macd {
    pub const FAST_SPAN: usize = 12;
    pub const SLOW_SPAN: usize = 26;
    pub const SIGNAL_SPAN: usize = 9;
}

/// Plotly.js bundle loaded by the chart fragment
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Default listen ports
pub const DEFAULT_CHART_PORT: u16 = 5000;
pub const DEFAULT_HANGMAN_PORT: u16 = 5001;

/// Wrong guesses allowed before the game is lost
pub const DEFAULT_MAX_FAILS: u32 = 6;

/// Name of the signed session cookie holding the game
pub const SESSION_COOKIE: &str = "hangman";

/// Used when SECRET_KEY is not set. Never use in production.
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-change-me";

/// Placeholder rendered for an unrevealed letter
pub const MASK_CHAR: char = '_';

/// Secret word pool
pub const WORDS: &[&str] = &[
    "python",
    "ferris",
    "gold",
    "futures",
    "hangman",
    "average",
    "signal",
    "histogram",
    "momentum",
    "bullion",
    "candlestick",
    "ice-cream",
    "market",
    "volatility",
    "exchange",
];

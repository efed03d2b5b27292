mod price_series;
pub mod game;
pub mod indicators;

pub use game::{GameState, GameStatus, GuessOutcome};
pub use indicators::{MacdParams, MacdRow};
pub use price_series::{PricePoint, PriceSeries};

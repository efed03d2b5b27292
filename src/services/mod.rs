pub mod chart_renderer;
pub mod price_source;
pub mod session;

pub use chart_renderer::{ChartRenderer, PlotlyRenderer};
pub use price_source::{parse_chart_response, PriceSource, YahooClient};
pub use session::{load_game, signing_key, store_game};

use crate::models::MacdParams;
use crate::server::{self, ChartState};
use crate::services::{ChartRenderer, PlotlyRenderer, PriceSource, YahooClient};
use crate::utils::get_data_base_url;
use std::sync::Arc;

pub async fn run(host: String, port: u16, offline: bool) {
    println!("📈 Starting gold chart viewer on {}:{}", host, port);

    let source: Option<Arc<dyn PriceSource>> = if offline {
        tracing::warn!("Offline mode: market data source disabled");
        None
    } else {
        match YahooClient::new(get_data_base_url()) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn PriceSource>),
            Err(e) => {
                // Pages will report the configuration error instead of a chart
                tracing::error!("Market data source unavailable: {}", e);
                None
            }
        }
    };
    let renderer: Option<Arc<dyn ChartRenderer>> = Some(Arc::new(PlotlyRenderer::default()));

    let state = ChartState {
        source,
        renderer,
        params: MacdParams::default(),
    };

    let app = server::chart_router(state);
    if let Err(e) = server::serve(app, &host, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}

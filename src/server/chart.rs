use crate::constants::{DEFAULT_INTERVAL, DEFAULT_PERIOD, GOLD_SYMBOL};
use crate::error::{AppError, Result};
use crate::models::indicators::compute_macd;
use crate::models::MacdParams;
use crate::server::pages;
use crate::services::{ChartRenderer, PriceSource};
use crate::utils::escape_html;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use axum_extra::extract::{Query, QueryRejection};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Shared state for the chart viewer
///
/// Either capability may be absent; requests then render a configuration error.
#[derive(Clone)]
pub struct ChartState {
    pub source: Option<Arc<dyn PriceSource>>,
    pub renderer: Option<Arc<dyn ChartRenderer>>,
    pub params: MacdParams,
}

/// Query parameters for the chart page
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Lookback range, passed through to the data source - default: 1y
    #[serde(default = "default_period")]
    pub period: String,

    /// Bar interval, passed through to the data source - default: 1d
    #[serde(default = "default_interval")]
    pub interval: String,
}

impl Default for ChartQuery {
    fn default() -> Self {
        Self {
            period: default_period(),
            interval: default_interval(),
        }
    }
}

fn default_period() -> String {
    DEFAULT_PERIOD.to_string()
}

fn default_interval() -> String {
    DEFAULT_INTERVAL.to_string()
}

/// GET / - Gold close and MACD chart
///
/// Examples:
/// - /
/// - /?period=6mo&interval=1d
/// - /?period=5d&interval=1h
///
/// Always answers 200; failures are shown inline on the page.
#[instrument(skip(state))]
pub async fn index_handler(
    State(state): State<ChartState>,
    query: std::result::Result<Query<ChartQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            debug!(error = %e, "Unreadable query string, using defaults");
            ChartQuery::default()
        }
    };

    let graph_div = match build_chart(&state, &query.period, &query.interval).await {
        Ok(div) => {
            info!(period = %query.period, interval = %query.interval, "Rendered chart");
            div
        }
        Err(e) => {
            warn!(period = %query.period, interval = %query.interval, error = %e, "Chart unavailable");
            format!("<div class='alert'>Error: {}</div>", escape_html(&e.to_string()))
        }
    };

    Html(pages::chart_page(&graph_div, &query.period, &query.interval))
}

/// Fetch, compute and render; any step may fail
async fn build_chart(state: &ChartState, period: &str, interval: &str) -> Result<String> {
    let source = state
        .source
        .as_ref()
        .ok_or_else(|| AppError::Config("market data source is not configured".to_string()))?;
    let renderer = state
        .renderer
        .as_ref()
        .ok_or_else(|| AppError::Config("chart renderer is not configured".to_string()))?;

    let series = source.fetch_series(GOLD_SYMBOL, period, interval).await?;
    if series.is_empty() {
        return Err(AppError::NoData(
            "no data returned for the requested period".to_string(),
        ));
    }

    let rows = compute_macd(&series, state.params);
    let title = format!(
        "Gold ({}) Close and MACD - period={} interval={}",
        GOLD_SYMBOL, period, interval
    );
    renderer.render(&rows, &title)
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok", "app": "chart" }))
}

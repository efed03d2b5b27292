//! Closing price acquisition from the Yahoo Finance chart API

use crate::constants::DATA_REQUEST_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::models::{PricePoint, PriceSeries};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Capability that yields a closing price series for a symbol
///
/// `period` and `interval` are passed through to the upstream untouched.
/// An empty series is a valid answer; callers decide whether that is an error.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_series(&self, symbol: &str, period: &str, interval: &str) -> Result<PriceSeries>;
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Client for `GET /v8/finance/chart/{symbol}`
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API origin, e.g. "https://query1.finance.yahoo.com"
    pub fn new(base_url: String) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Invalid base_url: must start with http:// or https://, got: '{}'",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DATA_REQUEST_TIMEOUT_SECS))
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)")
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %base_url, "Created YahooClient");

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl PriceSource for YahooClient {
    #[instrument(skip(self))]
    async fn fetch_series(&self, symbol: &str, period: &str, interval: &str) -> Result<PriceSeries> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        debug!(url, "Fetching chart data");

        let response = self
            .client
            .get(&url)
            .query(&[("range", period), ("interval", interval)])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to data source failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            // Yahoo reports bad ranges/intervals with an error envelope and a 4xx status
            if let Ok(envelope) = serde_json::from_str::<ChartEnvelope>(&body) {
                if let Some(err) = envelope.chart.error {
                    return Err(Error::Network(format!(
                        "Data source error: {} - {}",
                        err.code, err.description
                    )));
                }
            }
            warn!(%status, "Data source returned error status");
            return Err(Error::Network(format!("Data source returned status {}", status)));
        }

        let series = parse_chart_response(&body)?;
        info!(symbol, period, interval, points = series.len(), "Fetched price series");
        Ok(series)
    }
}

/// Parse a chart API payload into a closing price series
///
/// Bars with a missing close are dropped.
pub fn parse_chart_response(body: &str) -> Result<PriceSeries> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("Failed to parse chart response: {}", e)))?;

    if let Some(err) = envelope.chart.error {
        return Err(Error::Network(format!(
            "Data source error: {} - {}",
            err.code, err.description
        )));
    }

    let Some(data) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(PriceSeries::default());
    };
    let Some(quote) = data.indicators.quote.into_iter().next() else {
        return Ok(PriceSeries::default());
    };

    let points = data
        .timestamp
        .iter()
        .zip(quote.close)
        .filter_map(|(&ts, close)| {
            let close = close?;
            let time = DateTime::from_timestamp(ts, 0)?;
            Some(PricePoint { time, close })
        })
        .collect();

    Ok(PriceSeries::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_response() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "GC=F"},
                    "timestamp": [1704085200, 1704171600, 1704258000],
                    "indicators": {"quote": [{"close": [2064.4, null, 2042.3]}]}
                }],
                "error": null
            }
        }"#;

        let series = parse_chart_response(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![2064.4, 2042.3]);
        assert_eq!(series.points()[0].time.timestamp(), 1704085200);
    }

    #[test]
    fn test_parse_chart_response_without_bars() {
        let body = r#"{"chart": {"result": [{"meta": {}, "indicators": {"quote": [{}]}}], "error": null}}"#;
        let series = parse_chart_response(body).unwrap();
        assert!(series.is_empty());

        let body = r#"{"chart": {"result": null, "error": null}}"#;
        assert!(parse_chart_response(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_chart_response_error_payload() {
        let body = r#"{"chart": {"result": null, "error": {"code": "Unprocessable Entity", "description": "Invalid input - interval=7x is not supported"}}}"#;
        let err = parse_chart_response(body).unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert!(err.to_string().contains("interval=7x"));
    }

    #[test]
    fn test_parse_chart_response_malformed() {
        let err = parse_chart_response("<html>blocked</html>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        assert!(YahooClient::new("ftp://example.com".to_string()).is_err());
        assert!(YahooClient::new("https://query1.finance.yahoo.com/".to_string()).is_ok());
    }
}

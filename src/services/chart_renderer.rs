//! Price/MACD chart rendering as an embeddable Plotly.js fragment

use crate::constants::PLOTLY_CDN_URL;
use crate::error::{Error, Result};
use crate::models::MacdRow;
use chrono::Timelike;
use serde_json::{json, Value};

/// Capability that turns indicator rows into an HTML fragment
pub trait ChartRenderer: Send + Sync {
    fn render(&self, rows: &[MacdRow], title: &str) -> Result<String>;
}

const CHART_DIV_ID: &str = "gold-macd-chart";
const CHART_HEIGHT: u32 = 700;
/// Price panel and indicator panel share of the plot height
const ROW_HEIGHTS: [f64; 2] = [0.7, 0.3];
const VERTICAL_SPACING: f64 = 0.06;

/// Two-panel chart: close price on top, MACD/signal/histogram below
pub struct PlotlyRenderer {
    script_url: String,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self::new(PLOTLY_CDN_URL.to_string())
    }
}

impl PlotlyRenderer {
    pub fn new(script_url: String) -> Self {
        Self { script_url }
    }

    /// Build the Plotly figure (`data` and `layout`)
    pub fn figure(&self, rows: &[MacdRow], title: &str) -> (Value, Value) {
        let x = time_labels(rows);
        let column = |f: fn(&MacdRow) -> f64| rows.iter().map(f).collect::<Vec<f64>>();

        let data = json!([
            {
                "type": "scatter",
                "mode": "lines",
                "name": "Gold Close",
                "x": x,
                "y": column(|r| r.close),
                "line": {"color": "gold"},
                "xaxis": "x",
                "yaxis": "y",
            },
            {
                "type": "scatter",
                "mode": "lines",
                "name": "MACD",
                "x": x,
                "y": column(|r| r.macd),
                "line": {"color": "orange"},
                "xaxis": "x2",
                "yaxis": "y2",
            },
            {
                "type": "scatter",
                "mode": "lines",
                "name": "Signal",
                "x": x,
                "y": column(|r| r.signal),
                "line": {"color": "blue"},
                "xaxis": "x2",
                "yaxis": "y2",
            },
            {
                "type": "bar",
                "name": "Histogram",
                "x": x,
                "y": column(|r| r.hist),
                "marker": {"color": "green"},
                "xaxis": "x2",
                "yaxis": "y2",
            },
        ]);

        let usable = 1.0 - VERTICAL_SPACING;
        let lower_top = usable * ROW_HEIGHTS[1];
        let upper_bottom = lower_top + VERTICAL_SPACING;

        let layout = json!({
            "title": {"text": title},
            "height": CHART_HEIGHT,
            "xaxis": {"anchor": "y", "matches": "x2", "showticklabels": false},
            "xaxis2": {"anchor": "y2"},
            "yaxis": {"anchor": "x", "domain": [upper_bottom, 1.0]},
            "yaxis2": {"anchor": "x2", "domain": [0.0, lower_top]},
        });

        (data, layout)
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render(&self, rows: &[MacdRow], title: &str) -> Result<String> {
        if rows.is_empty() {
            return Err(Error::NoData("nothing to plot".to_string()));
        }

        let (data, layout) = self.figure(rows, title);
        let data = script_json(&data)?;
        let layout = script_json(&layout)?;

        Ok(format!(
            r#"<div id="{id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>
<script src="{src}" charset="utf-8"></script>
<script type="text/javascript">
Plotly.newPlot("{id}", {data}, {layout}, {{"responsive": true}});
</script>"#,
            id = CHART_DIV_ID,
            height = CHART_HEIGHT,
            src = self.script_url,
            data = data,
            layout = layout,
        ))
    }
}

/// Daily bars get date labels, intraday bars keep the clock time
fn time_labels(rows: &[MacdRow]) -> Vec<String> {
    let intraday = rows
        .iter()
        .any(|r| r.time.hour() != 0 || r.time.minute() != 0 || r.time.second() != 0);
    let fmt = if intraday { "%Y-%m-%d %H:%M:%S" } else { "%Y-%m-%d" };
    rows.iter().map(|r| r.time.format(fmt).to_string()).collect()
}

/// Serialize for inline `<script>` use; `</` cannot appear verbatim
fn script_json(value: &Value) -> Result<String> {
    let text = serde_json::to_string(value)
        .map_err(|e| Error::Parse(format!("Failed to serialize chart figure: {}", e)))?;
    Ok(text.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(day: u32, hour: u32, close: f64) -> MacdRow {
        MacdRow {
            time: Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap(),
            close,
            ema_fast: close,
            ema_slow: close,
            macd: 0.5,
            signal: 0.25,
            hist: 0.25,
        }
    }

    #[test]
    fn test_render_contains_traces() {
        let rows = vec![row(1, 0, 2300.0), row(2, 0, 2310.0)];
        let html = PlotlyRenderer::default().render(&rows, "Gold").unwrap();

        for name in ["Gold Close", "MACD", "Signal", "Histogram"] {
            assert!(html.contains(name), "missing trace {}", name);
        }
        assert!(html.contains(PLOTLY_CDN_URL));
        assert!(html.contains("2024-05-01"));
        assert!(html.contains("\"height\":700"));
    }

    #[test]
    fn test_render_empty_rows() {
        let err = PlotlyRenderer::default().render(&[], "Gold").unwrap_err();
        assert!(matches!(err, Error::NoData(_)));
    }

    #[test]
    fn test_title_cannot_close_script() {
        let rows = vec![row(1, 0, 2300.0)];
        let html = PlotlyRenderer::default()
            .render(&rows, "period=</script><b>x</b>")
            .unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn test_figure_layout_domains() {
        let (data, layout) = PlotlyRenderer::default().figure(&[row(1, 0, 1.0)], "t");

        assert_eq!(data.as_array().unwrap().len(), 4);
        assert_eq!(data[3]["type"], "bar");
        let upper = layout["yaxis"]["domain"][0].as_f64().unwrap();
        let lower = layout["yaxis2"]["domain"][1].as_f64().unwrap();
        assert!(upper > lower);
        assert!((upper - lower - VERTICAL_SPACING).abs() < 1e-9);
    }

    #[test]
    fn test_intraday_labels() {
        let labels = time_labels(&[row(1, 0, 1.0), row(1, 13, 1.0)]);
        assert_eq!(labels, vec!["2024-05-01 00:00:00", "2024-05-01 13:00:00"]);
    }
}

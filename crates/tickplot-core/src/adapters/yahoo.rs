use serde::Deserialize;
use tracing::debug;

use crate::{DatasetError, RawRecord, UtcDateTime};

/// Reads a Yahoo-style chart document into raw records.
///
/// Expected shape:
/// `{"chart": {"result": [{"timestamp": [..], "indicators": {"quote": [{"open": [..], ...}]}}]}}`.
/// Price and volume arrays run parallel to `timestamp`; null or missing
/// slots become `None` and are left for series preparation to drop.
pub fn parse_chart_json(body: &str) -> Result<Vec<RawRecord>, DatasetError> {
    let response: YahooChartResponse = serde_json::from_str(body)?;

    if let Some(error) = response.chart.error {
        return Err(DatasetError::Upstream {
            message: error.message(),
        });
    }

    let result = response
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(DatasetError::MissingResult)?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or(DatasetError::MissingQuote)?;

    let records = result
        .timestamp
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, &seconds)| -> Result<RawRecord, DatasetError> {
            Ok(RawRecord {
                date: UtcDateTime::from_unix_seconds(seconds)?,
                open: slot(&quote.open, i),
                high: slot(&quote.high, i),
                low: slot(&quote.low, i),
                close: slot(&quote.close, i),
                volume: slot(&quote.volume, i).and_then(share_count),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(records = records.len(), "parsed chart dataset");
    Ok(records)
}

/// Volume may arrive as any JSON number. Negative and out-of-range values
/// read as missing; fractions round to whole shares.
fn share_count(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value.round() as u64)
}

fn slot<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl YahooChartError {
    fn message(self) -> String {
        match (self.code, self.description) {
            (Some(code), Some(description)) => format!("{code}: {description}"),
            (Some(text), None) | (None, Some(text)) => text,
            (None, None) => String::from("unknown error"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    #[serde(default)]
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

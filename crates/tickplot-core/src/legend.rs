use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::PriceRecord;

/// One `field: text` line of the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub field: &'static str,
    pub text: String,
}

impl Display for LegendEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.text)
    }
}

/// Legend lines for the focused record, in record field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Legend(pub Vec<LegendEntry>);

impl Legend {
    pub fn entries(&self) -> &[LegendEntry] {
        &self.0
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.text.as_str())
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

/// Formats `record` for display: calendar date, prices to two decimals and
/// volume as-is (`null` when absent).
///
/// Fields follow the record's natural order: date, high, low, open, close,
/// volume.
pub fn format_legend(record: &PriceRecord) -> Legend {
    let price = |field: &'static str, value: f64| LegendEntry {
        field,
        text: format_price(value),
    };

    Legend(vec![
        LegendEntry {
            field: "date",
            text: record.date.format_calendar_date(),
        },
        price("high", record.high),
        price("low", record.low),
        price("open", record.open),
        price("close", record.close),
        LegendEntry {
            field: "volume",
            text: record
                .volume
                .map_or_else(|| String::from("null"), |volume| volume.to_string()),
        },
    ])
}

/// Two-decimal rendering where an exact halfway value rounds away from zero.
///
/// `{:.2}` already rounds on the exact binary value, but it breaks ties to
/// even. A tie at the second decimal is only possible when the value is an
/// odd multiple of 1/8, and those are the cases handled here.
fn format_price(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie {
        return format!("{value:.2}");
    }

    let cents = (value.abs() * 100.0).round();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{:.0}.{:02.0}", (cents / 100.0).trunc(), cents % 100.0)
}

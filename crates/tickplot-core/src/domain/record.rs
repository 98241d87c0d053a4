use serde::{Deserialize, Serialize};

use crate::UtcDateTime;

/// One trading day as delivered by a dataset loader. Any price may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: UtcDateTime,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

impl RawRecord {
    /// Returns the validated record when all four prices are present and
    /// non-zero. Zero and NaN count as missing.
    pub fn validate(&self) -> Option<PriceRecord> {
        Some(PriceRecord {
            date: self.date,
            high: present(self.high)?,
            low: present(self.low)?,
            open: present(self.open)?,
            close: present(self.close)?,
            volume: self.volume,
        })
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Canonical OHLCV record for one trading day.
///
/// Field order is the display order used by the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: UtcDateTime,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

impl PriceRecord {
    /// Traded volume, treating zero as "no trading data".
    pub fn traded_volume(&self) -> Option<u64> {
        self.volume.filter(|v| *v != 0)
    }
}

/// Moving-average value aligned by index with the prepared series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: UtcDateTime,
    pub average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(open: Option<f64>, high: Option<f64>, low: Option<f64>, close: Option<f64>) -> RawRecord {
        RawRecord {
            date: UtcDateTime::from_unix_seconds(1_514_903_400).expect("valid"),
            open,
            high,
            low,
            close,
            volume: Some(100),
        }
    }

    #[test]
    fn complete_record_validates() {
        let record = raw(Some(1.0), Some(2.0), Some(0.5), Some(1.5))
            .validate()
            .expect("complete record");
        assert_eq!(record.close, 1.5);
        assert_eq!(record.volume, Some(100));
    }

    #[test]
    fn missing_or_zero_price_is_invalid() {
        assert!(raw(None, Some(2.0), Some(0.5), Some(1.5)).validate().is_none());
        assert!(raw(Some(1.0), Some(2.0), Some(0.0), Some(1.5)).validate().is_none());
        assert!(raw(Some(1.0), Some(f64::NAN), Some(0.5), Some(1.5))
            .validate()
            .is_none());
    }

    #[test]
    fn zero_volume_is_not_traded() {
        let mut record = raw(Some(1.0), Some(2.0), Some(0.5), Some(1.5))
            .validate()
            .expect("complete record");
        record.volume = Some(0);
        assert_eq!(record.traded_volume(), None);
    }
}

use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

use crate::{PriceRecord, RawRecord, UtcDateTime};

/// Valid records on or after `start_date`, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesWindow {
    pub start_date: Date,
    pub records: Vec<PriceRecord>,
}

impl SeriesWindow {
    pub fn empty(start_date: Date) -> Self {
        Self {
            start_date,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Subsequence of records with traded volume. Later stages (volume scale
    /// and bar tones) see this narrower view.
    pub fn volume_records(&self) -> Vec<PriceRecord> {
        self.records
            .iter()
            .filter(|record| record.traded_volume().is_some())
            .copied()
            .collect()
    }
}

/// Drops records with missing prices, then records dated before `start_date`.
///
/// Input order is kept as is; the loader is expected to deliver ascending dates.
pub fn prepare_series(raw: &[RawRecord], start_date: Date) -> SeriesWindow {
    let valid = raw.iter().filter_map(RawRecord::validate).collect::<Vec<_>>();
    let dropped_invalid = raw.len() - valid.len();

    let cutoff = UtcDateTime::start_of_day(start_date);
    let records = valid
        .into_iter()
        .filter(|record| record.date >= cutoff)
        .collect::<Vec<_>>();

    debug!(
        input = raw.len(),
        dropped_invalid,
        dropped_before_start = raw.len() - dropped_invalid - records.len(),
        kept = records.len(),
        %start_date,
        "prepared series"
    );

    SeriesWindow {
        start_date,
        records,
    }
}

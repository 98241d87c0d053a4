use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PriceRecord, SeriesWindow, UtcDateTime, Viewport};

/// Padding below the lowest close on the price axis, in price units.
pub const PRICE_FLOOR_PADDING: f64 = 5.0;

/// Share of the plot height the volume bars may grow into, from the bottom.
pub const VOLUME_BAND: f64 = 0.25;

/// Affine map from a data domain to a pixel range.
///
/// A zero-width domain maps every value to the middle of the range, and a
/// zero-width range inverts to the middle of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        interpolate(self.domain, self.range, value)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        interpolate(self.range, self.domain, pixel)
    }
}

fn interpolate(from: (f64, f64), to: (f64, f64), value: f64) -> f64 {
    let span = from.1 - from.0;
    let t = if span == 0.0 {
        0.5
    } else {
        (value - from.0) / span
    };
    to.0 + t * (to.1 - to.0)
}

/// Linear scale over UNIX seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale(LinearScale);

impl TimeScale {
    pub fn new(start: UtcDateTime, end: UtcDateTime, width: f64) -> Self {
        Self(LinearScale::new(
            (start.unix_seconds_f64(), end.unix_seconds_f64()),
            (0.0, width),
        ))
    }

    /// Scale for a series with no dates at all.
    pub const fn degenerate(width: f64) -> Self {
        Self(LinearScale::new((0.0, 0.0), (0.0, width)))
    }

    pub fn apply(&self, date: UtcDateTime) -> f64 {
        self.0.apply(date.unix_seconds_f64())
    }

    /// Date under a pixel column. `None` when the result is not a representable
    /// timestamp.
    pub fn invert(&self, pixel: f64) -> Option<UtcDateTime> {
        UtcDateTime::from_unix_seconds_f64(self.0.invert(pixel))
    }

    pub fn linear(&self) -> &LinearScale {
        &self.0
    }
}

/// The three axes of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub time: TimeScale,
    pub price: LinearScale,
    /// `None` when no record in the series has traded volume.
    pub volume: Option<LinearScale>,
}

/// Builds time, price and volume scales for `series` drawn into `viewport`.
pub fn build_scales(series: &SeriesWindow, viewport: Viewport) -> ChartScales {
    let records = series.records();

    let time = extent(records.iter().map(|record| record.date))
        .map(|(start, end)| TimeScale::new(start, end, viewport.width))
        .unwrap_or_else(|| TimeScale::degenerate(viewport.width));

    let price_domain = extent(records.iter().map(|record| record.close))
        .map(|(min, max)| (min - PRICE_FLOOR_PADDING, max))
        .unwrap_or((0.0, 0.0));
    let price = LinearScale::new(price_domain, (viewport.height, 0.0));

    let volume = extent(records.iter().filter_map(PriceRecord::traded_volume)).map(|(min, max)| {
        LinearScale::new(
            (min as f64, max as f64),
            (viewport.height, viewport.height * (1.0 - VOLUME_BAND)),
        )
    });

    debug!(
        records = records.len(),
        price_domain = ?price.domain,
        has_volume = volume.is_some(),
        "built chart scales"
    );

    ChartScales {
        time,
        price,
        volume,
    }
}

/// Smallest and largest item, `None` for an empty iterator.
fn extent<T, I>(values: I) -> Option<(T, T)>
where
    T: Copy + PartialOrd,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(None, |acc, value| {
        Some(match acc {
            None => (value, value),
            Some((min, max)) => (
                if value < min { value } else { min },
                if value > max { value } else { max },
            ),
        })
    })
}

use tracing::trace;

use crate::{MovingAveragePoint, PriceRecord};

/// Trailing simple moving average of closing prices.
///
/// The window at index `i` spans `[max(0, i - prior_points), i]`, so the first
/// `prior_points` outputs average over fewer values instead of being omitted.
/// The output is aligned by index with `records`.
pub fn moving_average(records: &[PriceRecord], prior_points: usize) -> Vec<MovingAveragePoint> {
    let mut sum = 0.0_f64;

    let points = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            sum += record.close;
            if index > prior_points {
                sum -= records[index - prior_points - 1].close;
            }
            let window_len = index.min(prior_points) + 1;

            MovingAveragePoint {
                date: record.date,
                average: sum / window_len as f64,
            }
        })
        .collect::<Vec<_>>();

    trace!(points = points.len(), prior_points, "computed moving average");
    points
}

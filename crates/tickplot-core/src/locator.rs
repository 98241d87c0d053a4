use crate::{PriceRecord, UtcDateTime};

/// Index of the first record dated at or after `query` (left bisection).
///
/// `records` must be ascending by date.
pub fn bisect_left(records: &[PriceRecord], query: UtcDateTime) -> usize {
    records.partition_point(|record| record.date < query)
}

/// Record closest in time to `query`.
///
/// Queries before the first or after the last date clamp to that endpoint.
/// When both neighbours are equally distant the later one wins. Returns
/// `None` only for an empty series.
pub fn locate(records: &[PriceRecord], query: UtcDateTime) -> Option<&PriceRecord> {
    let index = bisect_left(records, query);

    if index == 0 {
        return records.first();
    }
    if index == records.len() {
        return records.last();
    }

    let before = &records[index - 1];
    let after = &records[index];
    if query.distance(before.date) >= query.distance(after.date) {
        Some(after)
    } else {
        Some(before)
    }
}

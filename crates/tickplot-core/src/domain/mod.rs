//! # Domain Models
//!
//! Canonical record types for the chart pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RawRecord`] | Loader output, prices may be missing |
//! | [`PriceRecord`] | Validated OHLCV record |
//! | [`MovingAveragePoint`] | SMA value aligned with a record |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Raw records become price records only through [`RawRecord::validate`];
//! a record with any missing price never reaches the scales or the locator.

mod record;
mod timestamp;

pub use record::{MovingAveragePoint, PriceRecord, RawRecord};
pub use timestamp::{parse_date, UtcDateTime};

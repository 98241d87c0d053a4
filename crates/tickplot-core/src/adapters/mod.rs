//! Dataset loaders that turn stored chart documents into [`RawRecord`](crate::RawRecord)s.

pub mod yahoo;

pub use yahoo::parse_chart_json;

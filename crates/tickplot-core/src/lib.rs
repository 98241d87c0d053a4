//! Core contracts for tickplot.
//!
//! This crate contains:
//! - Canonical OHLCV records and validation
//! - Series preparation, moving average, scales and volume tones
//! - Nearest-point lookup, focus state and legend formatting
//! - The render pass that ties them together
//! - Chart dataset adapters and the output envelope

pub mod adapters;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod focus;
pub mod legend;
pub mod locator;
pub mod moving_average;
pub mod render;
pub mod scale;
pub mod series;
pub mod volume;

pub use adapters::parse_chart_json;
pub use config::{ChartConfig, Margin, Viewport};
pub use domain::{parse_date, MovingAveragePoint, PriceRecord, RawRecord, UtcDateTime};
pub use envelope::{Envelope, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, DatasetError, ValidationError};
pub use focus::{Crosshair, FocusState};
pub use legend::{format_legend, Legend, LegendEntry};
pub use locator::{bisect_left, locate};
pub use moving_average::moving_average;
pub use render::{PlotPoint, RenderFrame};
pub use scale::{build_scales, ChartScales, LinearScale, TimeScale};
pub use series::{prepare_series, SeriesWindow};
pub use volume::{colorize, volume_bars, BarTone, VolumeBar};

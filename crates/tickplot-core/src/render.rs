//! One render pass: raw records in, plot-ready geometry out.
//!
//! The pass never fails on data. An empty or fully filtered dataset produces
//! an empty frame with degenerate scales; only an invalid [`ChartConfig`] is
//! rejected.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::adapters::yahoo::parse_chart_json;
use crate::moving_average::moving_average;
use crate::scale::build_scales;
use crate::series::prepare_series;
use crate::volume::volume_bars;
use crate::{
    ChartConfig, ChartScales, CoreError, MovingAveragePoint, RawRecord, SeriesWindow,
    ValidationError, Viewport, VolumeBar,
};

/// A point in plot-area pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything the drawing layer needs for one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub series: SeriesWindow,
    pub moving_average: Vec<MovingAveragePoint>,
    pub scales: ChartScales,
    /// Close price per record.
    pub price_path: Vec<PlotPoint>,
    /// Moving average per record, same x positions as `price_path`.
    pub average_path: Vec<PlotPoint>,
    pub volume_bars: Vec<VolumeBar>,
}

impl RenderFrame {
    pub fn build(raw: &[RawRecord], config: &ChartConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let viewport = config.viewport;

        let series = prepare_series(raw, config.start_date);
        let moving_average = moving_average(series.records(), config.prior_points);
        let scales = build_scales(&series, viewport);

        let price_path = series
            .records()
            .iter()
            .map(|record| PlotPoint {
                x: scales.time.apply(record.date),
                y: scales.price.apply(record.close),
            })
            .collect::<Vec<_>>();
        let average_path = moving_average
            .iter()
            .map(|point| PlotPoint {
                x: scales.time.apply(point.date),
                y: scales.price.apply(point.average),
            })
            .collect::<Vec<_>>();
        let volume_bars = volume_bars(&series.volume_records(), &scales, viewport.height);

        info!(
            records = series.len(),
            volume_bars = volume_bars.len(),
            prior_points = config.prior_points,
            "render pass complete"
        );

        Ok(Self {
            viewport,
            series,
            moving_average,
            scales,
            price_path,
            average_path,
            volume_bars,
        })
    }

    /// Parses a chart dataset and renders it in one step.
    pub fn from_chart_json(body: &str, config: &ChartConfig) -> Result<Self, CoreError> {
        let raw = parse_chart_json(body)?;
        Ok(Self::build(&raw, config)?)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

use serde::Serialize;
use tracing::trace;

use crate::legend::{format_legend, Legend};
use crate::locator::locate;
use crate::{ChartScales, PriceRecord, RenderFrame, UtcDateTime, Viewport};

/// Record under the pointer, if any.
///
/// Owned by whoever dispatches pointer events. Every move replaces the
/// focused record; leaving the plot clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusState {
    current: Option<PriceRecord>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focuses the record nearest `query`. Focus is cleared for an empty series.
    pub fn pointer_move(&mut self, records: &[PriceRecord], query: UtcDateTime) -> Option<&PriceRecord> {
        self.current = locate(records, query).copied();
        trace!(%query, focused = self.current.is_some(), "pointer moved");
        self.current.as_ref()
    }

    /// Inverts a plot-area x coordinate through the frame's time scale, then
    /// focuses the nearest record. A pixel too far out to be a representable
    /// date clamps to the first or last record; NaN leaves focus untouched.
    pub fn pointer_move_px(&mut self, frame: &RenderFrame, x: f64) -> Option<&PriceRecord> {
        if x.is_nan() {
            return self.current.as_ref();
        }

        let records = frame.series.records();
        let seconds = frame.scales.time.linear().invert(x);
        match UtcDateTime::from_unix_seconds_f64(seconds) {
            Some(query) => self.pointer_move(records, query),
            None => {
                let endpoint = if seconds < 0.0 {
                    records.first()
                } else {
                    records.last()
                };
                self.current = endpoint.copied();
                trace!(x, focused = self.current.is_some(), "pointer clamped to endpoint");
                self.current.as_ref()
            }
        }
    }

    pub fn pointer_leave(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&PriceRecord> {
        self.current.as_ref()
    }

    /// Legend for the focused record, rebuilt on every call.
    pub fn legend(&self) -> Option<Legend> {
        self.current.as_ref().map(format_legend)
    }
}

/// Crosshair geometry relative to the plot area.
///
/// The marker sits on the focused close; the horizontal line runs right to
/// the price axis and the vertical line runs down to the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crosshair {
    pub x: f64,
    pub y: f64,
    pub horizontal_length: f64,
    pub vertical_length: f64,
}

impl Crosshair {
    pub fn for_record(record: &PriceRecord, scales: &ChartScales, viewport: Viewport) -> Self {
        let x = scales.time.apply(record.date);
        let y = scales.price.apply(record.close);
        Self {
            x,
            y,
            horizontal_length: viewport.width - x,
            vertical_length: viewport.height - y,
        }
    }
}

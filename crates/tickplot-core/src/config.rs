use serde::{Deserialize, Serialize};
use time::macros::date;
use time::Date;

use crate::ValidationError;

/// Plot area in pixels, excluding margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, ValidationError> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Plot area left inside an outer canvas once margins are removed.
    pub fn inner(outer_width: u32, outer_height: u32, margin: Margin) -> Result<Self, ValidationError> {
        let width = f64::from(outer_width) - margin.left - margin.right;
        let height = f64::from(outer_height) - margin.top - margin.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ValidationError::MarginTooLarge {
                outer_width,
                outer_height,
            });
        }
        Self::new(width, height)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)
    }
}

fn validate_dimension(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}

/// Space reserved around the plot area for axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Everything a render pass needs besides the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Records before this date (UTC midnight) are not plotted.
    pub start_date: Date,
    /// Prior points averaged together with the current one; 49 gives a 50-day SMA.
    pub prior_points: usize,
    pub viewport: Viewport,
    pub margin: Margin,
}

impl ChartConfig {
    pub const DEFAULT_START_DATE: Date = date!(2018 - 01 - 01);
    pub const DEFAULT_PRIOR_POINTS: usize = 49;
    pub const DEFAULT_OUTER_WIDTH: u32 = 1000;
    pub const DEFAULT_OUTER_HEIGHT: u32 = 600;

    pub fn new(
        start_date: Date,
        prior_points: usize,
        outer_width: u32,
        outer_height: u32,
        margin: Margin,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            start_date,
            prior_points,
            viewport: Viewport::inner(outer_width, outer_height, margin)?,
            margin,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.viewport.validate()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        let margin = Margin::default();
        Self {
            start_date: Self::DEFAULT_START_DATE,
            prior_points: Self::DEFAULT_PRIOR_POINTS,
            viewport: Viewport {
                width: f64::from(Self::DEFAULT_OUTER_WIDTH) - margin.left - margin.right,
                height: f64::from(Self::DEFAULT_OUTER_HEIGHT) - margin.top - margin.bottom,
            },
            margin,
        }
    }
}

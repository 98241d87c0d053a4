use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{ChartScales, PriceRecord, UtcDateTime};

/// Fill tone of one volume bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    Up,
    Down,
}

impl BarTone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Up => "#03a678",
            Self::Down => "#c0392b",
        }
    }
}

impl Display for BarTone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Close-over-close tone for each bar of the volume view.
///
/// The first bar is `Up`. A later bar is `Down` only when the previous bar's
/// close is strictly greater than its own. "Previous" means the previous entry
/// of `volume_records`, not the previous trading day.
pub fn colorize(volume_records: &[PriceRecord]) -> Vec<BarTone> {
    let first = volume_records.first().map(|_| BarTone::Up);
    let rest = volume_records.windows(2).map(|pair| {
        if pair[0].close > pair[1].close {
            BarTone::Down
        } else {
            BarTone::Up
        }
    });
    first.into_iter().chain(rest).collect()
}

/// One-pixel-wide volume bar growing up from the bottom of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub date: UtcDateTime,
    pub volume: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tone: BarTone,
    /// CSS colour for `tone`.
    pub fill: String,
}

/// Bar geometry for the volume view. Empty when the volume scale was omitted.
pub fn volume_bars(volume_records: &[PriceRecord], scales: &ChartScales, plot_height: f64) -> Vec<VolumeBar> {
    let Some(volume_scale) = scales.volume else {
        return Vec::new();
    };

    volume_records
        .iter()
        .zip(colorize(volume_records))
        .filter_map(|(record, tone)| {
            let volume = record.traded_volume()?;
            let y = volume_scale.apply(volume as f64);
            Some(VolumeBar {
                date: record.date,
                volume,
                x: scales.time.apply(record.date),
                y,
                width: 1.0,
                height: plot_height - y,
                tone,
                fill: tone.color().to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinearScale, TimeScale};

    fn records(rows: &[(f64, u64)]) -> Vec<PriceRecord> {
        rows.iter()
            .enumerate()
            .map(|(day, (close, volume))| PriceRecord {
                date: UtcDateTime::from_unix_seconds(1_514_764_800 + day as i64 * 86_400)
                    .expect("valid"),
                open: *close,
                high: *close,
                low: *close,
                close: *close,
                volume: Some(*volume),
            })
            .collect()
    }

    #[test]
    fn first_bar_is_up_then_close_over_close() {
        let tones = colorize(&records(&[(10.0, 1), (8.0, 1), (12.0, 1)]));
        assert_eq!(tones, vec![BarTone::Up, BarTone::Down, BarTone::Up]);
    }

    #[test]
    fn unchanged_close_is_up() {
        let tones = colorize(&records(&[(10.0, 1), (10.0, 1)]));
        assert_eq!(tones, vec![BarTone::Up, BarTone::Up]);
    }

    #[test]
    fn empty_view_has_no_tones() {
        assert!(colorize(&[]).is_empty());
    }

    #[test]
    fn tone_colors_match_palette() {
        assert_eq!(BarTone::Up.color(), "#03a678");
        assert_eq!(BarTone::Down.color(), "#c0392b");
        assert_eq!(BarTone::Down.to_string(), "down");
    }

    #[test]
    fn bars_grow_from_plot_bottom() {
        let view = records(&[(10.0, 100), (9.0, 300)]);
        let scales = ChartScales {
            time: TimeScale::new(view[0].date, view[1].date, 100.0),
            price: LinearScale::new((4.0, 10.0), (400.0, 0.0)),
            volume: Some(LinearScale::new((100.0, 300.0), (400.0, 300.0))),
        };

        let bars = volume_bars(&view, &scales, 400.0);

        assert_eq!(bars.len(), 2);
        assert_eq!((bars[0].x, bars[0].y, bars[0].height), (0.0, 400.0, 0.0));
        assert_eq!((bars[1].x, bars[1].y, bars[1].height), (100.0, 300.0, 100.0));
        assert_eq!(bars[1].tone, BarTone::Down);
        assert_eq!(bars[0].fill, "#03a678");
        assert_eq!(bars[1].fill, "#c0392b");
        assert_eq!(bars[1].width, 1.0);
    }

    #[test]
    fn no_volume_scale_means_no_bars() {
        let view = records(&[(10.0, 100)]);
        let scales = ChartScales {
            time: TimeScale::degenerate(100.0),
            price: LinearScale::new((0.0, 0.0), (400.0, 0.0)),
            volume: None,
        };
        assert!(volume_bars(&view, &scales, 400.0).is_empty());
    }
}

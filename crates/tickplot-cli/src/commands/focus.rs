use serde::Serialize;
use tickplot_core::{parse_date, Crosshair, FocusState, PriceRecord, UtcDateTime};

use crate::cli::FocusArgs;
use crate::error::CliError;

use super::{frame_warnings, load_frame, CommandResult};

#[derive(Debug, Serialize)]
struct FocusReport {
    query: Option<UtcDateTime>,
    record: Option<PriceRecord>,
    legend: Vec<String>,
    crosshair: Option<Crosshair>,
}

pub fn run(args: &FocusArgs) -> Result<CommandResult, CliError> {
    let frame = load_frame(&args.chart)?;
    let mut focus = FocusState::new();

    let query = match (&args.at, args.x) {
        (Some(at), _) => {
            let query = parse_query(at)?;
            focus.pointer_move(frame.series.records(), query);
            Some(query)
        }
        (None, Some(x)) => {
            focus.pointer_move_px(&frame, x);
            frame.scales.time.invert(x)
        }
        (None, None) => None,
    };

    let report = FocusReport {
        query,
        record: focus.current().copied(),
        legend: focus.legend().map(|legend| legend.lines()).unwrap_or_default(),
        crosshair: focus
            .current()
            .map(|record| Crosshair::for_record(record, &frame.scales, frame.viewport)),
    };

    let mut result = CommandResult::ok(serde_json::to_value(&report)?)
        .with_warnings(frame_warnings(&frame));
    if report.record.is_none() {
        result = result.with_warning("no record under the pointer");
    }
    Ok(result)
}

/// Accepts a bare `YYYY-MM-DD` (UTC midnight) or a full RFC3339 UTC timestamp.
fn parse_query(value: &str) -> Result<UtcDateTime, CliError> {
    if value.contains('T') {
        return Ok(UtcDateTime::parse(value)?);
    }
    Ok(UtcDateTime::start_of_day(parse_date(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{chart_args, dataset};

    fn args(file: &tempfile::NamedTempFile, at: Option<&str>, x: Option<f64>) -> FocusArgs {
        FocusArgs {
            chart: chart_args(file),
            at: at.map(str::to_owned),
            x,
        }
    }

    #[test]
    fn focuses_by_date_and_formats_legend() {
        let file = dataset();

        let result = run(&args(&file, Some("2018-03-01"), None)).expect("focuses");

        let legend = result.data["legend"].as_array().expect("legend lines");
        assert_eq!(legend[0], "date: 3/1/2018");
        assert_eq!(legend[1], "high: 105.00");
        assert_eq!(legend[3], "open: 101.23");
        assert_eq!(legend[4], "close: 103.46");
        assert_eq!(legend[5], "volume: 500000");
        assert!(result.data["crosshair"]["x"].is_number());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn weekend_query_snaps_to_nearest_trading_day() {
        let file = dataset();

        // Saturday 2018-03-03 12:00 is closer to Friday 03-02 14:30 than to Tuesday 03-06.
        let result = run(&args(&file, Some("2018-03-03T12:00:00Z"), None)).expect("focuses");

        assert_eq!(result.data["record"]["date"], "2018-03-02T14:30:00Z");
    }

    #[test]
    fn pixel_query_clamps_to_last_record() {
        let file = dataset();

        let result = run(&args(&file, None, Some(10_000.0))).expect("focuses");

        assert_eq!(result.data["record"]["close"], 101.0);
        assert_eq!(result.data["crosshair"]["horizontal_length"], 0.0);
    }

    #[test]
    fn empty_series_reports_nothing_focused() {
        let file = dataset();
        let mut focus_args = args(&file, Some("2018-03-01"), None);
        focus_args.chart.start_date = String::from("2030-01-01");

        let result = run(&focus_args).expect("does not fail");

        assert!(result.data["record"].is_null());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn rejects_unparseable_query() {
        let file = dataset();
        let err = run(&args(&file, Some("yesterday"), None)).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}

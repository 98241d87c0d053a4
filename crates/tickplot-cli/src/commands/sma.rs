use serde_json::json;

use crate::cli::RenderArgs;
use crate::error::CliError;

use super::{frame_warnings, load_frame, CommandResult};

pub fn run(args: &RenderArgs) -> Result<CommandResult, CliError> {
    let frame = load_frame(&args.chart)?;
    let data = json!({
        "prior_points": args.chart.window,
        "points": serde_json::to_value(&frame.moving_average)?,
    });

    Ok(CommandResult::ok(data).with_warnings(frame_warnings(&frame)))
}

use crate::cli::RenderArgs;
use crate::error::CliError;

use super::{frame_warnings, load_frame, CommandResult};

pub fn run(args: &RenderArgs) -> Result<CommandResult, CliError> {
    let frame = load_frame(&args.chart)?;
    let warnings = frame_warnings(&frame);
    let data = serde_json::to_value(&frame)?;

    Ok(CommandResult::ok(data).with_warnings(warnings))
}

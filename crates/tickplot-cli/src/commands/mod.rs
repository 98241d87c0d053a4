mod focus;
mod render;
mod sma;

use std::fs;

use serde_json::Value;
use tickplot_core::{
    parse_chart_json, parse_date, ChartConfig, Envelope, EnvelopeMeta, Margin, RenderFrame,
    SCHEMA_VERSION,
};
use tracing::debug;
use uuid::Uuid;

use crate::cli::{ChartArgs, Cli, Command};
use crate::error::CliError;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let CommandResult { data, warnings } = match &cli.command {
        Command::Render(args) => render::run(args)?,
        Command::Focus(args) => focus::run(args)?,
        Command::Sma(args) => sma::run(args)?,
    };

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), SCHEMA_VERSION)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::new(meta, data).map_err(CliError::from)
}

pub(crate) fn chart_config(args: &ChartArgs) -> Result<ChartConfig, CliError> {
    let start_date = parse_date(&args.start_date)?;
    let config = ChartConfig::new(
        start_date,
        args.window,
        args.width,
        args.height,
        Margin::uniform(args.margin),
    )?;
    Ok(config)
}

/// Reads the dataset named in `args` and runs one render pass over it.
pub(crate) fn load_frame(args: &ChartArgs) -> Result<RenderFrame, CliError> {
    let config = chart_config(args)?;

    let body = fs::read_to_string(&args.dataset).map_err(|source| CliError::Read {
        path: args.dataset.clone(),
        source,
    })?;
    let raw = parse_chart_json(&body).map_err(|source| CliError::Dataset {
        path: args.dataset.clone(),
        source,
    })?;
    debug!(path = %args.dataset.display(), records = raw.len(), "loaded dataset");

    Ok(RenderFrame::build(&raw, &config)?)
}

/// Warnings shared by every command that renders a frame.
pub(crate) fn frame_warnings(frame: &RenderFrame) -> Vec<String> {
    let mut warnings = Vec::new();
    if frame.is_empty() {
        warnings.push(format!(
            "no valid records on or after {}; nothing to plot",
            frame.series.start_date
        ));
    } else if frame.scales.volume.is_none() {
        warnings.push(String::from("no traded volume in series; volume bars omitted"));
    }
    warnings
}

//! Lint target implementation.
use crate::{cli, command::common, pipeline, result::Result};

/// Run the configured lint tool (flake8 by default).
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = common::resolve_config(args)?;
    let step = common::python_tool_step(&config, &config.lint.command);
    pipeline::run_steps(&[step])
}

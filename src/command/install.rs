//! Install target implementation.
use crate::{cli, command::common, pipeline, result::Result};

/// Install the package with pip, forwarding any extra pip arguments.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = common::resolve_config(args)?;
    pipeline::run_steps(&common::install_steps(&config))
}

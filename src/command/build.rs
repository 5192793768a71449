//! Build target implementation.
use crate::{cli, command::common, pipeline, result::Result};

/// Build the package in place with setup.py.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = common::resolve_config(args)?;
    pipeline::run_steps(&[common::python_step(&config, &["setup.py", "build"])])
}

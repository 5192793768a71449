//! Uninstall target implementation.
use crate::{
    cli,
    command::common,
    pipeline::{self, Step},
    result::Result,
};

/// Uninstall the package with pip.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = common::resolve_config(args)?;

    let step = Step::new(&config.python)
        .args(["-m", "pip", "uninstall", "-y"])
        .arg(&config.package);

    pipeline::run_steps(&[step])
}

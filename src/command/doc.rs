//! Documentation target implementation.
use std::{fs, path::Path};

use crate::{cli, command::common, pipeline, result::Result};
use color_eyre::eyre::WrapErr;

/// Install the package, build the HTML documentation with sphinx, and copy
/// the generated index into the doc output root.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = common::resolve_config(args)?;

    let html_dir = format!("{}/html", config.doc.output);

    let mut steps = common::install_steps(&config);
    steps.push(common::python_step(
        &config,
        &[
            "-m",
            "sphinx",
            "-b",
            "html",
            config.doc.source.as_str(),
            html_dir.as_str(),
        ],
    ));

    pipeline::run_steps(&steps)?;

    let index = Path::new(&html_dir).join("index.html");
    let target = Path::new(&config.doc.output).join("index.html");

    fs::copy(&index, &target).wrap_err_with(|| {
        format!(
            "failed to copy {} to {}",
            index.display(),
            target.display()
        )
    })?;

    Ok(())
}

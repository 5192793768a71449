//! Sequential fail-fast execution of external tool invocations.
//!
//! Every target is an ordered list of [`Step`]s. Steps run one at a time in
//! written order; a nonzero exit status (or a spawn failure) halts the
//! remaining steps. There is no rollback.
use log::*;
use std::{fmt, process::Command};

use crate::{error::RelmakeError, result::Result};
use color_eyre::eyre::WrapErr;

/// A single external command invocation.
#[derive(Debug, Clone)]
pub struct Step {
    program: String,
    args: Vec<String>,
}

impl Step {
    /// Create a step invoking `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the step, inheriting stdio, and fail on nonzero exit.
    fn run(&self) -> Result<()> {
        info!("running: {self}");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .wrap_err_with(|| format!("failed to spawn {}", self.program))?;

        if !status.success() {
            return Err(RelmakeError::StepFailed {
                program: self.program.clone(),
                status,
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run steps in order, halting at the first failure.
pub fn run_steps(steps: &[Step]) -> Result<()> {
    for step in steps {
        step.run()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn runs_successful_steps_in_order() {
        let steps = [Step::new("true"), Step::new("true")];
        assert!(run_steps(&steps).is_ok());
    }

    #[test]
    fn nonzero_exit_fails_the_pipeline() {
        let err = run_steps(&[Step::new("false")]).unwrap_err();

        match err.downcast_ref::<RelmakeError>() {
            Some(RelmakeError::StepFailed { program, .. }) => {
                assert_eq!(program, "false")
            }
            other => panic!("expected step failure, got {:?}", other),
        }
    }

    #[test]
    fn spawn_failure_fails_the_pipeline() {
        let result =
            run_steps(&[Step::new("relmake-no-such-program-exists")]);
        assert!(result.is_err());
    }

    /// A failing step must halt the pipeline before later steps run.
    #[test]
    fn halts_remaining_steps_on_failure() {
        let tmp_dir = TempDir::new().unwrap();
        let marker = tmp_dir.path().join("marker");

        let steps = [
            Step::new("false"),
            Step::new("touch").arg(marker.display().to_string()),
        ];

        assert!(run_steps(&steps).is_err());
        assert!(!marker.exists());
    }

    #[test]
    fn displays_program_and_args() {
        let step = Step::new("python3").args(["-m", "pip", "install", "."]);
        assert_eq!(step.to_string(), "python3 -m pip install .");
    }
}

//! Gated release publication command implementation.
use log::*;
use semver::Version;
use std::{fs, path::Path};

use crate::{
    changelog, cli,
    command::{clean, common},
    config::Config,
    error::RelmakeError,
    pipeline::{self, Step},
    repo::Repository,
    result::Result,
};
use color_eyre::eyre::WrapErr;

/// Execute the release target: gate the version on the changelog, then tag,
/// push, rebuild the source distribution from a clean tree, and upload it.
///
/// Steps run fail-fast with no rollback. A failure after the push leaves
/// the tag on the remote with no published artifact, which is an accepted
/// inconsistency of this workflow.
pub fn execute(args: &cli::Args, version: &str) -> Result<()> {
    let version = version.trim();

    if version.is_empty() {
        return Err(RelmakeError::BlankVersion.into());
    }

    let config = common::resolve_config(args)?;

    Version::parse(version)
        .map_err(RelmakeError::InvalidVersion)
        .wrap_err_with(|| format!("invalid release version {version}"))?;

    changelog::verify_released(Path::new(&config.changelog), version)?;

    let tag = format!("{}{}", config.tag_prefix, version);
    let repo = Repository::open(Path::new("."))?;
    let sha = repo.tag_head(&tag)?;
    info!("tagged {tag} at {sha}");

    pipeline::run_steps(&[push_step(&config, &tag)])?;

    clean::remove_artifacts(Path::new("."), &config)?;

    let sdist = common::python_step(&config, &["setup.py", "sdist"]);
    pipeline::run_steps(&[sdist])?;

    let upload = upload_step(&config)?;
    pipeline::run_steps(&[upload])?;

    info!("released {tag}");

    Ok(())
}

/// Push the version tag to the configured remote using the developer's
/// ambient git credentials.
fn push_step(config: &Config, tag: &str) -> Step {
    Step::new("git").args(["push", config.remote.as_str(), tag])
}

/// Upload every file in the dist directory with twine. The pipeline has no
/// shell to expand `dist/*`, so the directory is enumerated explicitly.
fn upload_step(config: &Config) -> Result<Step> {
    let mut files = vec![];

    for entry in fs::read_dir(&config.dist_dir).wrap_err_with(|| {
        format!("failed to read dist directory {}", config.dist_dir)
    })? {
        let entry = entry?;

        if entry.file_type()?.is_file() {
            files.push(entry.path().display().to_string());
        }
    }

    if files.is_empty() {
        return Err(RelmakeError::EmptyDistDir(config.dist_dir.clone()).into());
    }

    files.sort();

    Ok(Step::new(&config.python)
        .args(["-m", "twine", "upload"])
        .args(files))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::{Args, Command};

    fn release_args(version: &str) -> Args {
        Args {
            python: None,
            pip_args: None,
            config: Some("does-not-exist.toml".into()),
            debug: false,
            command: Command::Release {
                version: version.to_string(),
            },
        }
    }

    #[test]
    fn blank_version_is_rejected_with_guidance() {
        let args = release_args("  ");
        let err = execute(&args, "  ").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RelmakeError>(),
            Some(RelmakeError::BlankVersion)
        ));
        assert!(err.to_string().contains("relmake release <VERSION>"));
    }

    #[test]
    fn malformed_version_is_rejected_before_the_gate() {
        let args = release_args("not-a-version");
        let err = execute(&args, "not-a-version").unwrap_err();
        assert!(err.to_string().contains("invalid release version"));
    }

    #[test]
    fn push_step_targets_configured_remote() {
        let config = Config {
            remote: "upstream".to_string(),
            tag_prefix: "v".to_string(),
            ..Config::default()
        };

        let step = push_step(&config, "v1.2.3");
        assert_eq!(step.to_string(), "git push upstream v1.2.3");
    }

    #[test]
    fn upload_step_enumerates_dist_files() {
        let tmp_dir = TempDir::new().unwrap();
        let dist = tmp_dir.path().join("dist");
        fs::create_dir(&dist).unwrap();
        fs::write(dist.join("pyocr-1.2.3.tar.gz"), "sdist").unwrap();
        fs::write(dist.join("pyocr-1.2.3-py3-none-any.whl"), "wheel")
            .unwrap();

        let config = Config {
            dist_dir: dist.display().to_string(),
            ..Config::default()
        };

        let step = upload_step(&config).unwrap();
        let rendered = step.to_string();

        assert!(rendered.starts_with("python3 -m twine upload"));
        assert!(rendered.contains("pyocr-1.2.3.tar.gz"));
        assert!(rendered.contains("pyocr-1.2.3-py3-none-any.whl"));
    }

    #[test]
    fn empty_dist_dir_is_an_error() {
        let tmp_dir = TempDir::new().unwrap();
        let dist = tmp_dir.path().join("dist");
        fs::create_dir(&dist).unwrap();

        let config = Config {
            dist_dir: dist.display().to_string(),
            ..Config::default()
        };

        let err = upload_step(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RelmakeError>(),
            Some(RelmakeError::EmptyDistDir(_))
        ));
    }
}

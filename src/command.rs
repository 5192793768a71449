//! Target execution for relmake.
//!
//! Each module implements one CLI target as an ordered, fail-fast pipeline
//! of external tool invocations. Most targets are pure delegation to the
//! Python packaging toolchain; `release` additionally runs the changelog
//! gate and git tagging before anything is built or uploaded.

/// Shared plumbing: effective configuration and common step builders.
pub mod common;

/// Build the package in place with setup.py.
pub mod build;

/// Run the configured lint tool.
pub mod check;

/// Remove build, dist, doc, and cache artifacts.
pub mod clean;

/// Install the package, then generate HTML documentation.
pub mod doc;

/// Install the package with pip.
pub mod install;

/// Changelog-gated release publication: tag, push, sdist, upload.
pub mod release;


/// Uninstall the package with pip.
pub mod uninstall;

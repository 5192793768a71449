//! Changelog lookup backing the release gate.
//!
//! A version may only be published when the changelog records it on a line
//! that is not marked unreleased. The match is against a standalone version
//! token, so `1.2` does not pass the gate just because `1.2.3` is recorded.
use log::*;
use regex::Regex;
use std::{fs, path::Path};

use crate::{
    error::{self, RelmakeError},
    result::Result,
};
use color_eyre::eyre::WrapErr;

/// Marker suffix identifying a changelog entry that has not shipped yet.
pub const UNRELEASED_MARKER: &str = "/xx";

/// Outcome of searching the changelog for a version.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    /// Found on a line without the unreleased marker.
    Released(String),
    /// Found, but only on lines carrying the unreleased marker.
    Unreleased(String),
    /// Not found at all.
    Missing,
}

/// Verify that `version` is documented in the changelog at `path` on a line
/// not marked unreleased. This is the release gate: any error here must
/// abort the release before tagging, pushing, building, or uploading.
pub fn verify_released(path: &Path, version: &str) -> Result<()> {
    let content = fs::read_to_string(path).wrap_err_with(|| {
        format!("failed to read changelog {}", path.display())
    })?;

    match find_entry(&content, version)? {
        Entry::Released(line) => {
            debug!("changelog entry for {version}: {line}");
            Ok(())
        }
        Entry::Unreleased(line) => Err(RelmakeError::unreleased(
            version,
            path.display().to_string(),
            line,
        )
        .into()),
        Entry::Missing => {
            Err(RelmakeError::not_documented(version, path.display().to_string())
                .into())
        }
    }
}

/// Scan changelog content for `version` as a standalone token. A line
/// without the unreleased marker wins over any marked line.
fn find_entry(content: &str, version: &str) -> error::Result<Entry> {
    // version must not be preceded or followed by characters that would
    // make it part of a longer version token
    let pattern = format!(
        r"(^|[^0-9A-Za-z.]){}($|[^0-9A-Za-z.])",
        regex::escape(version)
    );
    let version_regex = Regex::new(&pattern)?;

    let mut unreleased: Option<String> = None;

    for line in content.lines() {
        if !version_regex.is_match(line) {
            continue;
        }

        if line.contains(UNRELEASED_MARKER) {
            unreleased.get_or_insert_with(|| line.to_string());
        } else {
            return Ok(Entry::Released(line.to_string()));
        }
    }

    Ok(match unreleased {
        Some(line) => Entry::Unreleased(line),
        None => Entry::Missing,
    })
}

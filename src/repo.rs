//! Git repository operations for the release pipeline.
//!
//! Thin wrapper around `git2` for the local operations a release needs:
//! opening the project repository and creating the annotated version tag.
//! Pushing the tag goes through the regular step pipeline so it uses the
//! developer's ambient git credentials.
use log::*;
use std::path::Path;

use crate::error::Result;

/// Local git repository wrapper for tagging released versions.
pub struct Repository {
    /// The underlying git2 repository instance.
    repo: git2::Repository,
}

impl Repository {
    /// Open the repository containing `path`, searching parent directories
    /// the way git itself does.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// Create an annotated tag pointing at HEAD.
    ///
    /// The tagger signature comes from the repository's git configuration
    /// (`user.name` and `user.email`), and the tag message is the tag name,
    /// matching `git tag -a <tag> -m <tag>`. Creation is not forced, so an
    /// existing tag with the same name is an error.
    pub fn tag_head(&self, tag: &str) -> Result<String> {
        let config = self.repo.config()?.snapshot()?;
        let user = config.get_str("user.name")?;
        let email = config.get_str("user.email")?;

        let commit = self.repo.head()?.peel_to_commit()?;
        let tagger = git2::Signature::now(user, email)?;

        info!("tagging {} at {}", tag, commit.id());

        self.repo
            .tag(tag, commit.as_object(), &tagger, tag, false)?;

        Ok(commit.id().to_string())
    }
}

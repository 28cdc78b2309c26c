use std::fmt;
use serde::{Deserialize, Serialize};

/// Source-control hosts the review service knows how to fetch pull requests from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum GitProvider {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "gitlab")]
    GitLab,
    #[serde(rename = "bitbucket")]
    Bitbucket,
}

impl GitProvider {
    pub const ALL: [GitProvider; 3] = [GitProvider::GitHub, GitProvider::GitLab, GitProvider::Bitbucket];

    pub fn as_str(&self) -> &'static str {
        match self {
            GitProvider::GitHub => "github",
            GitProvider::GitLab => "gitlab",
            GitProvider::Bitbucket => "bitbucket",
        }
    }

    /// Host fragment matched against a PR URL's hostname.
    pub fn host(&self) -> &'static str {
        match self {
            GitProvider::GitHub => "github.com",
            GitProvider::GitLab => "gitlab.com",
            GitProvider::Bitbucket => "bitbucket.org",
        }
    }

    /// Path segment that precedes the PR number, and its index in the path.
    pub fn pull_segment(&self) -> (usize, &'static str) {
        match self {
            GitProvider::GitHub => (2, "pull"),
            GitProvider::GitLab => (3, "merge_requests"),
            GitProvider::Bitbucket => (2, "pull-requests"),
        }
    }
}

impl fmt::Display for GitProvider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
